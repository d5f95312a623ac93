//! Numeric identifiers for every entity kind held by the store.
//!
//! Identifiers are allocated by [`IdSequence`] inside the entity store and
//! are strictly increasing per kind for the life of the process.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
        )]
        #[serde(transparent)]
        #[schema(value_type = u64, example = 1)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Raw identifier value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl SequenceId for $name {
            fn from_raw(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

/// Identifier types that can be minted by an [`IdSequence`].
pub trait SequenceId: Copy {
    /// Build the identifier from the next raw sequence value.
    fn from_raw(value: u64) -> Self;
}

define_id!(
    /// Identifier of a registered attendee.
    UserId
);
define_id!(
    /// Identifier of a catalogue event.
    EventId
);
define_id!(
    /// Identifier of an event registration.
    RegistrationId
);
define_id!(
    /// Identifier of a hackathon team.
    TeamId
);
define_id!(
    /// Identifier of a team membership row.
    TeamMemberId
);
define_id!(
    /// Identifier of a user's cart.
    CartId
);
define_id!(
    /// Identifier of a cart line item.
    CartItemId
);
define_id!(
    /// Identifier of a checkout order.
    OrderId
);

/// Monotonic per-kind identifier allocator starting at 1.
///
/// # Examples
/// ```
/// use backend::domain::{IdSequence, TeamId};
///
/// let mut teams = IdSequence::<TeamId>::default();
/// assert_eq!(teams.next_id(), TeamId::new(1));
/// assert_eq!(teams.next_id(), TeamId::new(2));
/// ```
#[derive(Debug)]
pub struct IdSequence<T> {
    next: u64,
    _kind: PhantomData<T>,
}

impl<T> Default for IdSequence<T> {
    fn default() -> Self {
        Self {
            next: 1,
            _kind: PhantomData,
        }
    }
}

impl<T: SequenceId> IdSequence<T> {
    /// Allocate the next identifier.
    pub fn next_id(&mut self) -> T {
        let id = T::from_raw(self.next);
        self.next += 1;
        id
    }
}
