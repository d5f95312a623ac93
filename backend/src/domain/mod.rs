//! Domain primitives, aggregates and services.
//!
//! Purpose: Define the registration and team lifecycle rules independently
//! of transport. Entities keep their invariants behind constructors and
//! accessors; services implement the driving ports in [`ports`] on top of
//! the shared [`Store`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Entities: `User`, `Event`, `Registration`, `Team`, `TeamMember`, `Cart`,
//!   `CartItem`, `Order`.
//! - Services: `AccountsService`, `CatalogueService`, `RegistrationService`,
//!   `TeamService`, `CartService`.

pub mod accounts_service;
pub mod cart;
pub mod cart_service;
pub mod catalogue_service;
pub mod error;
pub mod event;
pub mod ids;
pub mod ports;
pub mod registration;
pub mod registration_service;
pub mod store;
pub mod team;
pub mod team_service;
pub mod trace_id;
pub mod user;
pub mod verification;

#[cfg(test)]
pub(crate) mod service_test_helpers;

pub use self::accounts_service::AccountsService;
pub use self::cart::{Cart, CartItem, CartStatus, CartView, Order, OrderStatus};
pub use self::cart_service::CartService;
pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::event::{
    CatalogueParseError, Event, EventDefinition, EventKind, EventValidationError,
    default_catalogue, parse_catalogue,
};
pub use self::ids::{
    CartId, CartItemId, EventId, IdSequence, OrderId, RegistrationId, SequenceId, TeamId,
    TeamMemberId, UserId,
};
pub use self::registration::{PaymentStatus, Registration, RegistrationStatus};
pub use self::registration_service::RegistrationService;
pub use self::store::{EntityStore, Store};
pub use self::team::{
    MemberRole, MemberWithUser, NewTeam, NewTeamMember, Team, TeamDetails, TeamMember,
    TeamMemberUpdate, TeamStatus, TeamValidationError,
};
pub use self::team_service::TeamService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    DEFAULT_EMAIL_DOMAINS, Email, EmailDomains, User, UserRegistration, UserValidationError,
};
pub use self::verification::{VerificationCode, VerificationCodeError};

