//! `define_port_error!`: declare a driven-port error enum in one block.
//!
//! Each variant names its display message next to its fields. The macro
//! derives `thiserror::Error` and adds a snake_case constructor per variant
//! whose field parameters accept anything convertible into the field type.
//!
//! ```ignore
//! define_port_error! {
//!     /// Errors raised by a delivery adapter.
//!     pub enum DeliveryError {
//!         Unavailable { message: String } => "delivery unavailable: {message}",
//!         Disabled => "delivery disabled",
//!     }
//! }
//!
//! let error = DeliveryError::unavailable("relay offline");
//! ```

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),+ }) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                Self::$variant { $($field: $field.into()),+ }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),+ $(,)? } )? => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),+ } )?,
            )+
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),+ } )?);
            )+
        }
    };
}

pub(crate) use define_port_error;
