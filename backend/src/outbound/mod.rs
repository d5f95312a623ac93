//! Outbound adapters implementing driven domain ports.
//!
//! - **verification**: verification code issue and delivery.
//!
//! Adapters are thin translators between domain types and the outside
//! world. They contain no business logic.

pub mod verification;
