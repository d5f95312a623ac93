//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`UserAccounts`, `EventCatalogue`, `RegistrationCommand`,
//! `TeamLifecycle`, `CartCommand`) are called by inbound adapters. Driven
//! ports (`VerificationCodeGenerator`, `VerificationCodeSender`) are
//! implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod cart_command;
mod event_catalogue;
mod registration_command;
mod team_lifecycle;
mod user_accounts;
mod verification_code_generator;
mod verification_code_sender;

pub use cart_command::CartCommand;
#[cfg(test)]
pub use cart_command::MockCartCommand;
pub use event_catalogue::EventCatalogue;
#[cfg(test)]
pub use event_catalogue::MockEventCatalogue;
#[cfg(test)]
pub use registration_command::MockRegistrationCommand;
pub use registration_command::RegistrationCommand;
#[cfg(test)]
pub use team_lifecycle::MockTeamLifecycle;
pub use team_lifecycle::{AddMemberRequest, CreateTeamRequest, TeamLifecycle, UpdateMemberRequest};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::{RegisterUserRequest, UserAccounts};
#[cfg(test)]
pub use verification_code_generator::MockVerificationCodeGenerator;
pub use verification_code_generator::{
    FixtureVerificationCodeGenerator, VerificationCodeGenerator,
};
#[cfg(test)]
pub use verification_code_sender::MockVerificationCodeSender;
pub use verification_code_sender::{VerificationCodeSender, VerificationDeliveryError};
