//! HTTP inbound adapter exposing REST endpoints.

pub mod cart;
pub mod error;
pub mod events;
pub mod health;
pub mod registrations;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod teams;
pub mod users;
pub mod validation;

pub use error::ApiResult;
