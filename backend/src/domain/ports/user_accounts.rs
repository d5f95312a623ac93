//! Driving port for attendee sign-up and email verification.
//!
//! Inbound adapters submit raw registration fields; the implementation owns
//! validation (including the configured email domains), uniqueness, code
//! issue and delivery.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, User, UserId};

/// Raw registration fields as submitted by the attendee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// Must belong to an allowed institution domain.
    pub email: String,
    pub institution_id: String,
    /// Accepted range is `1..=10`.
    pub semester: i64,
    /// Percentage in `0.0..=100.0`.
    pub attendance: f64,
}

/// Attendee sign-up, verification and profile lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Create an unverified user and send them a verification code.
    ///
    /// # Errors
    ///
    /// - `invalid_request` when a field fails validation.
    /// - `conflict` when the email is already registered.
    async fn register_user(&self, request: RegisterUserRequest) -> Result<UserId, Error>;

    /// Redeem a verification code. Returns `false` for an unknown user, a
    /// used code, or a wrong code.
    async fn verify(&self, user_id: UserId, code: String) -> Result<bool, Error>;

    /// Fetch a user's profile.
    async fn profile(&self, user_id: UserId) -> Result<User, Error>;
}
