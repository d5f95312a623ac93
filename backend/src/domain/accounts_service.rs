//! Attendee sign-up and email verification.
//!
//! This service implements the [`UserAccounts`] driving port. Codes come
//! from a [`VerificationCodeGenerator`] and are handed to a
//! [`VerificationCodeSender`] after the store lock has been released.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    RegisterUserRequest, UserAccounts, VerificationCodeGenerator, VerificationCodeSender,
};
use crate::domain::{EmailDomains, Error, Store, User, UserId, UserRegistration};

/// Accounts service implementing the [`UserAccounts`] port.
#[derive(Clone)]
pub struct AccountsService<G, S> {
    store: Store,
    generator: Arc<G>,
    sender: Arc<S>,
    domains: EmailDomains,
}

impl<G, S> AccountsService<G, S> {
    /// Create a service accepting emails from `domains`.
    pub fn new(store: Store, generator: Arc<G>, sender: Arc<S>, domains: EmailDomains) -> Self {
        Self {
            store,
            generator,
            sender,
            domains,
        }
    }
}

#[async_trait]
impl<G, S> UserAccounts for AccountsService<G, S>
where
    G: VerificationCodeGenerator,
    S: VerificationCodeSender,
{
    async fn register_user(&self, request: RegisterUserRequest) -> Result<UserId, Error> {
        let registration = UserRegistration::try_new(
            &request.email,
            &request.institution_id,
            request.semester,
            request.attendance,
            &self.domains,
        )?;

        let (user_id, email, code) = {
            let mut store = self.store.lock()?;
            if store.user_by_email(registration.email()).is_some() {
                return Err(Error::conflict("Email already registered"));
            }
            let user_id = store.next_user_id();
            let code = self.generator.issue();
            let email = registration.email().clone();
            store.insert_user(User::new(user_id, registration, code.clone()));
            (user_id, email, code)
        };
        info!(%user_id, "user registered");

        if let Err(error) = self.sender.send(&email, &code).await {
            warn!(%user_id, %error, "verification code delivery failed");
        }
        Ok(user_id)
    }

    async fn verify(&self, user_id: UserId, code: String) -> Result<bool, Error> {
        let mut store = self.store.lock()?;
        let Some(user) = store.user_mut(user_id) else {
            debug!(%user_id, "verification attempted for unknown user");
            return Ok(false);
        };
        let verified = user.redeem_code(&code);
        if verified {
            info!(%user_id, "email verified");
        } else {
            debug!(%user_id, "verification code rejected");
        }
        Ok(verified)
    }

    async fn profile(&self, user_id: UserId) -> Result<User, Error> {
        let store = self.store.lock()?;
        store
            .user(user_id)
            .cloned()
            .ok_or_else(|| Error::not_found("User not found"))
    }
}

#[cfg(test)]
#[path = "accounts_service_tests.rs"]
mod tests;
