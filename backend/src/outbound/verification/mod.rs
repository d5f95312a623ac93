//! Verification code adapters.
//!
//! [`RandomCodeGenerator`] draws codes from the thread-local RNG.
//! [`TracingCodeSender`] stands in for an email gateway by logging each code
//! through `tracing`, which is enough for local development and the fest
//! help desk.

use async_trait::async_trait;
use rand::Rng;
use tracing::info;

use crate::domain::ports::{
    VerificationCodeGenerator, VerificationCodeSender, VerificationDeliveryError,
};
use crate::domain::{Email, VerificationCode};

/// Uniformly random six-digit codes.
///
/// Each digit is drawn independently from `0..10`, which is uniform over
/// `000000..=999999`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl VerificationCodeGenerator for RandomCodeGenerator {
    fn issue(&self) -> VerificationCode {
        let mut rng = rand::thread_rng();
        VerificationCode::from_digits(std::array::from_fn(|_| rng.gen_range(0..10)))
    }
}

/// Delivery adapter that writes codes to the structured log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCodeSender;

#[async_trait]
impl VerificationCodeSender for TracingCodeSender {
    async fn send(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> Result<(), VerificationDeliveryError> {
        info!(
            target: "verification",
            email = %email,
            code = code.as_str(),
            "verification code issued"
        );
        Ok(())
    }
}
