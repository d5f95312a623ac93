//! Driven port for issuing verification codes.

use crate::domain::VerificationCode;

/// Source of fresh six-digit verification codes.
#[cfg_attr(test, mockall::automock)]
pub trait VerificationCodeGenerator: Send + Sync {
    /// Produce a new code.
    fn issue(&self) -> VerificationCode;
}

/// Deterministic generator that always issues the same code.
///
/// # Examples
/// ```
/// use backend::domain::ports::{FixtureVerificationCodeGenerator, VerificationCodeGenerator};
///
/// let generator = FixtureVerificationCodeGenerator::default();
/// assert_eq!(generator.issue().as_str(), "123456");
/// ```
#[derive(Debug, Clone)]
pub struct FixtureVerificationCodeGenerator(VerificationCode);

impl Default for FixtureVerificationCodeGenerator {
    fn default() -> Self {
        Self(VerificationCode::from_digits([1, 2, 3, 4, 5, 6]))
    }
}

impl VerificationCodeGenerator for FixtureVerificationCodeGenerator {
    fn issue(&self) -> VerificationCode {
        self.0.clone()
    }
}
