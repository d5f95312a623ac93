//! One-time email verification codes.

use std::fmt;

/// Number of digits in a verification code.
pub const VERIFICATION_CODE_LEN: usize = 6;

/// Errors raised when constructing a [`VerificationCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationCodeError {
    /// The text is not exactly six ASCII digits.
    #[error("verification code must be exactly {VERIFICATION_CODE_LEN} digits")]
    Malformed,
}

/// Six-digit one-time secret proving ownership of an email address.
///
/// Leading zeros are significant: `42` is issued as `"000042"`.
///
/// # Examples
/// ```
/// use backend::domain::VerificationCode;
///
/// let code = VerificationCode::from_digits([0, 0, 0, 0, 4, 2]);
/// assert_eq!(code.as_str(), "000042");
/// assert!(code.matches(" 000042 "));
/// assert!(!code.matches("42"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Validate a textual code.
    pub fn new(value: impl Into<String>) -> Result<Self, VerificationCodeError> {
        let value = value.into();
        if value.len() != VERIFICATION_CODE_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VerificationCodeError::Malformed);
        }
        Ok(Self(value))
    }

    /// Build a code from six decimal digits. Each value is taken modulo 10.
    pub fn from_digits(digits: [u8; VERIFICATION_CODE_LEN]) -> Self {
        Self(digits.iter().map(|d| char::from(b'0' + d % 10)).collect())
    }

    /// Whether the submitted text, ignoring surrounding whitespace, is a
    /// well-formed code equal to this one.
    pub fn matches(&self, submitted: &str) -> bool {
        Self::new(submitted.trim()).is_ok_and(|code| code == *self)
    }

    /// The six digits as text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerificationCode(******)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("004213", true)]
    #[case(" 004213\n", true)]
    #[case("4213", false)]
    #[case("00421x", false)]
    #[case("004214", false)]
    fn submissions_must_be_well_formed_and_equal(#[case] submitted: &str, #[case] expected: bool) {
        let code = VerificationCode::from_digits([0, 0, 4, 2, 1, 3]);
        assert_eq!(code.matches(submitted), expected);
    }

    #[rstest]
    #[case("12345")]
    #[case("1234567")]
    #[case("12a456")]
    #[case("")]
    fn malformed_text_is_rejected(#[case] value: &str) {
        assert_eq!(
            VerificationCode::new(value),
            Err(VerificationCodeError::Malformed)
        );
    }

    #[rstest]
    fn digits_build_a_code() {
        let code = VerificationCode::from_digits([0, 4, 2, 1, 3, 7]);
        assert_eq!(code.as_str(), "042137");
    }

    #[rstest]
    fn debug_output_hides_the_secret() {
        let code = VerificationCode::new("123456").expect("valid code");
        assert!(!format!("{code:?}").contains("123456"));
    }
}
