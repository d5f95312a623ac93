//! Attendee data model and registration input validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, UserId, VerificationCode};

/// Validation errors returned while building a [`UserRegistration`].
#[derive(Debug, Clone, PartialEq)]
pub enum UserValidationError {
    /// Not of the form `local@domain.tld`.
    InvalidEmail,
    /// Domain is outside the configured allow-list.
    EmailDomainNotAllowed,
    EmptyInstitutionId,
    /// Semester is outside `min..=max`.
    SemesterOutOfRange { min: u8, max: u8 },
    AttendanceNegative,
    /// Attendance is above 100 percent.
    AttendanceAboveMaximum,
    /// Attendance is NaN or infinite.
    AttendanceNotFinite,
}

impl UserValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail | Self::EmailDomainNotAllowed => "email",
            Self::EmptyInstitutionId => "institutionId",
            Self::SemesterOutOfRange { .. } => "semester",
            Self::AttendanceNegative | Self::AttendanceAboveMaximum | Self::AttendanceNotFinite => {
                "attendance"
            }
        }
    }

    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "invalid_email",
            Self::EmailDomainNotAllowed => "email_domain",
            Self::EmptyInstitutionId => "empty_institution_id",
            Self::SemesterOutOfRange { .. } => "semester_range",
            Self::AttendanceNegative => "attendance_negative",
            Self::AttendanceAboveMaximum => "attendance_maximum",
            Self::AttendanceNotFinite => "attendance_not_finite",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "Invalid email address"),
            Self::EmailDomainNotAllowed => write!(f, "Must be an institutional email address"),
            Self::EmptyInstitutionId => write!(f, "Institution id is required"),
            Self::SemesterOutOfRange { min, max } => {
                write!(f, "Semester must be between {min} and {max}")
            }
            Self::AttendanceNegative => write!(f, "Attendance cannot be negative"),
            Self::AttendanceAboveMaximum => write!(f, "Attendance cannot exceed 100%"),
            Self::AttendanceNotFinite => write!(f, "Attendance must be a number"),
        }
    }
}

impl std::error::Error for UserValidationError {}

impl From<UserValidationError> for Error {
    fn from(value: UserValidationError) -> Self {
        Error::invalid_field(value.to_string(), value.field(), value.code())
    }
}

/// Email domains accepted at registration, without the leading `@`.
///
/// # Examples
/// ```
/// use backend::domain::EmailDomains;
///
/// let domains = EmailDomains::new(["gitam.edu"]);
/// assert!(domains.allows("student@gitam.edu"));
/// assert!(!domains.allows("student@example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDomains(Vec<String>);

/// Institutional domains accepted when no configuration overrides them.
pub const DEFAULT_EMAIL_DOMAINS: [&str; 2] = ["gitam.in", "gitam.edu"];

impl EmailDomains {
    /// Build the allow-list, normalising each domain to lowercase.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            domains
                .into_iter()
                .map(|domain| domain.as_ref().trim().trim_start_matches('@').to_lowercase())
                .filter(|domain| !domain.is_empty())
                .collect(),
        )
    }

    /// Whether `email` ends in one of the allowed domains.
    pub fn allows(&self, email: &str) -> bool {
        let email = email.to_lowercase();
        self.0
            .iter()
            .any(|domain| email.ends_with(&format!("@{domain}")))
    }
}

impl Default for EmailDomains {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_DOMAINS)
    }
}

/// Syntax accepted for email addresses before the domain check.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

#[expect(
    clippy::expect_used,
    reason = "EMAIL_PATTERN is a fixed literal and its compilation is unit tested"
)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Lowercased institutional email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Email(String);

impl Email {
    /// Validate syntax and domain.
    pub fn parse(raw: &str, domains: &EmailDomains) -> Result<Self, UserValidationError> {
        let email = raw.trim().to_lowercase();
        if !EMAIL_RE.is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        if !domains.allows(&email) {
            return Err(UserValidationError::EmailDomainNotAllowed);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Lowest valid semester.
pub const SEMESTER_MIN: u8 = 1;
/// Highest valid semester.
pub const SEMESTER_MAX: u8 = 10;

/// Validated registration submitted by a prospective attendee.
///
/// ## Invariants
/// - `email` is lowercase and belongs to an allowed domain.
/// - `institution_id` is non-empty once trimmed.
/// - `semester` lies in `1..=10`; `attendance` lies in `0.0..=100.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRegistration {
    email: Email,
    institution_id: String,
    semester: u8,
    attendance: f64,
}

impl UserRegistration {
    /// Validate raw registration fields. Fields are checked in declaration
    /// order and the first failure is returned.
    pub fn try_new(
        email: &str,
        institution_id: &str,
        semester: i64,
        attendance: f64,
        domains: &EmailDomains,
    ) -> Result<Self, UserValidationError> {
        let email = Email::parse(email, domains)?;

        let institution_id = institution_id.trim();
        if institution_id.is_empty() {
            return Err(UserValidationError::EmptyInstitutionId);
        }

        let semester = u8::try_from(semester)
            .ok()
            .filter(|value| (SEMESTER_MIN..=SEMESTER_MAX).contains(value))
            .ok_or(UserValidationError::SemesterOutOfRange {
                min: SEMESTER_MIN,
                max: SEMESTER_MAX,
            })?;

        if !attendance.is_finite() {
            return Err(UserValidationError::AttendanceNotFinite);
        }
        if attendance < 0.0 {
            return Err(UserValidationError::AttendanceNegative);
        }
        if attendance > 100.0 {
            return Err(UserValidationError::AttendanceAboveMaximum);
        }

        Ok(Self {
            email,
            institution_id: institution_id.to_owned(),
            semester,
            attendance,
        })
    }

    /// Normalised email.
    /// Unique, lower-cased email address.
    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// Registered attendee.
///
/// The verification code is never serialised; it only leaves the process
/// through the verification code sender.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    #[schema(value_type = String, example = "student@gitam.edu")]
    email: Email,
    #[schema(example = "1210316001")]
    institution_id: String,
    #[schema(example = 4)]
    semester: u8,
    #[schema(example = 82.5)]
    attendance: f64,
    verified: bool,
    #[serde(skip)]
    verification_code: Option<VerificationCode>,
}

impl User {
    /// Create an unverified user holding an outstanding code.
    pub fn new(id: UserId, registration: UserRegistration, code: VerificationCode) -> Self {
        let UserRegistration {
            email,
            institution_id,
            semester,
            attendance,
        } = registration;
        Self {
            id,
            email,
            institution_id,
            semester,
            attendance,
            verified: false,
            verification_code: Some(code),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Institution roll number or staff id.
    pub fn institution_id(&self) -> &str {
        &self.institution_id
    }

    pub fn semester(&self) -> u8 {
        self.semester
    }

    /// Attendance percentage in `0.0..=100.0`.
    pub fn attendance(&self) -> f64 {
        self.attendance
    }

    /// Whether the email has been confirmed.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Outstanding verification code, `None` once used.
    pub fn verification_code(&self) -> Option<&VerificationCode> {
        self.verification_code.as_ref()
    }

    /// Consume the outstanding code when `submitted` matches it.
    ///
    /// Returns `true` exactly once per issued code.
    pub fn redeem_code(&mut self, submitted: &str) -> bool {
        match &self.verification_code {
            Some(code) if code.matches(submitted) => {
                self.verified = true;
                self.verification_code = None;
                true
            }
            _ => false,
        }
    }
}
