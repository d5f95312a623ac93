//! Shared validation helpers for inbound HTTP adapters.
//!
//! Handlers only check that required fields are present; the domain services
//! own every other rule.

use serde_json::json;

use crate::domain::Error;

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    /// Wrap a camelCase request field name.
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// `invalid_request` error naming the absent field.
pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Unwrap an optional payload field or report it as missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn missing_field_error_names_the_field() {
        let error = missing_field_error(FieldName::new("eventId"));
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "missing required field: eventId");
        assert_eq!(
            error.details(),
            Some(&json!({"field": "eventId", "code": "missing_field"}))
        );
    }

    #[rstest]
    #[case(Some(7), Ok(7))]
    #[case(None, Err("missing required field: userId"))]
    fn require_unwraps_or_reports(#[case] value: Option<u64>, #[case] expected: Result<u64, &str>) {
        let result = require(value, FieldName::new("userId")).map_err(|err| err.message().to_owned());
        assert_eq!(result, expected.map_err(str::to_owned));
    }
}
