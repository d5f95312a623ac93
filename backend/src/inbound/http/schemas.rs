//! OpenAPI schema definitions for types whose wire shape differs from
//! their Rust shape.
//!
//! The domain error serialises its message under `error` through a private
//! DTO, so its schema is declared here instead of being derived. Shared
//! acknowledgement bodies also live here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request duplicates an existing entity.
    #[schema(rename = "conflict")]
    Conflict,
    /// The team is full.
    #[schema(rename = "capacity_exceeded")]
    CapacityExceeded,
    /// Leader protection rules forbid the change.
    #[schema(rename = "permission_denied")]
    PermissionDenied,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
/// OpenAPI description of the error envelope.
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "capacity_exceeded")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Team is full")]
    error: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the failing field.
    details: Option<serde_json::Value>,
}

/// Acknowledgement body for commands without a resource to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Always `true`; failures use the error envelope.
    pub success: bool,
}

impl SuccessResponse {
    /// The only success body.
    pub const OK: Self = Self { success: true };
}
