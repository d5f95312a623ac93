//! Attendee sign-up, verification and profile handlers.
//!
//! ```text
//! POST /api/register
//! POST /api/verify
//! GET  /api/users/{userId}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::RegisterUserRequest;
use crate::domain::{Error, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SuccessResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Registration payload. Fields are optional so a missing one is reported
/// by name rather than as a generic body error.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Institution email address.
    #[schema(example = "student@gitam.edu")]
    pub email: Option<String>,
    /// Roll number or staff id.
    #[schema(example = "1210316001")]
    pub institution_id: Option<String>,
    /// Current semester.
    #[schema(example = 4)]
    pub semester: Option<i64>,
    /// Attendance percentage.
    #[schema(example = 82.5)]
    pub attendance: Option<f64>,
}

/// Identifier of the newly registered attendee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Identifier to verify the account with.
    pub user_id: UserId,
}

/// Verification payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Account being verified.
    pub user_id: Option<UserId>,
    /// Six-digit code sent on registration.
    #[schema(example = "123456")]
    pub code: Option<String>,
}

fn parse_register_request(payload: RegisterRequest) -> Result<RegisterUserRequest, Error> {
    Ok(RegisterUserRequest {
        email: require(payload.email, FieldName::new("email"))?,
        institution_id: require(payload.institution_id, FieldName::new("institutionId"))?,
        semester: require(payload.semester, FieldName::new("semester"))?,
        attendance: require(payload.attendance, FieldName::new("attendance"))?,
    })
}

/// Register an attendee and send them a verification code.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Attendee registered", body = RegisterResponse),
        (status = 400, description = "Invalid request or email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let request = parse_register_request(payload.into_inner())?;
    let user_id = state.accounts.register_user(request).await?;
    Ok(web::Json(RegisterResponse { user_id }))
}

/// Redeem a verification code.
#[utoipa::path(
    post,
    path = "/api/verify",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Email verified", body = SuccessResponse),
        (status = 400, description = "Missing fields or invalid code", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "verifyUser"
)]
#[post("/verify")]
pub async fn verify(
    state: web::Data<HttpState>,
    payload: web::Json<VerifyRequest>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let VerifyRequest { user_id, code } = payload.into_inner();
    let user_id = require(user_id, FieldName::new("userId"))?;
    let code = require(code, FieldName::new("code"))?;

    if state.accounts.verify(user_id, code).await? {
        Ok(web::Json(SuccessResponse::OK))
    } else {
        Err(Error::invalid_request("Invalid verification code"))
    }
}

/// Fetch an attendee's profile. The verification code is never included.
#[utoipa::path(
    get,
    path = "/api/users/{userId}",
    params(("userId" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn profile(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<User>> {
    let user = state.accounts.profile(UserId::new(path.into_inner())).await?;
    Ok(web::Json(user))
}
