//! Hackathon team handlers.
//!
//! ```text
//! POST   /api/teams
//! GET    /api/teams/event/{eventId}
//! GET    /api/teams/member/{userId}
//! GET    /api/teams/{teamId}/details
//! POST   /api/teams/{teamId}/members
//! DELETE /api/teams/{teamId}/members/{userId}
//! PATCH  /api/teams/{teamId}/members/{userId}
//! ```

use actix_web::{delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{AddMemberRequest, CreateTeamRequest, UpdateMemberRequest};
use crate::domain::{Error, EventId, MemberRole, Team, TeamDetails, TeamId, TeamMember, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SuccessResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Team creation payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamBody {
    /// Team name, at least three characters.
    #[schema(example = "Null Pointers")]
    pub name: Option<String>,
    /// Event the team competes in.
    pub event_id: Option<EventId>,
    /// Short pitch, at least ten characters.
    #[schema(example = "We build compilers for fun")]
    pub description: Option<String>,
    /// Skills the team is recruiting for.
    #[schema(example = json!(["rust", "sql"]))]
    pub required_skills: Option<Vec<String>>,
    /// Creator, enrolled as the team leader.
    pub leader_id: Option<UserId>,
}

/// Member enrolment payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberBody {
    /// User joining the team.
    pub user_id: Option<UserId>,
    /// Requested role; only `member` is accepted.
    pub role: Option<MemberRole>,
    /// Skills the new member brings.
    #[schema(example = json!(["design"]))]
    pub skills: Option<Vec<String>>,
}

/// Partial member update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberBody {
    /// Replacement role.
    pub role: Option<MemberRole>,
    /// Replacement skills.
    pub skills: Option<Vec<String>>,
}

fn parse_create_team(payload: CreateTeamBody) -> Result<CreateTeamRequest, Error> {
    Ok(CreateTeamRequest {
        name: require(payload.name, FieldName::new("name"))?,
        event_id: require(payload.event_id, FieldName::new("eventId"))?,
        description: require(payload.description, FieldName::new("description"))?,
        required_skills: require(payload.required_skills, FieldName::new("requiredSkills"))?,
        leader_id: require(payload.leader_id, FieldName::new("leaderId"))?,
    })
}

fn parse_add_member(payload: AddMemberBody) -> Result<AddMemberRequest, Error> {
    Ok(AddMemberRequest {
        user_id: require(payload.user_id, FieldName::new("userId"))?,
        role: require(payload.role, FieldName::new("role"))?,
        skills: require(payload.skills, FieldName::new("skills"))?,
    })
}

/// Create a team and enrol its leader.
#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamBody,
    responses(
        (status = 200, description = "Team with its leader enrolled", body = Team),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Event or leader not found", body = ErrorSchema)
    ),
    tags = ["teams"],
    operation_id = "createTeam"
)]
#[post("/teams")]
pub async fn create_team(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTeamBody>,
) -> ApiResult<web::Json<Team>> {
    let request = parse_create_team(payload.into_inner())?;
    let team = state.teams.create_team(request).await?;
    Ok(web::Json(team))
}

/// List the teams formed for an event.
#[utoipa::path(
    get,
    path = "/api/teams/event/{eventId}",
    params(("eventId" = u64, Path, description = "Event identifier")),
    responses((status = 200, description = "Teams", body = [Team])),
    tags = ["teams"],
    operation_id = "listTeamsByEvent"
)]
#[get("/teams/event/{event_id}")]
pub async fn teams_by_event(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<Team>>> {
    let teams = state
        .teams
        .list_by_event(EventId::new(path.into_inner()))
        .await?;
    Ok(web::Json(teams))
}

/// List the teams a user belongs to, led or joined.
#[utoipa::path(
    get,
    path = "/api/teams/member/{userId}",
    params(("userId" = u64, Path, description = "User identifier")),
    responses((status = 200, description = "Teams", body = [Team])),
    tags = ["teams"],
    operation_id = "listTeamsByMember"
)]
#[get("/teams/member/{user_id}")]
pub async fn teams_by_member(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<Team>>> {
    let teams = state
        .teams
        .list_by_member(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(teams))
}

/// Fetch a team with each member's profile.
#[utoipa::path(
    get,
    path = "/api/teams/{teamId}/details",
    params(("teamId" = u64, Path, description = "Team identifier")),
    responses(
        (status = 200, description = "Team details", body = TeamDetails),
        (status = 404, description = "Team not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["teams"],
    operation_id = "getTeamDetails"
)]
#[get("/teams/{team_id}/details")]
pub async fn team_details(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<TeamDetails>> {
    let details = state
        .teams
        .get_details(TeamId::new(path.into_inner()))
        .await?;
    Ok(web::Json(details))
}

/// Add a member to a team.
#[utoipa::path(
    post,
    path = "/api/teams/{teamId}/members",
    params(("teamId" = u64, Path, description = "Team identifier")),
    request_body = AddMemberBody,
    responses(
        (status = 200, description = "Member row", body = TeamMember),
        (status = 400, description = "Invalid request, duplicate member, full team or second leader", body = ErrorSchema),
        (status = 404, description = "Team or user not found", body = ErrorSchema)
    ),
    tags = ["teams"],
    operation_id = "addTeamMember"
)]
#[post("/teams/{team_id}/members")]
pub async fn add_member(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<AddMemberBody>,
) -> ApiResult<web::Json<TeamMember>> {
    let request = parse_add_member(payload.into_inner())?;
    let member = state
        .teams
        .add_member(TeamId::new(path.into_inner()), request)
        .await?;
    Ok(web::Json(member))
}

/// Remove a non-leader member.
#[utoipa::path(
    delete,
    path = "/api/teams/{teamId}/members/{userId}",
    params(
        ("teamId" = u64, Path, description = "Team identifier"),
        ("userId" = u64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Member removed", body = SuccessResponse),
        (status = 400, description = "The leader cannot be removed", body = ErrorSchema),
        (status = 404, description = "Team or member not found", body = ErrorSchema)
    ),
    tags = ["teams"],
    operation_id = "removeTeamMember"
)]
#[delete("/teams/{team_id}/members/{user_id}")]
pub async fn remove_member(
    state: web::Data<HttpState>,
    path: web::Path<(u64, u64)>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let (team_id, user_id) = path.into_inner();
    state
        .teams
        .remove_member(TeamId::new(team_id), UserId::new(user_id))
        .await?;
    Ok(web::Json(SuccessResponse::OK))
}

/// Update a member's role or skills.
#[utoipa::path(
    patch,
    path = "/api/teams/{teamId}/members/{userId}",
    params(
        ("teamId" = u64, Path, description = "Team identifier"),
        ("userId" = u64, Path, description = "User identifier")
    ),
    request_body = UpdateMemberBody,
    responses(
        (status = 200, description = "Updated member row", body = TeamMember),
        (status = 400, description = "Invalid skills or leader role change", body = ErrorSchema),
        (status = 404, description = "Team or member not found", body = ErrorSchema)
    ),
    tags = ["teams"],
    operation_id = "updateTeamMember"
)]
#[patch("/teams/{team_id}/members/{user_id}")]
pub async fn update_member(
    state: web::Data<HttpState>,
    path: web::Path<(u64, u64)>,
    payload: web::Json<UpdateMemberBody>,
) -> ApiResult<web::Json<TeamMember>> {
    let (team_id, user_id) = path.into_inner();
    let UpdateMemberBody { role, skills } = payload.into_inner();
    let member = state
        .teams
        .update_member(
            TeamId::new(team_id),
            UserId::new(user_id),
            UpdateMemberRequest { role, skills },
        )
        .await?;
    Ok(web::Json(member))
}

#[cfg(test)]
#[path = "teams_tests.rs"]
mod tests;
