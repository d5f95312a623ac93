//! Driving port for the hackathon team lifecycle.
//!
//! Requests carry raw input; the implementation validates it and enforces
//! the membership rules (single leader, unique membership, capacity).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Error, EventId, MemberRole, Team, TeamDetails, TeamId, TeamMember, UserId,
};

/// Request to create a team led by `leader_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    /// At least three characters once trimmed.
    pub name: String,
    pub event_id: EventId,
    /// At least ten characters once trimmed.
    pub description: String,
    /// Skills the team is recruiting for. At least one.
    pub required_skills: Vec<String>,
    pub leader_id: UserId,
}

/// Request to add a user to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub user_id: UserId,
    /// Must be `member`; a team has exactly one leader.
    pub role: MemberRole,
    pub skills: Vec<String>,
}

/// Partial membership update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    /// New role. Promotion to leader is refused.
    pub role: Option<MemberRole>,
    /// Replacement skill list. Must not be empty when present.
    pub skills: Option<Vec<String>>,
}

/// Create hackathon teams and manage their rosters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamLifecycle: Send + Sync {
    /// Create a team and enrol its leader. The returned team has size 1.
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, Error>;

    /// Add a member.
    ///
    /// # Errors
    ///
    /// - `permission_denied` when the requested role is leader.
    /// - `conflict` when the user already belongs to the team.
    /// - `capacity_exceeded` when the team is full.
    async fn add_member(&self, team_id: TeamId, request: AddMemberRequest)
    -> Result<TeamMember, Error>;

    /// Remove a non-leader member.
    async fn remove_member(&self, team_id: TeamId, user_id: UserId) -> Result<(), Error>;

    /// Update a member's role or skills.
    async fn update_member(
        &self,
        team_id: TeamId,
        user_id: UserId,
        request: UpdateMemberRequest,
    ) -> Result<TeamMember, Error>;

    async fn list_by_event(&self, event_id: EventId) -> Result<Vec<Team>, Error>;

    async fn list_by_member(&self, user_id: UserId) -> Result<Vec<Team>, Error>;

    /// The team with each member's profile attached.
    async fn get_details(&self, team_id: TeamId) -> Result<TeamDetails, Error>;
}
