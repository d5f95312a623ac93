//! Hackathon teams and their membership rows.
//!
//! A [`Team`] records its capacity when it is created and tracks how many
//! member rows are live. Only the store's member-insert path calls
//! [`Team::record_join`], so a team's size always equals the number of
//! [`TeamMember`] rows that reference it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, EventId, TeamId, TeamMemberId, User, UserId};

/// Minimum team name length, in characters.
pub const TEAM_NAME_MIN: usize = 3;
/// Minimum team description length, in characters.
pub const TEAM_DESCRIPTION_MIN: usize = 10;

/// Validation errors for team and membership input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamValidationError {
    /// Trimmed name is shorter than `min` characters.
    NameTooShort { min: usize },
    /// Trimmed description is shorter than `min` characters.
    DescriptionTooShort { min: usize },
    /// No non-blank required skill was given.
    NoRequiredSkills,
    /// The member listed no non-blank skill.
    NoMemberSkills,
}

impl TeamValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } => "name",
            Self::DescriptionTooShort { .. } => "description",
            Self::NoRequiredSkills => "requiredSkills",
            Self::NoMemberSkills => "skills",
        }
    }

    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } => "name_too_short",
            Self::DescriptionTooShort { .. } => "description_too_short",
            Self::NoRequiredSkills => "required_skills_empty",
            Self::NoMemberSkills => "skills_empty",
        }
    }
}

impl fmt::Display for TeamValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort { min } => write!(f, "Team name must be at least {min} characters"),
            Self::DescriptionTooShort { .. } => write!(f, "Please provide a brief team description"),
            Self::NoRequiredSkills => write!(f, "Select at least one required skill"),
            Self::NoMemberSkills => write!(f, "Please specify your skills"),
        }
    }
}

impl std::error::Error for TeamValidationError {}

impl From<TeamValidationError> for Error {
    fn from(value: TeamValidationError) -> Self {
        Error::invalid_field(value.to_string(), value.field(), value.code())
    }
}

fn clean_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .map(|skill| skill.trim().to_owned())
        .filter(|skill| !skill.is_empty())
        .collect()
}

fn member_skills(skills: Vec<String>) -> Result<Vec<String>, TeamValidationError> {
    let skills = clean_skills(skills);
    if skills.is_empty() {
        return Err(TeamValidationError::NoMemberSkills);
    }
    Ok(skills)
}

/// Role a member plays inside a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// The single member who created the team.
    Leader,
    Member,
}

/// Derived recruitment state of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamStatus {
    /// Open to new members.
    Forming,
    /// Size has reached capacity.
    Full,
}

/// Validated request to create a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    name: String,
    event_id: EventId,
    description: String,
    required_skills: Vec<String>,
}

impl NewTeam {
    /// Validate name, description and skills, in that order.
    pub fn try_new(
        name: &str,
        event_id: EventId,
        description: &str,
        required_skills: Vec<String>,
    ) -> Result<Self, TeamValidationError> {
        let name = name.trim();
        if name.chars().count() < TEAM_NAME_MIN {
            return Err(TeamValidationError::NameTooShort { min: TEAM_NAME_MIN });
        }
        let description = description.trim();
        if description.chars().count() < TEAM_DESCRIPTION_MIN {
            return Err(TeamValidationError::DescriptionTooShort {
                min: TEAM_DESCRIPTION_MIN,
            });
        }
        let required_skills = clean_skills(required_skills);
        if required_skills.is_empty() {
            return Err(TeamValidationError::NoRequiredSkills);
        }
        Ok(Self {
            name: name.to_owned(),
            event_id,
            description: description.to_owned(),
            required_skills,
        })
    }

    /// Event the team is formed for.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Trimmed, non-blank skills the team is looking for.
    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }
}

/// Validated request to join a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeamMember {
    role: MemberRole,
    skills: Vec<String>,
}

impl NewTeamMember {
    /// Validate the joining member's skills.
    pub fn try_new(role: MemberRole, skills: Vec<String>) -> Result<Self, TeamValidationError> {
        Ok(Self {
            role,
            skills: member_skills(skills)?,
        })
    }

    /// Requested role.
    pub fn role(&self) -> MemberRole {
        self.role
    }

    /// Trimmed, non-blank skills.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

/// Partial update of a membership row. Present fields replace stored ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMemberUpdate {
    role: Option<MemberRole>,
    skills: Option<Vec<String>>,
}

impl TeamMemberUpdate {
    /// Validate any skills present. Role changes are checked by the team service.
    pub fn try_new(
        role: Option<MemberRole>,
        skills: Option<Vec<String>>,
    ) -> Result<Self, TeamValidationError> {
        let skills = skills.map(member_skills).transpose()?;
        Ok(Self { role, skills })
    }

    /// Replacement role, if any.
    pub fn role(&self) -> Option<MemberRole> {
        self.role
    }

    /// Replacement skills, if any.
    pub fn skills(&self) -> Option<&[String]> {
        self.skills.as_deref()
    }
}

/// Hackathon team.
///
/// ## Invariants
/// - `current_size <= capacity`.
/// - `status` is `full` exactly when `current_size == capacity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    id: TeamId,
    #[schema(example = "Null Pointers")]
    name: String,
    event_id: EventId,
    leader_id: UserId,
    description: String,
    required_skills: Vec<String>,
    #[schema(example = 3)]
    capacity: u32,
    #[schema(example = 1)]
    current_size: u32,
    status: TeamStatus,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Allocate an empty team. The leader joins through the insert path.
    pub fn new(
        id: TeamId,
        new_team: NewTeam,
        leader_id: UserId,
        capacity: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        let NewTeam {
            name,
            event_id,
            description,
            required_skills,
        } = new_team;
        let mut team = Self {
            id,
            name,
            event_id,
            leader_id,
            description,
            required_skills,
            capacity,
            current_size: 0,
            status: TeamStatus::Forming,
            created_at,
        };
        team.refresh_status();
        team
    }

    /// Stable team identifier.
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Trimmed team name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Event the team competes in.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// User who created and leads the team.
    pub fn leader_id(&self) -> UserId {
        self.leader_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    /// Maximum size, copied from the event when the team was created.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of live member rows, leader included.
    pub fn current_size(&self) -> u32 {
        self.current_size
    }

    /// Recruitment state derived from size and capacity.
    pub fn status(&self) -> TeamStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether another member can join.
    pub fn has_room(&self) -> bool {
        self.current_size < self.capacity
    }

    /// Count a newly inserted member row. Callers check [`Team::has_room`]
    /// first.
    pub(crate) fn record_join(&mut self) {
        self.current_size = self.current_size.saturating_add(1);
        self.refresh_status();
    }

    /// Count a deleted member row. The leader always remains, so the size
    /// never drops below one.
    pub(crate) fn record_leave(&mut self) {
        self.current_size = self.current_size.saturating_sub(1).max(1);
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.status = if self.current_size < self.capacity {
            TeamStatus::Forming
        } else {
            TeamStatus::Full
        };
    }
}

/// Membership row linking a user to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    id: TeamMemberId,
    team_id: TeamId,
    user_id: UserId,
    role: MemberRole,
    skills: Vec<String>,
    joined_at: DateTime<Utc>,
}

impl TeamMember {
    /// Build a member row from a validated join request.
    pub fn new(
        id: TeamMemberId,
        team_id: TeamId,
        user_id: UserId,
        member: NewTeamMember,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            team_id,
            user_id,
            role: member.role,
            skills: member.skills,
            joined_at,
        }
    }

    /// Stable member row identifier.
    pub fn id(&self) -> TeamMemberId {
        self.id
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Role within the team.
    pub fn role(&self) -> MemberRole {
        self.role
    }

    /// Skills the member brings.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// When the row was inserted.
    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    /// Replace the fields present in `update`. Role rules are enforced by
    /// the caller.
    pub(crate) fn apply(&mut self, update: TeamMemberUpdate) {
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(skills) = update.skills {
            self.skills = skills;
        }
    }
}

/// Membership row joined with the member's profile.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberWithUser {
    /// Membership row, flattened into the JSON object.
    #[serde(flatten)]
    pub member: TeamMember,
    /// Profile of the member.
    pub user: User,
}

/// Team with its full roster.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetails {
    pub team: Team,
    /// Members in join order, leader first.
    pub members: Vec<MemberWithUser>,
}
