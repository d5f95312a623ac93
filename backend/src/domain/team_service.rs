//! Hackathon team lifecycle.
//!
//! This service implements the [`TeamLifecycle`] driving port. Every member
//! row, the leader's included, enters through [`TeamService::enrol`], which
//! checks uniqueness and capacity before the store inserts the row and
//! counts it against the team.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::{error, info};

use crate::domain::ports::{
    AddMemberRequest, CreateTeamRequest, TeamLifecycle, UpdateMemberRequest,
};
use crate::domain::{
    EntityStore, Error, EventId, MemberRole, MemberWithUser, NewTeam, NewTeamMember, Store, Team,
    TeamDetails, TeamId, TeamMember, TeamMemberUpdate, UserId,
};

/// Team service implementing the [`TeamLifecycle`] port.
#[derive(Clone)]
pub struct TeamService {
    store: Store,
    clock: Arc<dyn Clock>,
}

impl TeamService {
    /// Build the service. `clock` stamps creation and join times.
    pub fn new(store: Store, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn require_team(store: &EntityStore, team_id: TeamId) -> Result<&Team, Error> {
        store
            .team(team_id)
            .ok_or_else(|| Error::not_found("Team not found"))
    }

    fn require_user(store: &EntityStore, user_id: UserId) -> Result<(), Error> {
        store
            .user(user_id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found("User not found"))
    }

    /// Single member-insert path.
    fn enrol(
        store: &mut EntityStore,
        team_id: TeamId,
        user_id: UserId,
        member: NewTeamMember,
        now: DateTime<Utc>,
    ) -> Result<TeamMember, Error> {
        if store.membership(team_id, user_id).is_some() {
            return Err(Error::conflict("User is already a member of this team"));
        }
        if !Self::require_team(store, team_id)?.has_room() {
            return Err(Error::capacity_exceeded("Team is full"));
        }
        store
            .insert_member(team_id, user_id, member, now)
            .ok_or_else(|| Error::capacity_exceeded("Team is full"))
    }
}

#[async_trait]
impl TeamLifecycle for TeamService {
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, Error> {
        let CreateTeamRequest {
            name,
            event_id,
            description,
            required_skills,
            leader_id,
        } = request;
        let new_team = NewTeam::try_new(&name, event_id, &description, required_skills)?;
        let now = self.clock.utc();

        let mut store = self.store.lock()?;
        let capacity = store
            .event(new_team.event_id())
            .map(|event| event.max_team_size())
            .ok_or_else(|| Error::not_found("Event not found"))?;
        Self::require_user(&store, leader_id)?;

        let team_id = store.next_team_id();
        let leader_skills = new_team.required_skills().to_vec();
        store.insert_team(Team::new(team_id, new_team, leader_id, capacity, now));

        // A failure past this point leaves the team allocated without a leader.
        let leader = NewTeamMember::try_new(MemberRole::Leader, leader_skills)?;
        Self::enrol(&mut store, team_id, leader_id, leader, now)?;

        let team = Self::require_team(&store, team_id)?.clone();
        info!(%team_id, %event_id, %leader_id, capacity, "team created");
        Ok(team)
    }

    async fn add_member(
        &self,
        team_id: TeamId,
        request: AddMemberRequest,
    ) -> Result<TeamMember, Error> {
        let AddMemberRequest {
            user_id,
            role,
            skills,
        } = request;
        let member = NewTeamMember::try_new(role, skills)?;
        let now = self.clock.utc();

        let mut store = self.store.lock()?;
        Self::require_team(&store, team_id)?;
        Self::require_user(&store, user_id)?;
        if member.role() == MemberRole::Leader {
            return Err(Error::permission_denied("Team already has a leader"));
        }

        let row = Self::enrol(&mut store, team_id, user_id, member, now)?;
        info!(%team_id, %user_id, "team member added");
        Ok(row)
    }

    async fn remove_member(&self, team_id: TeamId, user_id: UserId) -> Result<(), Error> {
        let mut store = self.store.lock()?;
        Self::require_team(&store, team_id)?;
        let role = store
            .membership(team_id, user_id)
            .map(TeamMember::role)
            .ok_or_else(|| Error::not_found("Team member not found"))?;
        if role == MemberRole::Leader {
            return Err(Error::permission_denied("Cannot remove team leader"));
        }

        store.remove_member(team_id, user_id);
        info!(%team_id, %user_id, "team member removed");
        Ok(())
    }

    async fn update_member(
        &self,
        team_id: TeamId,
        user_id: UserId,
        request: UpdateMemberRequest,
    ) -> Result<TeamMember, Error> {
        let update = TeamMemberUpdate::try_new(request.role, request.skills)?;

        let mut store = self.store.lock()?;
        Self::require_team(&store, team_id)?;
        let member = store
            .membership_mut(team_id, user_id)
            .ok_or_else(|| Error::not_found("Team member not found"))?;
        match (member.role(), update.role()) {
            (MemberRole::Leader, Some(MemberRole::Member)) => {
                return Err(Error::permission_denied("Cannot change leader's role"));
            }
            (MemberRole::Member, Some(MemberRole::Leader)) => {
                return Err(Error::permission_denied("Team already has a leader"));
            }
            _ => {}
        }

        member.apply(update);
        Ok(member.clone())
    }

    async fn list_by_event(&self, event_id: EventId) -> Result<Vec<Team>, Error> {
        let store = self.store.lock()?;
        Ok(store.teams_by_event(event_id).cloned().collect())
    }

    async fn list_by_member(&self, user_id: UserId) -> Result<Vec<Team>, Error> {
        let store = self.store.lock()?;
        Ok(store.teams_by_member(user_id).cloned().collect())
    }

    async fn get_details(&self, team_id: TeamId) -> Result<TeamDetails, Error> {
        let store = self.store.lock()?;
        let team = Self::require_team(&store, team_id)?.clone();
        let members = store
            .members_of(team_id)
            .map(|row| match store.user(row.user_id()) {
                Some(user) => Ok(MemberWithUser {
                    member: row.clone(),
                    user: user.clone(),
                }),
                None => {
                    error!(
                        %team_id,
                        user_id = %row.user_id(),
                        "team member references a missing user"
                    );
                    Err(Error::internal("Team member user not found"))
                }
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(TeamDetails { team, members })
    }
}

#[cfg(test)]
#[path = "team_service_tests.rs"]
mod tests;
