//! Tests for the team lifecycle service.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::service_test_helpers::{
    HACKATHON, WORKSHOP, fixture_clock, fixture_timestamp, insert_user, seeded_store,
};
use crate::domain::{ErrorCode, TeamStatus};

struct Harness {
    service: TeamService,
    store: Store,
    leader: UserId,
}

impl Harness {
    fn user(&self, local_part: &str) -> UserId {
        insert_user(&self.store, local_part)
    }

    async fn team_for(&self, event: u64) -> Team {
        self.service
            .create_team(create_request(event, self.leader))
            .await
            .expect("team created")
    }

    async fn join(&self, team_id: TeamId, user_id: UserId) -> Result<TeamMember, Error> {
        self.service
            .add_member(team_id, add_request(user_id, MemberRole::Member))
            .await
    }

    async fn size(&self, team_id: TeamId) -> u32 {
        self.service
            .get_details(team_id)
            .await
            .expect("details")
            .team
            .current_size()
    }
}

fn create_request(event: u64, leader_id: UserId) -> CreateTeamRequest {
    CreateTeamRequest {
        name: "Null Pointers".to_owned(),
        event_id: EventId::new(event),
        description: "We build compilers for fun".to_owned(),
        required_skills: vec!["rust".to_owned(), "sql".to_owned()],
        leader_id,
    }
}

fn add_request(user_id: UserId, role: MemberRole) -> AddMemberRequest {
    AddMemberRequest {
        user_id,
        role,
        skills: vec!["design".to_owned()],
    }
}

#[fixture]
fn harness() -> Harness {
    let store = seeded_store();
    let leader = insert_user(&store, "leader");
    Harness {
        service: TeamService::new(store.clone(), fixture_clock()),
        store,
        leader,
    }
}

#[rstest]
#[tokio::test]
async fn create_team_enrols_leader_with_size_one(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;
    assert_eq!(team.current_size(), 1);
    assert_eq!(team.capacity(), 3);
    assert_eq!(team.status(), TeamStatus::Forming);
    assert_eq!(team.created_at(), fixture_timestamp());

    let details = harness.service.get_details(team.id()).await.expect("details");
    assert_eq!(details.members.len(), 1);
    let leader = &details.members[0];
    assert_eq!(leader.member.role(), MemberRole::Leader);
    assert_eq!(leader.member.user_id(), harness.leader);
    assert_eq!(leader.member.skills(), ["rust", "sql"]);
    assert_eq!(leader.user.id(), harness.leader);
}

#[rstest]
#[tokio::test]
async fn solo_event_team_is_full_at_creation(harness: Harness) {
    let team = harness.team_for(WORKSHOP).await;
    assert_eq!(team.status(), TeamStatus::Full);
    let error = harness
        .join(team.id(), harness.user("late"))
        .await
        .expect_err("team full");
    assert_eq!(error.code(), ErrorCode::CapacityExceeded);
}

#[rstest]
#[case(99, None, "Event not found")]
#[case(HACKATHON, Some(99), "User not found")]
#[tokio::test]
async fn create_team_requires_event_and_leader(
    harness: Harness,
    #[case] event: u64,
    #[case] leader: Option<u64>,
    #[case] message: &str,
) {
    let leader = leader.map_or(harness.leader, UserId::new);
    let error = harness
        .service
        .create_team(create_request(event, leader))
        .await
        .expect_err("missing reference");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), message);
}

#[rstest]
#[tokio::test]
async fn create_team_validates_input(harness: Harness) {
    let mut request = create_request(HACKATHON, harness.leader);
    request.description = "short".to_owned();
    let error = harness
        .service
        .create_team(request)
        .await
        .expect_err("invalid description");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "Please provide a brief team description");
    let store = harness.store.lock().expect("lock store");
    assert_eq!(store.teams_by_event(EventId::new(HACKATHON)).count(), 0);
}

#[rstest]
#[tokio::test]
async fn team_fills_to_capacity_then_rejects(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;
    let (a, b, c) = (harness.user("a"), harness.user("b"), harness.user("c"));

    assert_eq!(harness.size(team.id()).await, 1);
    harness.join(team.id(), a).await.expect("a joins");
    assert_eq!(harness.size(team.id()).await, 2);
    harness.join(team.id(), b).await.expect("b joins");
    assert_eq!(harness.size(team.id()).await, 3);

    let error = harness.join(team.id(), c).await.expect_err("c rejected");
    assert_eq!(error.code(), ErrorCode::CapacityExceeded);
    assert_eq!(error.message(), "Team is full");

    let details = harness.service.get_details(team.id()).await.expect("details");
    assert_eq!(details.team.current_size(), 3);
    assert_eq!(details.team.status(), TeamStatus::Full);
    assert_eq!(details.members.len(), 3);
}

#[rstest]
#[tokio::test]
async fn duplicate_membership_is_a_conflict(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;
    let a = harness.user("a");
    harness.join(team.id(), a).await.expect("a joins");

    let error = harness.join(team.id(), a).await.expect_err("duplicate");
    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(harness.size(team.id()).await, 2);

    let error = harness
        .join(team.id(), harness.leader)
        .await
        .expect_err("leader already enrolled");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn joining_as_leader_is_denied(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;
    let error = harness
        .service
        .add_member(team.id(), add_request(harness.user("a"), MemberRole::Leader))
        .await
        .expect_err("second leader");
    assert_eq!(error.code(), ErrorCode::PermissionDenied);
    assert_eq!(error.message(), "Team already has a leader");
}

#[rstest]
#[tokio::test]
async fn add_member_requires_team_user_and_skills(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;

    let missing_team = harness
        .join(TeamId::new(99), harness.user("a"))
        .await
        .expect_err("missing team");
    assert_eq!(missing_team.code(), ErrorCode::NotFound);

    let missing_user = harness
        .join(team.id(), UserId::new(99))
        .await
        .expect_err("missing user");
    assert_eq!(missing_user.message(), "User not found");

    let mut request = add_request(harness.user("b"), MemberRole::Member);
    request.skills.clear();
    let no_skills = harness
        .service
        .add_member(team.id(), request)
        .await
        .expect_err("skills required");
    assert_eq!(no_skills.message(), "Please specify your skills");
}

#[rstest]
#[tokio::test]
async fn removing_the_leader_is_denied(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;
    let error = harness
        .service
        .remove_member(team.id(), harness.leader)
        .await
        .expect_err("leader protected");
    assert_eq!(error.code(), ErrorCode::PermissionDenied);
    assert_eq!(error.message(), "Cannot remove team leader");

    let details = harness.service.get_details(team.id()).await.expect("details");
    assert_eq!(details.members.len(), 1);
    assert_eq!(details.team.current_size(), 1);
}

#[rstest]
#[tokio::test]
async fn removing_a_member_frees_one_slot(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;
    let (a, b) = (harness.user("a"), harness.user("b"));
    harness.join(team.id(), a).await.expect("a joins");
    harness.join(team.id(), b).await.expect("b joins");

    harness.service.remove_member(team.id(), a).await.expect("remove a");
    assert_eq!(harness.size(team.id()).await, 2);
    harness.service.remove_member(team.id(), b).await.expect("remove b");
    assert_eq!(harness.size(team.id()).await, 1);

    let again = harness
        .service
        .remove_member(team.id(), b)
        .await
        .expect_err("already removed");
    assert_eq!(again.code(), ErrorCode::NotFound);

    harness.join(team.id(), a).await.expect("a rejoins");
    assert_eq!(harness.size(team.id()).await, 2);
}

#[rstest]
#[tokio::test]
async fn update_member_replaces_skills(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;
    let a = harness.user("a");
    harness.join(team.id(), a).await.expect("a joins");

    let updated = harness
        .service
        .update_member(
            team.id(),
            a,
            UpdateMemberRequest {
                role: Some(MemberRole::Member),
                skills: Some(vec!["ml".to_owned()]),
            },
        )
        .await
        .expect("update succeeds");
    assert_eq!(updated.skills(), ["ml"]);
    assert_eq!(updated.role(), MemberRole::Member);
}

#[rstest]
#[case(true, MemberRole::Member, "Cannot change leader's role")]
#[case(false, MemberRole::Leader, "Team already has a leader")]
#[tokio::test]
async fn update_member_protects_the_leader_role(
    harness: Harness,
    #[case] target_leader: bool,
    #[case] role: MemberRole,
    #[case] message: &str,
) {
    let team = harness.team_for(HACKATHON).await;
    let a = harness.user("a");
    harness.join(team.id(), a).await.expect("a joins");
    let target = if target_leader { harness.leader } else { a };

    let error = harness
        .service
        .update_member(
            team.id(),
            target,
            UpdateMemberRequest {
                role: Some(role),
                skills: None,
            },
        )
        .await
        .expect_err("role change denied");
    assert_eq!(error.code(), ErrorCode::PermissionDenied);
    assert_eq!(error.message(), message);
}

#[rstest]
#[tokio::test]
async fn update_missing_membership_is_not_found(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;
    let error = harness
        .service
        .update_member(team.id(), UserId::new(99), UpdateMemberRequest::default())
        .await
        .expect_err("missing member");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn listings_filter_by_event_and_member(harness: Harness) {
    let hackathon = harness.team_for(HACKATHON).await;
    let workshop = harness.team_for(WORKSHOP).await;
    let a = harness.user("a");
    harness.join(hackathon.id(), a).await.expect("a joins");

    let by_event = harness
        .service
        .list_by_event(EventId::new(HACKATHON))
        .await
        .expect("list by event");
    assert_eq!(by_event.iter().map(Team::id).collect::<Vec<_>>(), vec![hackathon.id()]);

    let led = harness.service.list_by_member(harness.leader).await.expect("list");
    assert_eq!(
        led.iter().map(Team::id).collect::<Vec<_>>(),
        vec![hackathon.id(), workshop.id()]
    );

    let joined = harness.service.list_by_member(a).await.expect("list");
    assert_eq!(joined.len(), 1);
}

#[rstest]
#[tokio::test]
async fn details_with_a_dangling_member_is_an_internal_error(harness: Harness) {
    let team = harness.team_for(HACKATHON).await;
    {
        let mut store = harness.store.lock().expect("lock store");
        let member = NewTeamMember::try_new(MemberRole::Member, vec!["ml".to_owned()])
            .expect("valid member");
        store
            .insert_member(team.id(), UserId::new(999), member, fixture_timestamp())
            .expect("row inserted");
    }

    let error = harness
        .service
        .get_details(team.id())
        .await
        .expect_err("integrity failure");
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Team member user not found");
}

#[rstest]
#[tokio::test]
async fn details_of_missing_team_is_not_found(harness: Harness) {
    let error = harness
        .service
        .get_details(TeamId::new(42))
        .await
        .expect_err("missing team");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn team_identifiers_increase(harness: Harness) {
    let first = harness.team_for(HACKATHON).await;
    let second = harness.team_for(HACKATHON).await;
    assert!(second.id() > first.id());
}
