//! Shared fixtures for domain service tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{
    EmailDomains, EntityStore, Store, User, UserId, UserRegistration, VerificationCode,
    default_catalogue,
};

pub(crate) const HACKATHON: u64 = 1;
pub(crate) const WORKSHOP: u64 = 2;

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 20, 10, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

/// Store seeded with the default catalogue.
pub(crate) fn seeded_store() -> Store {
    Store::new(EntityStore::new(default_catalogue()).expect("valid default catalogue"))
}

/// Insert a verified-or-not attendee directly, bypassing the accounts service.
pub(crate) fn insert_user(store: &Store, local_part: &str) -> UserId {
    let registration = UserRegistration::try_new(
        &format!("{local_part}@gitam.edu"),
        "1210316001",
        4,
        82.5,
        &EmailDomains::default(),
    )
    .expect("valid registration");
    let mut guard = store.lock().expect("lock store");
    let id = guard.next_user_id();
    guard.insert_user(User::new(
        id,
        registration,
        VerificationCode::from_digits([1, 2, 3, 4, 5, 6]),
    ));
    id
}
