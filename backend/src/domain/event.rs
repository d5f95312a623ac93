//! Catalogue events and their seed definitions.
//!
//! Events are immutable once the store is seeded. Seed data comes either
//! from [`default_catalogue`] or from a JSON array of [`EventDefinition`]
//! values read at startup.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::EventId;

/// Kind of catalogue event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Team event. The only kind that allows teams larger than one.
    Hackathon,
    Workshop,
    Webinar,
    Talk,
    Competition,
}

/// Reasons a seed definition is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventValidationError {
    #[error("event name must not be empty")]
    EmptyName,
    #[error("event `{name}` must allow at least one member per team")]
    TeamSizeTooSmall { name: String },
    #[error("event `{name}` must end after it starts")]
    EndsBeforeStart { name: String },
}

/// Seed description of an event before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventDefinition {
    /// Display name. Must not be blank.
    pub name: String,
    /// Serialised as `type`.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Whole rupees.
    pub price: u32,
    /// Largest team allowed. Defaults to one.
    #[serde(default = "default_team_size")]
    pub max_team_size: u32,
    pub start_date: DateTime<Utc>,
    /// Must be later than `start_date`.
    pub end_date: DateTime<Utc>,
}

fn default_team_size() -> u32 {
    1
}

impl EventDefinition {
    /// Check the seed invariants.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.name.trim().is_empty() {
            return Err(EventValidationError::EmptyName);
        }
        if self.max_team_size < 1 {
            return Err(EventValidationError::TeamSizeTooSmall {
                name: self.name.clone(),
            });
        }
        if self.end_date <= self.start_date {
            return Err(EventValidationError::EndsBeforeStart {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Catalogue event.
///
/// ## Invariants
/// - `max_team_size >= 1`.
/// - `end_date > start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: EventId,
    #[schema(example = "Grand Hackathon")]
    name: String,
    #[serde(rename = "type")]
    kind: EventKind,
    #[schema(example = 350)]
    price: u32,
    #[schema(example = 3)]
    max_team_size: u32,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl Event {
    /// Validate `definition` and attach its identifier.
    pub fn try_new(id: EventId, definition: EventDefinition) -> Result<Self, EventValidationError> {
        definition.validate()?;
        let EventDefinition {
            name,
            kind,
            price,
            max_team_size,
            start_date,
            end_date,
        } = definition;
        Ok(Self {
            id,
            name,
            kind,
            price,
            max_team_size,
            start_date,
            end_date,
        })
    }

    /// Identifier assigned at seed time.
    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Pass price in whole rupees.
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Capacity given to every team formed for this event.
    pub fn max_team_size(&self) -> u32 {
        self.max_team_size
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }
}

/// Parse a JSON array of seed definitions, validating every entry.
pub fn parse_catalogue(json: &str) -> Result<Vec<EventDefinition>, CatalogueParseError> {
    let definitions: Vec<EventDefinition> = serde_json::from_str(json)?;
    for definition in &definitions {
        definition.validate()?;
    }
    Ok(definitions)
}

/// Errors raised while reading seed data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueParseError {
    #[error("event seed is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event seed is invalid: {0}")]
    Invalid(#[from] EventValidationError),
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).single()
}

/// Built-in catalogue used when no seed file is configured.
pub fn default_catalogue() -> Vec<EventDefinition> {
    let mut catalogue = Vec::with_capacity(2);
    if let (Some(start), Some(end)) = (at(2025, 3, 5, 9), at(2025, 3, 6, 18)) {
        catalogue.push(EventDefinition {
            name: "Grand Hackathon".to_owned(),
            kind: EventKind::Hackathon,
            price: 350,
            max_team_size: 3,
            start_date: start,
            end_date: end,
        });
    }
    if let (Some(start), Some(end)) = (at(2025, 3, 5, 10), at(2025, 3, 5, 13)) {
        catalogue.push(EventDefinition {
            name: "AI/ML Workshop".to_owned(),
            kind: EventKind::Workshop,
            price: 100,
            max_team_size: 1,
            start_date: start,
            end_date: end,
        });
    }
    catalogue
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_catalogue_is_valid() {
        let catalogue = default_catalogue();
        assert_eq!(catalogue.len(), 2);
        for definition in &catalogue {
            definition.validate().expect("seed entry is valid");
        }
        assert_eq!(catalogue[0].price + catalogue[1].price, 450);
    }

    #[rstest]
    fn parse_catalogue_defaults_team_size_to_one() {
        let json = r#"[{
            "name": "Rust Talk",
            "type": "talk",
            "price": 0,
            "startDate": "2025-03-07T10:00:00Z",
            "endDate": "2025-03-07T11:00:00Z"
        }]"#;
        let parsed = parse_catalogue(json).expect("valid seed");
        assert_eq!(parsed[0].max_team_size, 1);
        assert_eq!(parsed[0].kind, EventKind::Talk);
    }

    #[rstest]
    #[case(0, "2025-03-07T11:00:00Z")]
    #[case(2, "2025-03-07T10:00:00Z")]
    fn parse_catalogue_rejects_invalid_entries(#[case] team_size: u32, #[case] end: &str) {
        let json = format!(
            r#"[{{"name":"Broken","type":"competition","price":10,"maxTeamSize":{team_size},
                "startDate":"2025-03-07T10:00:00Z","endDate":"{end}"}}]"#
        );
        let result = parse_catalogue(&json);
        assert!(matches!(result, Err(CatalogueParseError::Invalid(_))));
    }

    #[rstest]
    fn event_serialises_kind_as_type() {
        let definition = default_catalogue().remove(0);
        let event = Event::try_new(EventId::new(1), definition).expect("valid event");
        let value = serde_json::to_value(&event).expect("serialise event");
        assert_eq!(value["type"], "hackathon");
        assert_eq!(value["maxTeamSize"], 3);
    }
}
