//! Event entity for campus events listed on Radar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

/// Maximum length of event and organizer names
pub const MAX_NAME_LENGTH: usize = 200;

/// Audience restriction of an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AudienceSex {
    /// Open to everyone
    #[default]
    Any,
    Male,
    Female,
}

impl AudienceSex {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceSex::Any => "any",
            AudienceSex::Male => "male",
            AudienceSex::Female => "female",
        }
    }
}

impl fmt::Display for AudienceSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudienceSex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "all" => Ok(AudienceSex::Any),
            "male" => Ok(AudienceSex::Male),
            "female" => Ok(AudienceSex::Female),
            _ => Err(ValidationError::invalid_format("sex")),
        }
    }
}

impl TryFrom<String> for AudienceSex {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Event as stored; immutable after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub event_name: String,
    pub organizer_name: String,
    pub sex: AudienceSex,
    /// Restricted to campus members
    pub campus_only: bool,
    pub free: bool,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied data for a new event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub event_name: String,
    pub organizer_name: String,
    #[serde(default)]
    pub sex: AudienceSex,
    #[serde(default)]
    pub campus_only: bool,
    #[serde(default)]
    pub free: bool,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub location: Option<String>,
}

impl NewEvent {
    /// Validates required fields and produces the event to store
    pub fn into_event(self) -> Result<Event, ValidationError> {
        let event_name = required_text("event_name", &self.event_name)?;
        let organizer_name = required_text("organizer_name", &self.organizer_name)?;

        Ok(Event {
            id: Uuid::new_v4(),
            event_name,
            organizer_name,
            sex: self.sex,
            campus_only: self.campus_only,
            free: self.free,
            description: optional_text(self.description),
            schedule: optional_text(self.schedule),
            location: optional_text(self.location),
            created_at: Utc::now(),
        })
    }
}

fn required_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(field));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
