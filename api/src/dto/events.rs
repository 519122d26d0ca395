use serde::{Deserialize, Serialize};
use validator::Validate;

use radar_core::{AudienceSex, NewEvent};

/// Body of `POST /api/v1/events`
///
/// The organizer may also come from the `Organizer-Name` header, which wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[serde(default, alias = "Event_name", alias = "EventName")]
    #[validate(length(max = 200))]
    pub event_name: String,
    #[serde(default, alias = "Organizer_name", alias = "OrganizerName")]
    #[validate(length(max = 200))]
    pub organizer_name: Option<String>,
    #[serde(default, alias = "Sex")]
    pub sex: AudienceSex,
    #[serde(default, alias = "cusat_only", alias = "Cusat_only", alias = "Campus_only")]
    pub campus_only: bool,
    #[serde(default, alias = "Free")]
    pub free: bool,
    #[serde(default, alias = "Description")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[serde(default, alias = "Schedule")]
    #[validate(length(max = 500))]
    pub schedule: Option<String>,
    #[serde(default, alias = "Location")]
    #[validate(length(max = 500))]
    pub location: Option<String>,
}

impl CreateEventRequest {
    pub fn into_new_event(self, organizer_override: Option<String>) -> NewEvent {
        NewEvent {
            event_name: self.event_name,
            organizer_name: organizer_override
                .or(self.organizer_name)
                .unwrap_or_default(),
            sex: self.sex,
            campus_only: self.campus_only,
            free: self.free,
            description: self.description,
            schedule: self.schedule,
            location: self.location,
        }
    }
}

/// Query of `GET /api/v1/events/filter`; values are parsed by the domain
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilterQuery {
    #[serde(default, alias = "Sex")]
    pub sex: Option<String>,
    #[serde(default, alias = "cusat_only", alias = "Cusat_only", alias = "Campus_only")]
    pub campus_only: Option<String>,
    #[serde(default, alias = "Free")]
    pub free: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_organizer_wins() {
        let request = CreateEventRequest {
            event_name: "Hackathon".to_string(),
            organizer_name: Some("Body Org".to_string()),
            ..Default::default()
        };
        let event = request.into_new_event(Some("Header Org".to_string()));
        assert_eq!(event.organizer_name, "Header Org");
    }

    #[test]
    fn test_aliases_deserialize() {
        let request: CreateEventRequest = serde_json::from_str(
            r#"{"Event_name":"Talk","Organizer_name":"Club","Sex":"female","cusat_only":true,"Free":true}"#,
        )
        .unwrap();
        assert_eq!(request.event_name, "Talk");
        assert_eq!(request.sex, AudienceSex::Female);
        assert!(request.campus_only);
        assert!(request.free);
    }
}
