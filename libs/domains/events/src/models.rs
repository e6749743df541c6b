use chrono::NaiveDateTime;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Lifecycle phase of an event. Creation only ever sets [`EventStatus::Draft`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    #[default]
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "PUBLISHED")]
    Published,
    #[sea_orm(string_value = "ENDED_ENROLLMENT")]
    EndedEnrollment,
    #[sea_orm(string_value = "BEGAN_EVENT")]
    BeganEvent,
    #[sea_orm(string_value = "ENDED")]
    Ended,
}

/// Request body for creating an event.
///
/// Server-owned fields (`id`, `free`, `offline`, `eventStatus`) are not part of
/// this type, and unknown keys are rejected, so a client cannot set them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventSubmission {
    #[validate(length(min = 1))]
    #[schema(example = "Spring")]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub begin_enrollment_date_time: NaiveDateTime,
    pub close_enrollment_date_time: NaiveDateTime,
    pub begin_event_date_time: NaiveDateTime,
    pub close_event_date_time: NaiveDateTime,

    #[validate(range(min = 0))]
    pub base_price: i32,

    #[validate(range(min = 0))]
    pub max_price: i32,

    #[validate(range(min = 0))]
    pub limit_of_enrollment: i32,

    /// Venue; absent or empty means the event is online
    #[serde(default)]
    pub location: Option<String>,
}

/// A validated submission with derived fields, not yet stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub begin_enrollment_date_time: NaiveDateTime,
    pub close_enrollment_date_time: NaiveDateTime,
    pub begin_event_date_time: NaiveDateTime,
    pub close_event_date_time: NaiveDateTime,
    pub base_price: i32,
    pub max_price: i32,
    pub limit_of_enrollment: i32,
    pub location: Option<String>,
    pub free: bool,
    pub offline: bool,
    pub event_status: EventStatus,
}

impl NewEvent {
    /// Derive `free` and `offline` and start the event as a draft.
    pub fn finalize(submission: EventSubmission) -> Self {
        let free = submission.base_price == 0 && submission.max_price == 0;
        let offline = submission
            .location
            .as_deref()
            .is_some_and(|location| !location.is_empty());

        Self {
            name: submission.name,
            description: submission.description,
            begin_enrollment_date_time: submission.begin_enrollment_date_time,
            close_enrollment_date_time: submission.close_enrollment_date_time,
            begin_event_date_time: submission.begin_event_date_time,
            close_event_date_time: submission.close_event_date_time,
            base_price: submission.base_price,
            max_price: submission.max_price,
            limit_of_enrollment: submission.limit_of_enrollment,
            location: submission.location,
            free,
            offline,
            event_status: EventStatus::Draft,
        }
    }
}

/// Stored event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned by the repository on insert
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub begin_enrollment_date_time: NaiveDateTime,
    pub close_enrollment_date_time: NaiveDateTime,
    pub begin_event_date_time: NaiveDateTime,
    pub close_event_date_time: NaiveDateTime,
    pub base_price: i32,
    pub max_price: i32,
    pub limit_of_enrollment: i32,
    pub location: Option<String>,
    pub free: bool,
    pub offline: bool,
    pub event_status: EventStatus,
}

impl Event {
    /// Path of the events collection, relative to the API prefix.
    pub const COLLECTION_PATH: &'static str = "/events";

    pub fn from_new(id: Uuid, event: NewEvent) -> Self {
        Self {
            id,
            name: event.name,
            description: event.description,
            begin_enrollment_date_time: event.begin_enrollment_date_time,
            close_enrollment_date_time: event.close_enrollment_date_time,
            begin_event_date_time: event.begin_event_date_time,
            close_event_date_time: event.close_event_date_time,
            base_price: event.base_price,
            max_price: event.max_price,
            limit_of_enrollment: event.limit_of_enrollment,
            location: event.location,
            free: event.free,
            offline: event.offline,
            event_status: event.event_status,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    /// A submission that passes every rule.
    pub fn spring_submission() -> EventSubmission {
        EventSubmission {
            name: "Spring".to_string(),
            description: "REST API Development with Spring".to_string(),
            begin_enrollment_date_time: at("2022-02-24T21:22"),
            close_enrollment_date_time: at("2022-02-27T22:23"),
            begin_event_date_time: at("2022-02-26T21:22"),
            close_event_date_time: at("2022-02-27T22:23"),
            base_price: 100,
            max_price: 200,
            limit_of_enrollment: 100,
            location: Some("강남역 D2 스타텁 팩토리".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::spring_submission;
    use super::*;

    #[test]
    fn test_finalize_paid_offline_event() {
        let event = NewEvent::finalize(spring_submission());

        assert!(!event.free);
        assert!(event.offline);
        assert_eq!(event.event_status, EventStatus::Draft);
        assert_eq!(event.name, "Spring");
        assert_eq!(event.limit_of_enrollment, 100);
    }

    #[test]
    fn test_free_only_when_both_prices_are_zero() {
        let cases = [(0, 0, true), (100, 0, false), (0, 100, false), (100, 200, false)];

        for (base_price, max_price, expected) in cases {
            let submission = EventSubmission {
                base_price,
                max_price,
                ..spring_submission()
            };
            assert_eq!(
                NewEvent::finalize(submission).free,
                expected,
                "base={base_price} max={max_price}"
            );
        }
    }

    #[test]
    fn test_offline_only_with_non_empty_location() {
        let cases = [
            (None, false),
            (Some(String::new()), false),
            (Some("D2 Startup Factory".to_string()), true),
        ];

        for (location, expected) in cases {
            let submission = EventSubmission {
                location: location.clone(),
                ..spring_submission()
            };
            assert_eq!(NewEvent::finalize(submission).offline, expected, "{location:?}");
        }
    }

    #[test]
    fn test_from_new_keeps_derived_fields() {
        let id = Uuid::now_v7();
        let event = Event::from_new(id, NewEvent::finalize(spring_submission()));

        assert_eq!(event.id, id);
        assert!(!event.free);
        assert!(event.offline);
        assert_eq!(event.event_status, EventStatus::Draft);
    }

    #[test]
    fn test_submission_uses_camel_case_and_rejects_server_fields() {
        let json = serde_json::to_value(spring_submission()).unwrap();
        assert_eq!(json["beginEnrollmentDateTime"], "2022-02-24T21:22:00");
        assert_eq!(json["basePrice"], 100);

        let mut with_status = json.clone();
        with_status["eventStatus"] = "PUBLISHED".into();
        assert!(serde_json::from_value::<EventSubmission>(with_status).is_err());

        let mut with_id = json;
        with_id["id"] = 100.into();
        assert!(serde_json::from_value::<EventSubmission>(with_id).is_err());
    }

    #[test]
    fn test_submission_defaults_optional_fields() {
        let json = serde_json::json!({
            "name": "Rust meetup",
            "beginEnrollmentDateTime": "2022-02-24T21:22:00",
            "closeEnrollmentDateTime": "2022-02-27T22:23:00",
            "beginEventDateTime": "2022-02-26T21:22:00",
            "closeEventDateTime": "2022-02-27T22:23:00",
            "basePrice": 0,
            "maxPrice": 0,
            "limitOfEnrollment": 30
        });

        let submission: EventSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(submission.description, "");
        assert_eq!(submission.location, None);
    }

    #[test]
    fn test_submission_structural_rules() {
        let valid = spring_submission();
        assert!(valid.validate().is_ok());

        let invalid = EventSubmission {
            name: String::new(),
            base_price: -1,
            ..spring_submission()
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("base_price"));
    }

    #[test]
    fn test_event_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&EventStatus::EndedEnrollment).unwrap(),
            "\"ENDED_ENROLLMENT\""
        );
        assert_eq!(EventStatus::BeganEvent.to_string(), "BEGAN_EVENT");
        assert_eq!("DRAFT".parse::<EventStatus>().unwrap(), EventStatus::Draft);
        assert_eq!(EventStatus::default(), EventStatus::Draft);
    }
}
