use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    API_PREFIX, AuditEvent, AuditOutcome, HalJson, HalResource, UuidPath, ValidatedJson,
    errors::responses::{BadRequestUuidResponse, InternalServerErrorResponse, NotFoundResponse},
    extract_ip_from_headers, extract_user_agent,
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventStatus, EventSubmission};
use crate::repository::EventRepository;
use crate::rules::{FieldError, RuleCode};
use crate::service::EventService;

const TAG: &str = "Events";

#[derive(OpenApi)]
#[openapi(
    paths(create_event, get_event),
    components(
        schemas(Event, EventSubmission, EventStatus, FieldError, RuleCode),
        responses(BadRequestUuidResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Event creation and lookup")
    )
)]
pub struct ApiDoc;

/// Routes relative to the events collection; mount at `/events` under the API prefix.
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_event))
        .route("/{id}", get(get_event))
        .with_state(shared_service)
}

/// Public URI of an event, as sent in `Location` and `_links.self`
pub fn event_href(id: Uuid) -> String {
    format!("{}{}/{}", API_PREFIX, Event::COLLECTION_PATH, id)
}

fn to_resource(event: Event) -> HalResource<Event> {
    let href = event_href(event.id);
    HalResource::new(event).with_self(href)
}

/// Create an event
///
/// A malformed body yields an `ErrorResponse`; business-rule violations yield
/// the list of `FieldError`s.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = EventSubmission,
    responses(
        (status = 201, description = "Event created", body = Event, content_type = "application/hal+json",
            headers(("Location" = String, description = "URI of the created event"))),
        (status = 400, description = "Invalid submission", body = Vec<FieldError>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    headers: HeaderMap,
    ValidatedJson(submission): ValidatedJson<EventSubmission>,
) -> EventResult<impl IntoResponse> {
    let name = submission.name.clone();

    let event = match service.create_event(submission).await {
        Ok(event) => event,
        Err(EventError::Rejected(violations)) => {
            AuditEvent::new("event.create", None, AuditOutcome::Rejected)
                .with_ip(extract_ip_from_headers(&headers))
                .with_user_agent(extract_user_agent(&headers))
                .with_details(json!({
                    "event_name": name,
                    "codes": violations.iter().map(|v| v.code.to_string()).collect::<Vec<_>>(),
                }))
                .log();
            return Err(EventError::Rejected(violations));
        }
        Err(e) => return Err(e),
    };

    AuditEvent::new(
        "event.create",
        Some(format!("event:{}", event.id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({
        "event_name": event.name,
        "free": event.free,
        "offline": event.offline,
    }))
    .log();

    let location = event_href(event.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        HalJson(to_resource(event)),
    ))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event, content_type = "application/hal+json"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
) -> EventResult<HalJson<HalResource<Event>>> {
    let event = service.get_event(id).await?;
    Ok(HalJson(to_resource(event)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_href_is_under_api_prefix() {
        let id = Uuid::now_v7();
        assert_eq!(event_href(id), format!("/api/events/{}", id));
    }

    #[test]
    fn test_openapi_lists_event_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(""));
        assert!(doc.paths.paths.contains_key("/{id}"));
    }
}
