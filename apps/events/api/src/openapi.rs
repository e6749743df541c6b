use domain_events::Event;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Events API",
        version = "0.1.0",
        description = "Create events and fetch them as HAL resources"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = Event::COLLECTION_PATH, api = domain_events::ApiDoc)
    )
)]
pub struct ApiDoc;
