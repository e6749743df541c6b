use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{AppError, ErrorCode};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::rules::FieldError;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {0}")]
    NotFound(Uuid),

    /// Field-level constraint failure on the submission
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    /// Business-rule violations, in rule order
    #[error("Event rejected by {} business rule(s)", .0.len())]
    Rejected(Vec<FieldError>),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type EventResult<T> = Result<T, EventError>;

/// Every variant except [`EventError::Rejected`] uses the shared `ErrorResponse` body.
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(id) => AppError::NotFound(format!("Event {} not found", id)),
            EventError::Validation(errors) => AppError::ValidationError(errors),
            EventError::Rejected(errors) => AppError::BadRequest(
                errors
                    .iter()
                    .map(|e| e.default_message.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            EventError::Database(e) => AppError::Database(e),
            EventError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match self {
            // Clients get the bare violation list
            EventError::Rejected(errors) => {
                tracing::info!(
                    error_code = ErrorCode::BusinessRuleViolation.code(),
                    violations = errors.len(),
                    "Event rejected by business rules"
                );
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleCode;
    use http_body_util::BodyExt;

    async fn json_of(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn price_violation() -> FieldError {
        FieldError {
            object_name: "eventSubmission".to_string(),
            field: Some("basePrice".to_string()),
            code: RuleCode::WrongPrices,
            default_message: "basePrice must be less than or equal to maxPrice".to_string(),
        }
    }

    #[tokio::test]
    async fn test_rejected_renders_violation_array() {
        let response = EventError::Rejected(vec![price_violation()]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_of(response).await;
        assert!(body.is_array());
        assert_eq!(body[0]["objectName"], "eventSubmission");
        assert_eq!(body[0]["code"], "wrongPrices");
        assert!(body[0]["defaultMessage"].is_string());
    }

    #[tokio::test]
    async fn test_not_found_uses_error_response() {
        let id = Uuid::now_v7();
        let response = EventError::NotFound(id).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_of(response).await;
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], format!("Event {} not found", id));
    }

    #[test]
    fn test_rejected_converts_to_bad_request() {
        let app_error: AppError = EventError::Rejected(vec![price_violation()]).into();
        assert!(matches!(app_error, AppError::BadRequest(msg) if msg.contains("maxPrice")));
    }
}
