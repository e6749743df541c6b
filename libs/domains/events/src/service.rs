use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventSubmission, NewEvent};
use crate::repository::EventRepository;
use crate::rules::validate_submission;

/// Event creation pipeline and lookups
#[derive(Clone)]
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate, finalize and store a submission.
    ///
    /// Structural checks run first; business rules only see structurally
    /// valid input and all of their violations are returned together.
    pub async fn create_event(&self, submission: EventSubmission) -> EventResult<Event> {
        submission.validate()?;

        let violations = validate_submission(&submission);
        if !violations.is_empty() {
            tracing::debug!(violations = violations.len(), name = %submission.name, "Submission rejected");
            return Err(EventError::Rejected(violations));
        }

        self.repository.create(NewEvent::finalize(submission)).await
    }

    pub async fn get_event(&self, id: Uuid) -> EventResult<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }
}
