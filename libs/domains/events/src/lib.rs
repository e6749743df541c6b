//! Events Domain
//!
//! Creation of event resources: structural validation, business rules,
//! derived fields, storage and the HAL-formatted HTTP surface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /events, GET /events/{id}
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← structural check → rules → finalize
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← in-memory or PostgreSQL, assigns ids
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← EventSubmission, NewEvent, Event, EventStatus
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_events::{handlers, InMemoryEventRepository, EventService};
//!
//! let service = EventService::new(InMemoryEventRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod rules;
pub mod service;

pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use models::{Event, EventStatus, EventSubmission, NewEvent};
pub use postgres::PgEventRepository;
pub use repository::{EventRepository, InMemoryEventRepository};
pub use rules::{FieldError, OBJECT_NAME, RuleCode, validate_submission};
pub use service::EventService;
