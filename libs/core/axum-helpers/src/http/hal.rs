//! Minimal HAL (`application/hal+json`) support: a resource with a `_links` map.

use std::collections::BTreeMap;

use axum::{
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::AppError;

pub const HAL_JSON: &str = "application/hal+json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// An entity serialized inline, followed by its `_links`.
///
/// ```json
/// { "name": "meetup", "_links": { "self": { "href": "/api/events/0192..." } } }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct HalResource<T> {
    #[serde(flatten)]
    pub entity: T,
    #[serde(rename = "_links")]
    pub links: BTreeMap<String, Link>,
}

impl<T> HalResource<T> {
    pub fn new(entity: T) -> Self {
        Self {
            entity,
            links: BTreeMap::new(),
        }
    }

    pub fn with_link(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.links.insert(rel.into(), Link::new(href));
        self
    }

    pub fn with_self(self, href: impl Into<String>) -> Self {
        self.with_link("self", href)
    }

    pub fn self_href(&self) -> Option<&str> {
        self.links.get("self").map(|link| link.href.as_str())
    }
}

/// Like `axum::Json`, but labelled `application/hal+json`.
#[derive(Debug, Clone)]
pub struct HalJson<T>(pub T);

impl<T: Serialize> IntoResponse for HalJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(HAL_JSON))],
                bytes,
            )
                .into_response(),
            Err(e) => AppError::from(e).into_response(),
        }
    }
}
