//! Business rules checked after a submission passed structural validation.
//!
//! Violations are returned as data, in rule order, and every rule runs so a
//! client sees the complete report in one response.

use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

use crate::models::EventSubmission;

/// `objectName` reported on every [`FieldError`].
pub const OBJECT_NAME: &str = "eventSubmission";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RuleCode {
    /// `maxPrice` is below `basePrice` while both are set
    WrongPrices,
    /// Enrollment closes before a date it must not precede
    WrongCloseEnrollmentDateTime,
}

/// One business-rule violation as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub object_name: String,
    /// JSON name of the offending field; absent for object-level errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: RuleCode,
    pub default_message: String,
}

impl FieldError {
    fn on_field(field: &str, code: RuleCode, message: impl Into<String>) -> Self {
        Self {
            object_name: OBJECT_NAME.to_string(),
            field: Some(field.to_string()),
            code,
            default_message: message.into(),
        }
    }
}

/// Check the price and enrollment-window rules. An empty result means valid.
pub fn validate_submission(submission: &EventSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    // Unbounded (zero) prices are not compared
    if submission.base_price > 0
        && submission.max_price > 0
        && submission.max_price < submission.base_price
    {
        errors.push(FieldError::on_field(
            "basePrice",
            RuleCode::WrongPrices,
            "basePrice must be less than or equal to maxPrice",
        ));
    }

    let close_enrollment = submission.close_enrollment_date_time;
    let orderings = [
        (submission.begin_enrollment_date_time, "beginEnrollmentDateTime"),
        (submission.begin_event_date_time, "beginEventDateTime"),
        (submission.close_event_date_time, "closeEventDateTime"),
    ];
    let violated: Vec<String> = orderings
        .iter()
        .filter(|(other, _)| close_enrollment < *other)
        .map(|(_, name)| format!("closeEnrollmentDateTime must not be before {name}"))
        .collect();

    if !violated.is_empty() {
        errors.push(FieldError::on_field(
            "closeEnrollmentDateTime",
            RuleCode::WrongCloseEnrollmentDateTime,
            violated.join("; "),
        ));
    }

    errors
}
