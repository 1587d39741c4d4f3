//! HTTP handlers.
//!
//! Handlers adapt requests to repository calls and return `AppResult`;
//! all error-to-response mapping lives in [`crate::error::AppError`].

pub mod admit_cards;
pub mod answer_keys;
pub mod dynamic_content;
pub mod job_results;
pub mod jobs;
pub mod locations;
pub mod study_materials;

use jobport_core::types::DbId;

use crate::error::AppError;

/// Parse a hex ObjectId from a path or query parameter.
///
/// A malformed id is a client error (400), not a database miss.
pub(crate) fn parse_object_id(value: &str) -> Result<DbId, AppError> {
    value
        .parse::<DbId>()
        .map_err(|_| AppError::invalid_id(value))
}
