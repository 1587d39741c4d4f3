//! Job posting models and DTOs.

use chrono::{DateTime, Utc};
use jobport_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::PublishStatus;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A document from the `jobs` collection. Parent of admit cards, answer
/// keys, results, and study materials, which reference it by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,
    pub status: PublishStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for `POST /api/v1/jobs`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJob {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub department: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "apply_link must be a valid URL"))]
    pub apply_link: Option<String>,
    pub status: Option<PublishStatus>,
    pub release_date: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for `PUT /api/v1/jobs/{id}`. Only fields present in the body are
/// applied; the rest keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
    pub apply_link: Option<String>,
    pub status: Option<PublishStatus>,
    pub release_date: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// List query
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/v1/jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListQuery {
    /// Filter by publication status.
    pub status: Option<PublishStatus>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<u64>,
}
