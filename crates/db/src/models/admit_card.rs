//! Admit card models and DTOs.

use chrono::{DateTime, Utc};
use jobport_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::PublishStatus;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A document from the `admit_cards` collection, attached to a parent job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmitCard {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub job_id: DbId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
    pub status: PublishStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for `POST /api/v1/admit-cards`. `job_id` is the hex id of the
/// parent job; the reference is stored as-is, not enforced.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdmitCard {
    pub job_id: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url(message = "download_link must be a valid URL"))]
    pub download_link: Option<String>,
    pub status: Option<PublishStatus>,
    pub release_date: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for `PUT /api/v1/admit-cards/{id}`. Only fields present in the
/// body are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdmitCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub download_link: Option<String>,
    pub status: Option<PublishStatus>,
    pub release_date: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// List query
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/v1/admit-cards`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdmitCardListQuery {
    /// Filter by parent job (hex ObjectId).
    pub job_id: Option<String>,
    /// Filter by publication status.
    pub status: Option<PublishStatus>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<u64>,
}
