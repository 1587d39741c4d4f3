//! Exam result models and DTOs.

use chrono::{DateTime, Utc};
use jobport_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::PublishStatus;

/// A document from the `results` collection: the declared result for a
/// parent job's examination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResult {
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

/// Input for `POST /api/v1/results`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobResult {
    pub job_id: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url(message = "download_link must be a valid URL"))]
    pub download_link: Option<String>,
    pub status: Option<PublishStatus>,
    pub release_date: Option<DateTime<Utc>>,
}

/// Input for `PUT /api/v1/results/{id}`. Only fields present in the body
/// are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJobResult {
    pub title: Option<String>,
    pub description: Option<String>,
    pub download_link: Option<String>,
    pub status: Option<PublishStatus>,
    pub release_date: Option<DateTime<Utc>>,
}

/// Query parameters for `GET /api/v1/results`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobResultListQuery {
    pub job_id: Option<String>,
    pub status: Option<PublishStatus>,
    pub limit: Option<i64>,
    pub offset: Option<u64>,
}
