//! Study material models and DTOs.

use chrono::{DateTime, Utc};
use jobport_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::PublishStatus;

/// A document from the `study_materials` collection: preparation material
/// (syllabus, previous papers, notes) attached to a parent job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyMaterial {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub job_id: DbId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_link: Option<String>,
    pub status: PublishStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for `POST /api/v1/study-materials`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudyMaterial {
    pub job_id: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url(message = "material_link must be a valid URL"))]
    pub material_link: Option<String>,
    pub status: Option<PublishStatus>,
    pub release_date: Option<DateTime<Utc>>,
}

/// Input for `PUT /api/v1/study-materials/{id}`. Only fields present in the
/// body are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudyMaterial {
    pub title: Option<String>,
    pub description: Option<String>,
    pub material_link: Option<String>,
    pub status: Option<PublishStatus>,
    pub release_date: Option<DateTime<Utc>>,
}

/// Query parameters for `GET /api/v1/study-materials`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyMaterialListQuery {
    pub job_id: Option<String>,
    pub status: Option<PublishStatus>,
    pub limit: Option<i64>,
    pub offset: Option<u64>,
}
