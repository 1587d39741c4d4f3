//! State and city reference data.
//!
//! Two small collections used to tag postings with a location: `states`
//! (top level) and `cities` (each referencing its state).

use jobport_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// A document from the `states` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for `POST /api/v1/states`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateState {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Input for `PUT /api/v1/states/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateState {
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// City
// ---------------------------------------------------------------------------

/// A document from the `cities` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub state_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for `POST /api/v1/states/{id}/cities`. The parent state comes from
/// the path, not the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCity {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Input for `PUT /api/v1/cities/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCity {
    pub name: Option<String>,
}
