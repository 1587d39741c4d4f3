//! Site-wide dynamic content: the singleton document backing the portal's
//! static text pages and contact details.

use jobport_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// The `dynamic_content` collection holds at most one of these documents.
///
/// The document is created lazily by the first successful update and is
/// never deleted through the exposed endpoints. Fields that have never been
/// supplied are absent from the document, not empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicContent {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_us: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_center: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_support_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_support_email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for `PUT /api/v1/update_dynamic_content`.
///
/// Every field is optional. A field that is absent *or empty* is left
/// untouched, which means this endpoint cannot clear a field back to the
/// empty string; that asymmetry is inherited behaviour, kept on purpose.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDynamicContent {
    pub privacy_policy: Option<String>,
    pub about_us: Option<String>,
    pub help_center: Option<String>,
    pub contact_support_number: Option<String>,
    pub contact_support_email: Option<String>,
}
