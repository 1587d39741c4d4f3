//! Repository for the singleton `dynamic_content` document.
//!
//! The collection holds at most one document, addressed with the empty
//! filter. Updates merge into it with upsert semantics, so the document
//! comes into existence on the first successful update.

use jobport_core::types::Timestamp;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::Database;

use crate::models::dynamic_content::{DynamicContent, UpdateDynamicContent};

const COLLECTION: &str = "dynamic_content";

/// Provides read-modify-write access to the site content document.
pub struct DynamicContentRepo;

impl DynamicContentRepo {
    /// Fetch the singleton document.
    ///
    /// Returns `None` if no update has ever succeeded.
    pub async fn get(db: &Database) -> Result<Option<DynamicContent>, mongodb::error::Error> {
        db.collection::<DynamicContent>(COLLECTION)
            .find_one(doc! {})
            .await
    }

    /// Merge the staged fields of `input` into the singleton document,
    /// creating it if it does not exist yet. Returns the post-update
    /// document (always present: the update upserts and asks for the
    /// after-image).
    pub async fn upsert(
        db: &Database,
        input: &UpdateDynamicContent,
    ) -> Result<Option<DynamicContent>, mongodb::error::Error> {
        let update = doc! {
            "$set": stage_fields(input, Timestamp::now()),
            "$setOnInsert": { "created_at": Timestamp::now() },
        };

        db.collection::<DynamicContent>(COLLECTION)
            .find_one_and_update(doc! {}, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
    }
}

/// Build the `$set` document from the recognized fields of `input`.
///
/// A field is staged only when present and non-empty: an empty string means
/// "leave unchanged", so no caller can clear a stored field through this
/// path. `updated_at` is always staged, so the update is never empty.
fn stage_fields(input: &UpdateDynamicContent, now: Timestamp) -> Document {
    let mut set = doc! { "updated_at": now };

    let fields = [
        ("privacy_policy", &input.privacy_policy),
        ("about_us", &input.about_us),
        ("help_center", &input.help_center),
        ("contact_support_number", &input.contact_support_number),
        ("contact_support_email", &input.contact_support_email),
    ];

    for (key, value) in fields {
        if let Some(value) = value {
            if !value.is_empty() {
                set.insert(key, value.as_str());
            }
        }
    }

    set
}
