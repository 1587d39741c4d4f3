//! Repository for the `answer_keys` collection.

use futures::TryStreamExt;
use jobport_core::types::{DbId, Timestamp};
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::Database;

use crate::models::answer_key::{
    AnswerKey, AnswerKeyListQuery, CreateAnswerKey, UpdateAnswerKey,
};

const COLLECTION: &str = "answer_keys";

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 100;

/// Provides CRUD operations for answer keys.
pub struct AnswerKeyRepo;

impl AnswerKeyRepo {
    /// Insert a new answer key under the given parent job.
    pub async fn create(
        db: &Database,
        job_id: DbId,
        input: &CreateAnswerKey,
    ) -> Result<AnswerKey, mongodb::error::Error> {
        let now = Timestamp::now();
        let mut key = AnswerKey {
            id: None,
            job_id,
            title: input.title.clone(),
            description: input.description.clone(),
            download_link: input.download_link.clone(),
            status: input.status.unwrap_or_default(),
            release_date: input.release_date.map(Timestamp::from_chrono),
            created_at: now,
            updated_at: now,
        };

        let inserted = db
            .collection::<AnswerKey>(COLLECTION)
            .insert_one(&key)
            .await?;
        key.id = inserted.inserted_id.as_object_id();
        Ok(key)
    }

    /// Find an answer key by its id.
    pub async fn find_by_id(
        db: &Database,
        id: DbId,
    ) -> Result<Option<AnswerKey>, mongodb::error::Error> {
        db.collection::<AnswerKey>(COLLECTION)
            .find_one(doc! { "_id": id })
            .await
    }

    /// List answer keys, newest first, optionally scoped to a parent job
    /// and filtered by status.
    pub async fn list(
        db: &Database,
        job_id: Option<DbId>,
        query: &AnswerKeyListQuery,
    ) -> Result<Vec<AnswerKey>, mongodb::error::Error> {
        let mut filter = doc! {};
        if let Some(job_id) = job_id {
            filter.insert("job_id", job_id);
        }
        if let Some(status) = query.status {
            filter.insert("status", status.as_str());
        }

        let cursor = db
            .collection::<AnswerKey>(COLLECTION)
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(query.offset.unwrap_or(0))
            .limit(query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT))
            .await?;

        cursor.try_collect().await
    }

    /// Update an answer key. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no document with the given id exists.
    pub async fn update(
        db: &Database,
        id: DbId,
        input: &UpdateAnswerKey,
    ) -> Result<Option<AnswerKey>, mongodb::error::Error> {
        db.collection::<AnswerKey>(COLLECTION)
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_document(input, Timestamp::now()) },
            )
            .return_document(ReturnDocument::After)
            .await
    }

    /// Delete an answer key by id. Returns `true` if a document was removed.
    pub async fn delete(db: &Database, id: DbId) -> Result<bool, mongodb::error::Error> {
        let result = db
            .collection::<AnswerKey>(COLLECTION)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}

fn update_document(input: &UpdateAnswerKey, now: Timestamp) -> Document {
    let mut set = doc! { "updated_at": now };

    if let Some(title) = &input.title {
        set.insert("title", title.as_str());
    }
    if let Some(description) = &input.description {
        set.insert("description", description.as_str());
    }
    if let Some(download_link) = &input.download_link {
        set.insert("download_link", download_link.as_str());
    }
    if let Some(status) = input.status {
        set.insert("status", status.as_str());
    }
    if let Some(release_date) = input.release_date {
        set.insert("release_date", Timestamp::from_chrono(release_date));
    }

    set
}
