//! Repository for the `results` collection.

use futures::TryStreamExt;
use jobport_core::types::{DbId, Timestamp};
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::Database;

use crate::models::job_result::{
    CreateJobResult, JobResult, JobResultListQuery, UpdateJobResult,
};

const COLLECTION: &str = "results";

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 100;

/// Provides CRUD operations for declared exam results.
pub struct JobResultRepo;

impl JobResultRepo {
    /// Insert a new result under the given parent job.
    pub async fn create(
        db: &Database,
        job_id: DbId,
        input: &CreateJobResult,
    ) -> Result<JobResult, mongodb::error::Error> {
        let now = Timestamp::now();
        let mut result = JobResult {
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
            .collection::<JobResult>(COLLECTION)
            .insert_one(&result)
            .await?;
        result.id = inserted.inserted_id.as_object_id();
        Ok(result)
    }

    /// Find a result by its id.
    pub async fn find_by_id(
        db: &Database,
        id: DbId,
    ) -> Result<Option<JobResult>, mongodb::error::Error> {
        db.collection::<JobResult>(COLLECTION)
            .find_one(doc! { "_id": id })
            .await
    }

    /// List results, newest first, optionally scoped to a parent job and
    /// filtered by status.
    pub async fn list(
        db: &Database,
        job_id: Option<DbId>,
        query: &JobResultListQuery,
    ) -> Result<Vec<JobResult>, mongodb::error::Error> {
        let mut filter = doc! {};
        if let Some(job_id) = job_id {
            filter.insert("job_id", job_id);
        }
        if let Some(status) = query.status {
            filter.insert("status", status.as_str());
        }

        let cursor = db
            .collection::<JobResult>(COLLECTION)
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(query.offset.unwrap_or(0))
            .limit(query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT))
            .await?;

        cursor.try_collect().await
    }

    /// Update a result. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no document with the given id exists.
    pub async fn update(
        db: &Database,
        id: DbId,
        input: &UpdateJobResult,
    ) -> Result<Option<JobResult>, mongodb::error::Error> {
        db.collection::<JobResult>(COLLECTION)
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_document(input, Timestamp::now()) },
            )
            .return_document(ReturnDocument::After)
            .await
    }

    /// Delete a result by id. Returns `true` if a document was removed.
    pub async fn delete(db: &Database, id: DbId) -> Result<bool, mongodb::error::Error> {
        let result = db
            .collection::<JobResult>(COLLECTION)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}

fn update_document(input: &UpdateJobResult, now: Timestamp) -> Document {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::PublishStatus;

    #[test]
    fn update_document_never_touches_job_id() {
        let input = UpdateJobResult {
            title: Some("CBT Result".to_string()),
            status: Some(PublishStatus::Active),
            ..Default::default()
        };

        let set = update_document(&input, Timestamp::now());

        // The parent reference is immutable through the update path.
        assert!(!set.contains_key("job_id"));
        assert_eq!(set.get_str("title").unwrap(), "CBT Result");
    }
}
