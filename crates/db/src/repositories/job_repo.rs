//! Repository for the `jobs` collection.

use futures::TryStreamExt;
use jobport_core::types::{DbId, Timestamp};
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::Database;

use crate::models::job::{CreateJob, Job, JobListQuery, UpdateJob};

const COLLECTION: &str = "jobs";

/// Default and maximum page sizes for list queries.
const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 100;

/// Provides CRUD operations for job postings.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new job, returning the created document.
    ///
    /// If `status` is `None`, defaults to `active`.
    pub async fn create(db: &Database, input: &CreateJob) -> Result<Job, mongodb::error::Error> {
        let now = Timestamp::now();
        let mut job = Job {
            id: None,
            title: input.title.clone(),
            department: input.department.clone(),
            description: input.description.clone(),
            apply_link: input.apply_link.clone(),
            status: input.status.unwrap_or_default(),
            release_date: input.release_date.map(Timestamp::from_chrono),
            created_at: now,
            updated_at: now,
        };

        let inserted = db.collection::<Job>(COLLECTION).insert_one(&job).await?;
        job.id = inserted.inserted_id.as_object_id();
        Ok(job)
    }

    /// Find a job by its id.
    pub async fn find_by_id(
        db: &Database,
        id: DbId,
    ) -> Result<Option<Job>, mongodb::error::Error> {
        db.collection::<Job>(COLLECTION)
            .find_one(doc! { "_id": id })
            .await
    }

    /// List jobs, newest first, optionally filtered by status.
    pub async fn list(
        db: &Database,
        query: &JobListQuery,
    ) -> Result<Vec<Job>, mongodb::error::Error> {
        let mut filter = doc! {};
        if let Some(status) = query.status {
            filter.insert("status", status.as_str());
        }

        let cursor = db
            .collection::<Job>(COLLECTION)
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(query.offset.unwrap_or(0))
            .limit(query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT))
            .await?;

        cursor.try_collect().await
    }

    /// Update a job. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no document with the given id exists.
    pub async fn update(
        db: &Database,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, mongodb::error::Error> {
        db.collection::<Job>(COLLECTION)
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_document(input, Timestamp::now()) },
            )
            .return_document(ReturnDocument::After)
            .await
    }

    /// Delete a job by id. Returns `true` if a document was removed.
    pub async fn delete(db: &Database, id: DbId) -> Result<bool, mongodb::error::Error> {
        let result = db
            .collection::<Job>(COLLECTION)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}

/// Build the `$set` document for a partial job update. `updated_at` is
/// always refreshed.
fn update_document(input: &UpdateJob, now: Timestamp) -> Document {
    let mut set = doc! { "updated_at": now };

    if let Some(title) = &input.title {
        set.insert("title", title.as_str());
    }
    if let Some(department) = &input.department {
        set.insert("department", department.as_str());
    }
    if let Some(description) = &input.description {
        set.insert("description", description.as_str());
    }
    if let Some(apply_link) = &input.apply_link {
        set.insert("apply_link", apply_link.as_str());
    }
    if let Some(status) = input.status {
        set.insert("status", status.as_str());
    }
    if let Some(release_date) = input.release_date {
        set.insert("release_date", Timestamp::from_chrono(release_date));
    }

    set
}
