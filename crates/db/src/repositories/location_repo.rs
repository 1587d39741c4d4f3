//! Repositories for the `states` and `cities` reference collections.

use futures::TryStreamExt;
use jobport_core::types::{DbId, Timestamp};
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::Database;

use crate::models::location::{City, CreateCity, CreateState, State, UpdateCity, UpdateState};

const STATES: &str = "states";
const CITIES: &str = "cities";

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

/// Provides CRUD operations for states.
pub struct StateRepo;

impl StateRepo {
    /// Insert a new state, returning the created document.
    pub async fn create(
        db: &Database,
        input: &CreateState,
    ) -> Result<State, mongodb::error::Error> {
        let now = Timestamp::now();
        let mut state = State {
            id: None,
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
        };

        let inserted = db.collection::<State>(STATES).insert_one(&state).await?;
        state.id = inserted.inserted_id.as_object_id();
        Ok(state)
    }

    /// Find a state by its id.
    pub async fn find_by_id(
        db: &Database,
        id: DbId,
    ) -> Result<Option<State>, mongodb::error::Error> {
        db.collection::<State>(STATES)
            .find_one(doc! { "_id": id })
            .await
    }

    /// List all states, alphabetically.
    pub async fn list(db: &Database) -> Result<Vec<State>, mongodb::error::Error> {
        let cursor = db
            .collection::<State>(STATES)
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await?;
        cursor.try_collect().await
    }

    /// Rename a state. Returns `None` if no document with the given id
    /// exists.
    pub async fn update(
        db: &Database,
        id: DbId,
        input: &UpdateState,
    ) -> Result<Option<State>, mongodb::error::Error> {
        let mut set = doc! { "updated_at": Timestamp::now() };
        if let Some(name) = &input.name {
            set.insert("name", name.as_str());
        }

        db.collection::<State>(STATES)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
    }

    /// Delete a state by id. Returns `true` if a document was removed.
    /// Cities referencing the state are left in place (references are by
    /// convention, not enforced).
    pub async fn delete(db: &Database, id: DbId) -> Result<bool, mongodb::error::Error> {
        let result = db
            .collection::<State>(STATES)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}

// ---------------------------------------------------------------------------
// Cities
// ---------------------------------------------------------------------------

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city under the given state.
    pub async fn create(
        db: &Database,
        state_id: DbId,
        input: &CreateCity,
    ) -> Result<City, mongodb::error::Error> {
        let now = Timestamp::now();
        let mut city = City {
            id: None,
            state_id,
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
        };

        let inserted = db.collection::<City>(CITIES).insert_one(&city).await?;
        city.id = inserted.inserted_id.as_object_id();
        Ok(city)
    }

    /// Find a city by its id.
    pub async fn find_by_id(
        db: &Database,
        id: DbId,
    ) -> Result<Option<City>, mongodb::error::Error> {
        db.collection::<City>(CITIES)
            .find_one(doc! { "_id": id })
            .await
    }

    /// List the cities of one state, alphabetically.
    pub async fn list_by_state(
        db: &Database,
        state_id: DbId,
    ) -> Result<Vec<City>, mongodb::error::Error> {
        let cursor = db
            .collection::<City>(CITIES)
            .find(doc! { "state_id": state_id })
            .sort(doc! { "name": 1 })
            .await?;
        cursor.try_collect().await
    }

    /// Rename a city. Returns `None` if no document with the given id
    /// exists.
    pub async fn update(
        db: &Database,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, mongodb::error::Error> {
        let mut set = doc! { "updated_at": Timestamp::now() };
        if let Some(name) = &input.name {
            set.insert("name", name.as_str());
        }

        db.collection::<City>(CITIES)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
    }

    /// Delete a city by id. Returns `true` if a document was removed.
    pub async fn delete(db: &Database, id: DbId) -> Result<bool, mongodb::error::Error> {
        let result = db
            .collection::<City>(CITIES)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}
