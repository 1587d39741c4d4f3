//! Storage layer: MongoDB connector, document models, and repositories.

pub mod models;
pub mod repositories;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Connect to MongoDB and select the application database.
///
/// Parses the connection string, builds the client, and pings the selected
/// database so a misconfigured deployment fails at startup instead of on the
/// first request. The returned handle is shared for the process lifetime;
/// the driver's internal connection pool is the only pooling.
pub async fn connect(url: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(url).await?;
    options.app_name = Some("jobport-api".to_string());

    let client = Client::with_options(options)?;
    let db = client.database(db_name);

    db.run_command(doc! { "ping": 1 }).await?;
    tracing::debug!(db = db_name, "MongoDB connection established");

    Ok(db)
}

/// Verify the database still answers a ping.
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
