use crate::models::CourseYear;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

/// Handle to the curriculum store. Constructed once at startup and injected
/// into the handlers through application state; cloning shares the
/// underlying connection pool.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for curriculum-service");

        let year_index = IndexModel::builder()
            .keys(doc! { "year": 1 })
            .options(
                IndexOptions::builder()
                    .name("year_lookup".to_string())
                    .build(),
            )
            .build();

        self.courses().create_index(year_index, None).await.map_err(|e| {
            tracing::error!("Failed to create year index on courses collection: {}", e);
            AppError::from(e)
        })?;
        tracing::info!("Created index on courses.year");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn courses(&self) -> Collection<CourseYear> {
        self.db.collection("courses")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Tear the client down at process exit. Queries on any surviving clone
    /// fail after this returns.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
