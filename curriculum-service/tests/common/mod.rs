use curriculum_service::config::CurriculumConfig;
use curriculum_service::services::MongoDb;
use curriculum_service::startup::Application;
use mongodb::bson::doc;
use std::time::Duration;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("curriculum_test_{}", Uuid::new_v4().simple());

        let mut config = CurriculumConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Seed raw documents into the courses collection.
    pub async fn seed(&self, documents: Vec<mongodb::bson::Document>) {
        self.db
            .database()
            .collection::<mongodb::bson::Document>("courses")
            .insert_many(documents, None)
            .await
            .expect("Failed to seed courses collection");
    }

    /// Cleanup test resources (drop the throwaway database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

/// The end-to-end tests need a live store. Probe it with a short
/// server-selection timeout so suites on machines without MongoDB skip
/// quickly instead of hanging on the driver's default timeout.
pub async fn mongo_available() -> bool {
    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let mut options = match mongodb::options::ClientOptions::parse(&uri).await {
        Ok(options) => options,
        Err(_) => return false,
    };
    options.server_selection_timeout = Some(Duration::from_millis(500));
    options.connect_timeout = Some(Duration::from_millis(500));

    let client = match mongodb::Client::with_options(options) {
        Ok(client) => client,
        Err(_) => return false,
    };

    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
        .is_ok()
}
