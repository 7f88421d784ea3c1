use crate::utils::error::AppError;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

pub const PAGE_VIEWS_COLLECTION: &str = "pageViews";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Builds the client without touching the network; call `ping` at
    /// startup to make connection failures fatal.
    pub async fn connect(uri: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Invalid MONGO_URI: {}", e)))?;

        // Connection pool tuned for a small request-per-call service
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(format!("Failed to build client: {}", e)))?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("attendance");

        let db = client.database(db_name);

        Ok(Self { client, db })
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("Ping failed: {}", e)))?;
        Ok(())
    }

    /// Page views are keyed by date string; the unique index backs the
    /// upsert-increment path.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        log::info!("🔧 Creating database indexes...");

        let page_views = self
            .db
            .collection::<mongodb::bson::Document>(PAGE_VIEWS_COLLECTION);

        let date_index = IndexModel::builder()
            .keys(doc! { "date": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match page_views.create_index(date_index).await {
            Ok(_) => log::info!("   ✅ Index created: pageViews(date)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
