use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{Document, doc},
    options::ClientOptions,
};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::config::MongoConfig;
use crate::errors::{AppError, is_namespace_exists};
use crate::indexes;
use crate::models::{SalesEvent, UserSession, bson_datetime};
use crate::{SALES_EVENTS, USER_SESSIONS};

/// Application name reported to the server in the connection handshake.
pub const APP_NAME: &str = "metaltronic-seed";

/// Handle to the target database. Cheap to clone; clones share the driver's pool.
#[derive(Clone, Debug)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    pub fn new(db: mongodb::Database) -> Self {
        Self { db }
    }

    /// Builds a client from `config`, selects its database and pings the server.
    ///
    /// Fails once the server selection timeout elapses without a reachable server.
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        let uri = config.connection_string();
        let mut options = ClientOptions::parse(uri.as_str()).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(options)?;
        let database = Self::new(client.database(&config.database));
        database.ping().await?;

        info!(
            "Connected to {} (database {})",
            config.redacted_connection_string(),
            database.name()
        );
        Ok(database)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }

    pub fn sales_events(&self) -> Collection<SalesEvent> {
        self.db.collection(SALES_EVENTS)
    }

    pub fn user_sessions(&self) -> Collection<UserSession> {
        self.db.collection(USER_SESSIONS)
    }

    /// Creates `name`, treating an existing collection as a skip.
    ///
    /// Returns `true` if the collection was created by this call.
    pub async fn ensure_collection(&self, name: &str) -> Result<bool, AppError> {
        match self.db.create_collection(name).await {
            Ok(()) => {
                info!("Created collection {}", name);
                Ok(true)
            }
            Err(e) if is_namespace_exists(&e) => {
                warn!("Collection {} already exists, skipping creation", name);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Inserts `docs` into `collection` with a single `insertMany`.
    ///
    /// Returns the number of documents the server acknowledged.
    pub async fn insert_many<T>(&self, collection: &str, docs: &[T]) -> Result<usize, AppError>
    where
        T: Serialize + Send + Sync,
    {
        let result = self
            .db
            .collection::<T>(collection)
            .insert_many(docs)
            .await?;

        Ok(result.inserted_ids.len())
    }

    /// Creates an ascending index per field and returns the index names.
    pub async fn create_ascending_indexes(
        &self,
        collection: &str,
        fields: &[&str],
    ) -> Result<Vec<String>, AppError> {
        let coll = self.db.collection::<Document>(collection);
        let mut names = Vec::with_capacity(fields.len());

        for model in indexes::get_index_models(fields) {
            let created = coll.create_index(model).await?;
            debug!("Index {} ready on {}", created.index_name, collection);
            names.push(created.index_name);
        }

        Ok(names)
    }

    pub async fn index_names(&self, collection: &str) -> Result<Vec<String>, AppError> {
        let names = self
            .db
            .collection::<Document>(collection)
            .list_index_names()
            .await?;

        Ok(names)
    }

    pub async fn count(&self, collection: &str) -> Result<u64, AppError> {
        let count = self
            .db
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await?;

        Ok(count)
    }

    /// Sales events with `start <= timestamp <= end`, oldest first.
    pub async fn sales_between(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SalesEvent>, AppError> {
        let filter = doc! {
            "timestamp": {
                "$gte": bson_datetime::to_bson(start),
                "$lte": bson_datetime::to_bson(end),
            }
        };

        let cursor = self
            .sales_events()
            .find(filter)
            .sort(doc! { "timestamp": 1 })
            .await?;
        let events: Vec<SalesEvent> = cursor.try_collect().await?;

        Ok(events)
    }

    pub async fn find_sale_by_invoice(
        &self,
        invoice_number: &str,
    ) -> Result<Option<SalesEvent>, AppError> {
        let event = self
            .sales_events()
            .find_one(doc! { "numero_factura": invoice_number })
            .await?;

        Ok(event)
    }

    /// Sessions for one user, earliest shift first.
    pub async fn sessions_for_user(&self, user_id: &str) -> Result<Vec<UserSession>, AppError> {
        let cursor = self
            .user_sessions()
            .find(doc! { "usuario_id": user_id })
            .sort(doc! { "fecha_inicio": 1 })
            .await?;
        let sessions: Vec<UserSession> = cursor.try_collect().await?;

        Ok(sessions)
    }

    /// Drops both seeded collections along with their indexes.
    ///
    /// **WARNING**: This deletes all sales events and sessions.
    pub async fn clear_all(&self) -> Result<(), AppError> {
        info!("Dropping {} and {}", SALES_EVENTS, USER_SESSIONS);

        self.sales_events().drop().await?;
        self.user_sessions().drop().await?;

        Ok(())
    }

    /// Drops the whole database. Used to clean up scratch databases.
    pub async fn drop_database(&self) -> Result<(), AppError> {
        self.db.drop().await?;
        Ok(())
    }
}
