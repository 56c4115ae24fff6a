//! Database seeding pipeline.

use metaltronic::database::Database;
use metaltronic::errors::AppError;
use metaltronic::indexes::INDEXED_COLLECTIONS;
use metaltronic::{SALES_EVENTS, USER_SESSIONS};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use super::report::{CollectionReport, SeedReport};
use crate::config::SeedConfig;
use crate::fixtures::Fixtures;

/// Printed to stdout once a run has finished every step.
pub const COMPLETION_MESSAGE: &str = "Inicialización de MongoDB completada para Metaltronic S.A.";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] AppError),
    #[error("Index {field}_1 missing on {collection}")]
    MissingIndex { collection: String, field: String },
}

impl From<mongodb::error::Error> for SeedError {
    fn from(e: mongodb::error::Error) -> Self {
        SeedError::Database(AppError::Database(e))
    }
}

/// Seeds sales events and user sessions, then indexes both collections.
///
/// Every step runs to completion before the next starts. Nothing is retried and
/// inserts are not idempotent: running twice stores every record twice.
pub struct Seeder {
    db: Database,
    fixtures: Fixtures,
    config: SeedConfig,
}

impl Seeder {
    /// Creates a seeder for the given database with the default fixtures.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            fixtures: Fixtures::default(),
            config: SeedConfig::default(),
        }
    }

    /// Replaces the records to insert.
    pub fn with_fixtures(mut self, fixtures: Fixtures) -> Self {
        self.fixtures = fixtures;
        self
    }

    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the batch size for bulk operations.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    /// Runs the full pipeline: collections, inserts, indexes, report.
    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        info!("Seeding database {}", self.db.name());

        self.db.ensure_collection(SALES_EVENTS).await?;
        let sales_events_inserted = self.seed_sales_events().await?;

        self.db.ensure_collection(USER_SESSIONS).await?;
        let user_sessions_inserted = self.seed_user_sessions().await?;

        self.create_indexes().await?;

        let report = self
            .build_report(sales_events_inserted, user_sessions_inserted)
            .await?;
        if self.config.verify {
            report.verify()?;
        }
        report.log();

        Ok(report)
    }

    /// Seeds sales events into `logs_ventas`.
    pub async fn seed_sales_events(&self) -> Result<usize, SeedError> {
        self.insert_batches(SALES_EVENTS, &self.fixtures.sales_events, "sales events")
            .await
    }

    /// Seeds user sessions into `sesiones_usuario`.
    pub async fn seed_user_sessions(&self) -> Result<usize, SeedError> {
        self.insert_batches(USER_SESSIONS, &self.fixtures.user_sessions, "user sessions")
            .await
    }

    async fn insert_batches<T>(
        &self,
        collection: &str,
        docs: &[T],
        label: &str,
    ) -> Result<usize, SeedError>
    where
        T: Serialize + Send + Sync,
    {
        // insertMany rejects an empty batch
        if docs.is_empty() {
            info!("No {} to seed, skipping", label);
            return Ok(0);
        }

        info!("Seeding {} {}...", docs.len(), label);

        let mut inserted = 0;
        for chunk in docs.chunks(self.config.batch_size.max(1)) {
            inserted += self.db.insert_many(collection, chunk).await?;
        }

        info!("Seeded {} {}", inserted, label);
        Ok(inserted)
    }

    /// Creates the ascending indexes on both collections.
    pub async fn create_indexes(&self) -> Result<(), SeedError> {
        for (collection, fields) in INDEXED_COLLECTIONS {
            info!("Creating {} indexes on {}...", fields.len(), collection);
            self.db.create_ascending_indexes(collection, fields).await?;
        }

        Ok(())
    }

    async fn build_report(
        &self,
        sales_events_inserted: usize,
        user_sessions_inserted: usize,
    ) -> Result<SeedReport, SeedError> {
        let mut collections = Vec::with_capacity(INDEXED_COLLECTIONS.len());
        for (collection, _) in INDEXED_COLLECTIONS {
            collections.push(CollectionReport {
                name: collection.to_string(),
                document_count: self.db.count(collection).await?,
                index_names: self.db.index_names(collection).await?,
            });
        }

        Ok(SeedReport {
            database: self.db.name().to_string(),
            sales_events_inserted,
            user_sessions_inserted,
            collections,
        })
    }

    /// Returns a reference to the database handle for advanced usage.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
