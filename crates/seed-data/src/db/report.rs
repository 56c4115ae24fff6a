//! Summary of a seeding run.

use metaltronic::indexes::{INDEXED_COLLECTIONS, index_name};
use tracing::{debug, info};

use super::seeder::SeedError;

/// Per-collection state read back after seeding.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub name: String,
    /// Documents in the collection, including any from earlier runs.
    pub document_count: u64,
    pub index_names: Vec<String>,
}

/// Result of a [`super::Seeder::run`].
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub database: String,
    pub sales_events_inserted: usize,
    pub user_sessions_inserted: usize,
    pub collections: Vec<CollectionReport>,
}

impl SeedReport {
    pub fn collection(&self, name: &str) -> Option<&CollectionReport> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Checks that every expected ascending index is present.
    pub fn verify(&self) -> Result<(), SeedError> {
        for (collection, fields) in INDEXED_COLLECTIONS {
            let names = self
                .collection(collection)
                .map(|c| c.index_names.as_slice())
                .unwrap_or_default();

            for field in fields.iter() {
                if !names.iter().any(|n| *n == index_name(field)) {
                    return Err(SeedError::MissingIndex {
                        collection: collection.to_string(),
                        field: field.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn log(&self) {
        info!("Seed completed for {}", self.database);
        info!("  Sales events inserted: {}", self.sales_events_inserted);
        info!("  User sessions inserted: {}", self.user_sessions_inserted);
        for collection in &self.collections {
            info!(
                "  {}: {} documents, {} indexes",
                collection.name,
                collection.document_count,
                collection.index_names.len()
            );
            debug!("  {} indexes: {:?}", collection.name, collection.index_names);
        }
    }
}
