//! Seed data for the Metaltronic document store.
//!
//! Creates the `logs_ventas` and `sesiones_usuario` collections, inserts a
//! small set of sales events and user sessions, and indexes both collections
//! for the reporting queries that read them later.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let db = Database::connect(&MongoConfig::from_env()?).await?;
//! let report = Seeder::new(db).run().await?;
//! println!("{COMPLETION_MESSAGE}");
//! ```

pub mod config;
pub mod db;
pub mod fixtures;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{COMPLETION_MESSAGE, CollectionReport, SeedError, SeedReport, Seeder};
    pub use crate::fixtures::{Fixtures, sales_events, user_sessions};
    pub use metaltronic::config::MongoConfig;
    pub use metaltronic::database::Database;
    pub use metaltronic::models::{EventKind, LineItem, SaleMetadata, SalesEvent, UserSession};
}
