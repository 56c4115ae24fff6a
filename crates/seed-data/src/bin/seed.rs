//! Seeds the Metaltronic sales logs and user sessions.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Connection settings come from `MONGODB_URI` or `MONGO_HOST`/`MONGO_PORT`/
//! `MONGO_USER`/`MONGO_PASSWORD`, and the database from `MONGO_DB`.

use metaltronic::config::MongoConfig;
use metaltronic::database::Database;
use seed_data::db::{COMPLETION_MESSAGE, Seeder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries only the completion line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = MongoConfig::from_env()?;
    tracing::info!("Connecting to {}", config.redacted_connection_string());

    let db = Database::connect(&config).await?;

    Seeder::new(db).run().await?;

    println!("{COMPLETION_MESSAGE}");

    Ok(())
}
