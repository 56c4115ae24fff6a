//! Configuration for seeding runs.

use serde::{Deserialize, Serialize};

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Documents sent per `insertMany` call.
    pub batch_size: usize,

    /// Whether to confirm every expected index exists after seeding.
    pub verify: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            batch_size: 50,
            verify: true,
        }
    }
}
