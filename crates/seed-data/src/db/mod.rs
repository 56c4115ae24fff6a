//! Database integration for seeding.
//!
//! The [`Seeder`] creates the collections, inserts the fixture tables in
//! batches and builds the secondary indexes, returning a [`SeedReport`].

mod report;
mod seeder;

pub use report::{CollectionReport, SeedReport};
pub use seeder::{COMPLETION_MESSAGE, SeedError, Seeder};
