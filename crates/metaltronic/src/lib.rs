//! Records, collections and database access for the Metaltronic document store.
//!
//! Point-of-sale terminals log each completed sale to [`SALES_EVENTS`] and each
//! salesperson shift to [`USER_SESSIONS`]. [`database::Database`] wraps the
//! driver handle that every operation takes explicitly.

pub mod config;
pub mod database;
pub mod errors;
pub mod indexes;
pub mod models;

/// Collection holding [`models::SalesEvent`] documents.
pub const SALES_EVENTS: &str = "logs_ventas";

/// Collection holding [`models::UserSession`] documents.
pub const USER_SESSIONS: &str = "sesiones_usuario";
