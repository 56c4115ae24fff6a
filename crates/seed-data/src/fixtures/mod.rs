//! Literal seed records.
//!
//! The default tables describe three sales and two shifts at Metaltronic S.A.
//! Callers can replace either table; an empty table skips its insert.

pub mod sales;
pub mod sessions;

use metaltronic::models::{SalesEvent, UserSession};

pub use sales::sales_events;
pub use sessions::user_sessions;

/// The records a [`crate::db::Seeder`] inserts.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub sales_events: Vec<SalesEvent>,
    pub user_sessions: Vec<UserSession>,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::metaltronic()
    }
}

impl Fixtures {
    /// Sample data for Metaltronic S.A.
    pub fn metaltronic() -> Self {
        Self {
            sales_events: sales_events(),
            user_sessions: user_sessions(),
        }
    }

    /// No records at all; only collections and indexes get created.
    pub fn empty() -> Self {
        Self {
            sales_events: Vec::new(),
            user_sessions: Vec::new(),
        }
    }

    pub fn with_sales_events(mut self, sales_events: Vec<SalesEvent>) -> Self {
        self.sales_events = sales_events;
        self
    }

    pub fn with_user_sessions(mut self, user_sessions: Vec<UserSession>) -> Self {
        self.user_sessions = user_sessions;
        self
    }
}
