//! SQLite-backed record store.
//!
//! [`RecordStore`] owns a single connection. Its methods are split by concern:
//! `store` holds the lifecycle and CRUD, `auth` the user accounts and
//! `report` the read-side exports and summaries.

pub mod auth;
pub mod database;
pub mod report;
pub mod store;

pub use auth::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
pub use store::{RecordStore, DEFAULT_SERVICE_INTERVAL_DAYS};
