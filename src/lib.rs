//! Servicebay - vehicle service records for dealership service centers.
//!
//! A synchronous record store over a single SQLite database, plus the
//! operator CLI that drives it.
//!
//! # Modules
//!
//! - [`domain`] - Plain entity types: service records, mechanics,
//!   appointments, assignments and report rows
//! - [`adapter::outbound::sqlite`] - [`RecordStore`], the persistence and
//!   reporting layer
//! - [`adapter::outbound::csv`] - CSV rendering for exports
//! - [`adapter::inbound::cli`] - Command tree and handlers
//! - [`infrastructure`] - Configuration, logging setup and password hashing
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use servicebay::adapter::outbound::sqlite::database::BUNDLED_SCHEMA;
//! use servicebay::domain::ServiceRecord;
//! use servicebay::RecordStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = RecordStore::open_or_create("servicebay.db")?;
//!     store.initialize_schema(BUNDLED_SCHEMA)?;
//!     store.add_service_record(&ServiceRecord::new(
//!         "JT123TESTVIN00001",
//!         "John Doe",
//!         "2025-09-16",
//!         "Oil change",
//!         "A. Mechanic",
//!     ))?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use adapter::outbound::sqlite::RecordStore;
