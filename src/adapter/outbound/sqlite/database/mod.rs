//! SQLite database modules.
//!
//! Provides connection setup, table definitions, and Diesel row types for
//! the record store. The store never applies DDL on its own; callers pass
//! either [`BUNDLED_SCHEMA`] or the contents of their own schema file.

pub mod connection;
pub mod model;
pub mod schema;

/// The DDL shipped in `schema/schema.sql`, for callers without a schema file.
pub const BUNDLED_SCHEMA: &str = include_str!("../../../../../schema/schema.sql");
