//! Adapters at the edges of the crate.
//!
//! `inbound` drives the store (the operator CLI); `outbound` is driven by it
//! (SQLite persistence and CSV rendering).

pub mod inbound;
pub mod outbound;
