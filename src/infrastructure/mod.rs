//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading, validation and logging setup
//! - [`crypto`] - Salt generation and password hashing

pub mod config;
pub mod crypto;
