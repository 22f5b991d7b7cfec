//! SQLite storage implementation for COFIPEI.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository trait defined in `cofipei-core`
//! and contains:
//! - Database connection pooling and management
//! - The embedded baseline migration
//! - The financial entry repository
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist.

pub mod db;
pub mod entries;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, ping, run_migrations, DbConnection, DbPool};

pub use entries::EntryRepository;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from cofipei-core for convenience
pub use cofipei_core::errors::{DatabaseError, Error, Result};
