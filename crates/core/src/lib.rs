//! COFIPEI Core - Financial entries, report aggregation and chart rendering.
//!
//! This crate holds the report business logic. It is database-agnostic and
//! defines the repository trait implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod entries;
pub mod errors;
pub mod reports;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
