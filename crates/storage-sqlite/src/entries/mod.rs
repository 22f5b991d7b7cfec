//! SQLite storage implementation for financial entries.

mod model;
mod repository;

pub use model::EntryDB;
pub use repository::EntryRepository;
