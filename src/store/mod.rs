/// Persistence layer
///
/// Owns the SQLite connection pool, the schema, and the storage error type
/// shared by the user and project stores.

// Connection pool and schema initialization
pub mod database;

// Storage error taxonomy (not found, conflict, unhandled)
pub mod error;

pub use database::Database;
pub use error::{StoreError, StoreResult};
