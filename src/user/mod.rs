/// User management layer
///
/// Type definitions and SQLite persistence for users.

// Core user type definitions and payload validation
pub mod types;

// SQLite persistence with transactional create/delete
pub mod storage;

// Re-export commonly used types
pub use storage::UserStorage;
pub use types::{NewUser, User, ValidationError};
