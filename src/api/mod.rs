/// HTTP API Layer
///
/// REST endpoints for users plus the error type that maps storage failures
/// to status codes.

// User endpoints (GET/POST/DELETE)
pub mod users;

// ApiError -> HTTP response mapping
pub mod error;

// Re-export router builders
pub use error::ApiError;
pub use users::{create_user_routes, AppState};
