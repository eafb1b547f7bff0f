/// User service: minimal user and project CRUD over HTTP
///
/// This library provides the SQLite persistence layer, the axum request
/// handlers, and the server wiring around them.

// Core configuration and setup
pub mod config;

// Connection pool, schema, and storage errors
pub mod store;

// User types, validation, and persistence
pub mod user;

// Projects owned by users (removed with their owner)
pub mod project;

// HTTP API layer - REST endpoints for users
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use project::{NewProject, Project, ProjectStorage};
pub use server::{build_router, create_app, start_server};
pub use store::{Database, StoreError};
pub use user::{NewUser, User, UserStorage};
