/// Project management module
///
/// Projects belong to exactly one user and disappear with it.
/// There are no project endpoints; the store exists so ownership can be
/// created and inspected.

pub mod storage;
pub mod types;

pub use storage::ProjectStorage;
pub use types::{NewProject, Project};
