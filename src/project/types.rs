/// Project type definitions

use serde::{Deserialize, Serialize};

/// A project owned by a single user
///
/// Deleting the owner deletes the project in the same transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Auto-assigned identifier
    pub id: i64,
    /// Owning user id (foreign key to users.id)
    pub owner_id: i64,
    /// Human-readable project name
    pub name: String,
}

/// Fields supplied when creating a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
