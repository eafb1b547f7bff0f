/// SQLite persistence for projects

use crate::project::types::{NewProject, Project};
use crate::store::error::{is_foreign_key_violation, StoreError, StoreResult};
use sqlx::sqlite::SqlitePool;

#[derive(Debug, Clone)]
pub struct ProjectStorage {
    pool: SqlitePool,
}

impl ProjectStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Attach a new project to an existing user
    ///
    /// Fails with `NotFound` for the user when the owner does not exist.
    pub async fn create_project(&self, owner_id: i64, new_project: &NewProject) -> StoreResult<Project> {
        let result = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (owner_id, name) VALUES (?, ?) RETURNING id, owner_id, name",
        )
        .bind(owner_id)
        .bind(&new_project.name)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(project) => {
                tracing::debug!("Created project {} for user {}", project.id, owner_id);
                Ok(project)
            }
            Err(e) if is_foreign_key_violation(&e) => Err(StoreError::NotFound {
                resource: "User",
                id: owner_id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Projects owned by a user, ordered by id
    pub async fn list_projects_for_owner(&self, owner_id: i64) -> StoreResult<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, owner_id, name FROM projects WHERE owner_id = ? ORDER BY id ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }
}
