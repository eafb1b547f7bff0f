/// SQLite persistence for users
///
/// Each write runs in its own transaction. A `sqlx::Transaction` rolls back
/// when dropped, so an early return on any path leaves nothing half-committed.

use crate::store::error::{is_unique_violation, StoreError, StoreResult};
use crate::user::types::{NewUser, User};
use sqlx::sqlite::SqlitePool;

/// User storage manager
#[derive(Debug, Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    /// Create new storage instance with database connection
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All users ordered by id ascending
    pub async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, email, name FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Listed {} users", users.len());
        Ok(users)
    }

    /// Retrieve a user by id
    pub async fn get_user(&self, id: i64) -> StoreResult<User> {
        sqlx::query_as::<_, User>("SELECT id, email, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { resource: "User", id })
    }

    /// Insert a new user
    ///
    /// A duplicate email rolls the transaction back before
    /// [`StoreError::Conflict`] is returned.
    pub async fn create_user(&self, new_user: &NewUser) -> StoreResult<User> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name) VALUES (?, ?) RETURNING id, email, name",
        )
        .bind(&new_user.email)
        .bind(&new_user.name)
        .fetch_one(&mut *tx)
        .await;

        let user = match inserted {
            Ok(user) => user,
            Err(e) if is_unique_violation(&e) => {
                tx.rollback().await?;
                tracing::info!("Rejected duplicate user: {}", new_user.email);
                return Err(StoreError::Conflict("User already exists".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        tx.commit().await.map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::Conflict("User already exists".to_string())
            } else {
                StoreError::Database(e)
            }
        })?;

        tracing::info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Delete a user and every project it owns
    ///
    /// Children go first, then the parent, in one transaction. Returns the
    /// number of projects removed. A missing user mutates nothing.
    pub async fn delete_user(&self, id: i64) -> StoreResult<u64> {
        let mut tx = self.pool.begin().await?;

        let projects_removed = sqlx::query("DELETE FROM projects WHERE owner_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let users_removed = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if users_removed == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound { resource: "User", id });
        }

        tx.commit().await?;

        tracing::info!("Deleted user {} and {} project(s)", id, projects_removed);
        Ok(projects_removed)
    }
}
