/// User REST API endpoints
///
/// List, fetch, create and delete users. Deleting a user removes its projects.

use crate::{
    api::error::ApiError,
    store::Database,
    user::{NewUser, User, UserStorage},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// User storage for persistence
    pub users: UserStorage,
}

impl AppState {
    pub fn new(database: &Database) -> Self {
        Self {
            users: UserStorage::new(database.pool().clone()),
        }
    }
}

/// Create user routes
pub fn create_user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user).delete(delete_user))
}

/// List all users
///
/// GET /api/users
/// Returns: [{ "id": 1, "email": "...", "name": ... }]
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

/// Get a specific user by ID
///
/// GET /api/users/{id}
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get_user(id).await?;
    Ok(Json(user))
}

/// Create a new user
///
/// POST /api/users
/// Body: { "email": "...", "name": "..." }
/// Unreadable bodies are answered with 422 like content errors.
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(payload) = payload?;
    let new_user = payload.validate()?;
    let user = state.users.create_user(&new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete a user and its projects
///
/// DELETE /api/users/{id}
/// Returns: 204 with an empty body
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
