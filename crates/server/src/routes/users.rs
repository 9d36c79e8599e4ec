//! User administration route handlers.

use axum::{Json, extract::State};

use crate::db::users::UserRepository;
use crate::error::Result as AppResult;
use crate::middleware::RequireAdmin;
use crate::models::User;
use crate::state::AppState;

/// List all accounts, newest first.
///
/// Admin only. [`User`] carries no password material, so the hash can
/// never leak through this endpoint.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool());
    let users = users.list().await?;
    Ok(Json(users))
}
