//! Get a single user.

use axum::Json;
use axum::extract::{Path, State};

use crate::user::User;
use crate::{AppState, ServerError};

pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ServerError> {
    match state.users.by_id(user_id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ServerError::NotFound),
    }
}
