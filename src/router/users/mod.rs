//! Users-related HTTP API.
mod create;
mod delete;
mod get;
mod list;
mod update;

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `POST /users` goes to `create`.
        .route("/", post(create::handler))
        // `GET /users` goes to `list`.
        .route("/", get(list::handler))
        // `GET /users/:ID` goes to `get`.
        .route("/{user_id}", get(get::handler))
        // `PUT /users/:ID` goes to `update`.
        .route("/{user_id}", put(update::handler))
        // `DELETE /users/:ID` goes to `delete`.
        .route("/{user_id}", delete(delete::handler))
}
