//! Overwrite user data.

use axum::Json;
use axum::extract::{Path, State};

use crate::router::Body;
use crate::user::User;
use crate::{AppState, ServerError};

/// Both `name` and `email` are overwritten unconditionally; there is no
/// partial-field merge.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Body(patch): Body<User>,
) -> Result<Json<User>, ServerError> {
    match state.users.update(user_id, patch).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ServerError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::*;

    #[tokio::test]
    async fn test_update_handler() {
        let app = app(router::state());

        let response = make_request(
            app.clone(),
            Method::POST,
            "/users",
            json!({"name": "amir", "email": "amir@gmail.com"}).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = make_request(
            app,
            Method::PUT,
            "/users/1",
            json!({"name": "updated", "email": "updated@gmail.com"})
                .to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: user::User = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.id, Some(1));
        assert_eq!(body.name, "updated");
        assert_eq!(body.email, "updated@gmail.com");
    }

    #[tokio::test]
    async fn test_update_handler_missing_user() {
        let app = app(router::state());

        let response = make_request(
            app,
            Method::PUT,
            "/users/1",
            json!({"name": "updated", "email": "updated@gmail.com"})
                .to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
