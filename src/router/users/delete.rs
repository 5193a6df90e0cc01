//! Delete a user.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::{AppState, ServerError};

/// Unconditional: deleting an absent identifier still answers 204.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    state.users.delete(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::*;

    #[tokio::test]
    async fn test_delete_handler() {
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
            app.clone(),
            Method::DELETE,
            "/users/1",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        // User must be deleted.
        let response =
            make_request(app, Method::GET, "/users/1", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_handler_missing_user_still_succeeds() {
        let app = app(router::state());

        let response =
            make_request(app, Method::DELETE, "/users/1", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
