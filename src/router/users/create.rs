//! Create a new user.

use axum::Json;
use axum::extract::State;

use crate::router::Body;
use crate::user::User;
use crate::{AppState, ServerError};

pub async fn handler(
    State(state): State<AppState>,
    Body(user): Body<User>,
) -> Result<Json<User>, ServerError> {
    let user = state.users.create(user).await?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::*;

    #[tokio::test]
    async fn test_create_handler() {
        let app = app(router::state());

        let response = make_request(
            app,
            Method::POST,
            "/users",
            json!({"name": "amir", "email": "amir@gmail.com"}).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: user::User = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.id, Some(1));
        assert_eq!(body.name, "amir");
        assert_eq!(body.email, "amir@gmail.com");
    }

    #[tokio::test]
    async fn test_create_handler_rejects_malformed_body() {
        let app = app(router::state());

        let response = make_request(
            app,
            Method::POST,
            "/users",
            json!({"name": 42}).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
