//! List every user.

use axum::Json;
use axum::extract::State;

use crate::user::User;
use crate::{AppState, ServerError};

pub async fn handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, ServerError> {
    let users = state.users.all().await?;
    Ok(Json(users))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::*;

    #[tokio::test]
    async fn test_list_handler_on_empty_store() {
        let app = app(router::state());

        let response =
            make_request(app, Method::GET, "/users", String::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_list_handler_returns_every_user() {
        let app = app(router::state());

        for name in ["amir", "lena"] {
            let response = make_request(
                app.clone(),
                Method::POST,
                "/users",
                json!({"name": name, "email": format!("{name}@gmail.com")})
                    .to_string(),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response =
            make_request(app, Method::GET, "/users", String::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Vec<user::User> = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].name, "amir");
        assert_eq!(body[1].name, "lena");
    }
}
