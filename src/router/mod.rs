//! HTTP surface.

pub mod status;
pub mod users;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::ServerError;

/// JSON body extractor rejecting malformed payloads with a structured 400.
pub struct Body<T>(pub T);

impl<T, S> FromRequest<S> for Body<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
pub(crate) fn state() -> crate::AppState {
    use std::sync::Arc;

    use crate::store::MemoryStore;
    use crate::user::UserService;

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        users: UserService::new(Arc::new(MemoryStore::default())),
    }
}
