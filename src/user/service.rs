use std::sync::Arc;

use crate::error::Result;
use crate::store::UserStore;
use crate::user::User;

/// User manager.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new [`UserService`].
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Persist a new user. The store assigns the identifier.
    pub async fn create(&self, mut user: User) -> Result<User> {
        // A client-supplied identifier is never trusted.
        user.id = None;
        self.store.save(&user).await
    }

    /// Every stored user, in store iteration order.
    pub async fn all(&self) -> Result<Vec<User>> {
        self.store.find_all().await
    }

    /// Find a user using the `id` field.
    pub async fn by_id(&self, id: i64) -> Result<Option<User>> {
        self.store.find_by_id(id).await
    }

    /// Overwrite `name` and `email` of an existing user.
    ///
    /// Returns [`None`] when no record exists at `id`; the identifier itself
    /// never changes.
    pub async fn update(&self, id: i64, patch: User) -> Result<Option<User>> {
        let Some(mut user) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        user.name = patch.name;
        user.email = patch.email;

        self.store.save(&user).await.map(Some)
    }

    /// Remove a user. Deleting an absent identifier is a no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete_by_id(id).await
    }
}
