//! In-process record store.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::UserStore;
use crate::error::Result;
use crate::user::User;

/// Record store keeping every user in a [`BTreeMap`], ordered by identifier.
///
/// Used when no `postgres` entry exists on `config.yaml`; records do not
/// survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn save(&self, user: &User) -> Result<User> {
        let mut inner = self.lock();

        let id = match user.id {
            Some(id) => id,
            None => {
                // Monotonic, never reused within a run.
                inner.last_id += 1;
                inner.last_id
            },
        };

        let user = User {
            id: Some(id),
            ..user.clone()
        };
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.lock().users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.lock().users.remove(&id);
        Ok(())
    }
}
