//! Record stores: persistence behind the user service.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgUserStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::user::User;

pub const DEFAULT_CREDENTIALS: &str = "postgres";
pub const DEFAULT_DATABASE_NAME: &str = "userdir";
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Port for user persistence operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a user. A record without identifier is inserted and assigned
    /// one; a record with identifier overwrites the row at that identifier.
    async fn save(&self, user: &User) -> Result<User>;

    /// Every stored user.
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Find a user by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Delete a user by identifier. Absent identifiers are ignored.
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}
