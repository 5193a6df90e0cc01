mod service;

pub use service::*;

use serde::{Deserialize, Serialize};

/// User as saved on the record store.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct User {
    /// Store-assigned identifier, absent until the record is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}
