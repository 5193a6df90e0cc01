//! PostgreSQL implementation of the record store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::UserStore;
use crate::error::Result;
use crate::user::User;

/// PostgreSQL user store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Init database connections and create a new [`PgUserStore`].
    pub async fn connect(
        hostname: &str,
        username: &str,
        password: &str,
        db: &str,
        pool: u32,
    ) -> Result<Self> {
        let addr = format!("postgres://{username}:{password}@{hostname}/{db}");
        let pool = PgPoolOptions::new().max_connections(pool);
        let postgres = pool.connect(&addr).await?;

        tracing::info!(%hostname, %db, "postgres connected");

        Ok(Self { pool: postgres })
    }

    /// Underlying connections pool, used to run migrations on start.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn save(&self, user: &User) -> Result<User> {
        let saved = match user.id {
            Some(id) => {
                sqlx::query_as::<_, User>(
                    r#"UPDATE users SET name = $2, email = $3
                        WHERE id = $1
                        RETURNING id, name, email"#,
                )
                .bind(id)
                .bind(&user.name)
                .bind(&user.email)
                .fetch_one(&self.pool)
                .await?
            },
            None => {
                sqlx::query_as::<_, User>(
                    r#"INSERT INTO users (name, email) VALUES ($1, $2)
                        RETURNING id, name, email"#,
                )
                .bind(&user.name)
                .bind(&user.email)
                .fetch_one(&self.pool)
                .await?
            },
        };

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        // Explicit order so both store backends iterate the same way.
        let users = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email FROM users ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
