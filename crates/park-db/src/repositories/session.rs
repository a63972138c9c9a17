//! PostgreSQL implementation of SessionRepository
//!
//! Sessions are keyed by user_id (primary key), so a user can never hold two
//! rows. Rotation is a single upsert statement: concurrent logins/refreshes
//! for the same user serialize inside PostgreSQL and the last writer wins.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use park_core::entities::Session;
use park_core::traits::{RepoResult, SessionRepository};

use crate::models::SessionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SessionRepository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    /// Create a new PgSessionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Session>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT user_id, refresh_token, created_at
            FROM sessions
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Session::from))
    }

    #[instrument(skip(self, refresh_token))]
    async fn replace(&self, user_id: i64, refresh_token: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO sessions (user_id, refresh_token, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET refresh_token = EXCLUDED.refresh_token, created_at = NOW()
            ",
        )
        .bind(user_id)
        .bind(refresh_token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_user(&self, user_id: i64) -> RepoResult<()> {
        // Idempotent: zero affected rows is not an error
        sqlx::query(
            r"
            DELETE FROM sessions WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
