//! PostgreSQL implementation of SessionStore.
//!
//! Rows are keyed by the SHA-256 digest of the token; the raw token only
//! ever exists in the client's cookie.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp, UserId};
use crate::domain::user::SessionToken;
use crate::ports::SessionStore;

/// PostgreSQL implementation of SessionStore.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
    ttl_secs: u64,
}

impl PostgresSessionStore {
    /// Creates a new PostgresSessionStore issuing sessions valid for `ttl_secs`.
    pub fn new(pool: PgPool, ttl_secs: u64) -> Self {
        Self { pool, ttl_secs }
    }

    /// Delete every expired session. Returns the number removed.
    pub async fn purge_expired(&self) -> Result<u64, AuthError> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE expires_at <= now()")
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(result.rows_affected())
    }
}

fn unavailable(e: sqlx::Error) -> AuthError {
    tracing::error!(error = %e, "session store query failed");
    AuthError::service_unavailable(e.to_string())
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn create(&self, user: &AuthenticatedUser) -> Result<SessionToken, AuthError> {
        let token = SessionToken::generate();
        let now = Timestamp::now();
        let expires_at = now
            .plus_secs(self.ttl_secs)
            .ok_or_else(|| AuthError::service_unavailable("session expiry out of range"))?;

        sqlx::query(
            r#"
            INSERT INTO auth_sessions (token_hash, user_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(token.digest())
        .bind(user.id.as_uuid())
        .bind(now.as_datetime())
        .bind(expires_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(token)
    }

    async fn validate(&self, token: &SessionToken) -> Result<AuthenticatedUser, AuthError> {
        let digest = token.digest();
        let row = sqlx::query(
            r#"
            SELECT s.user_id, s.expires_at, u.email
            FROM auth_sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token_hash = $1
            "#,
        )
        .bind(&digest)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)?
        .ok_or(AuthError::InvalidSession)?;

        let user_id: uuid::Uuid = row.try_get("user_id").map_err(unavailable)?;
        let email: String = row.try_get("email").map_err(unavailable)?;
        let expires_at: chrono::DateTime<chrono::Utc> =
            row.try_get("expires_at").map_err(unavailable)?;

        if !Timestamp::now().is_before(&Timestamp::from_datetime(expires_at)) {
            sqlx::query("DELETE FROM auth_sessions WHERE token_hash = $1")
                .bind(&digest)
                .execute(&self.pool)
                .await
                .map_err(unavailable)?;
            return Err(AuthError::SessionExpired);
        }

        Ok(AuthenticatedUser::new(UserId::from_uuid(user_id), email))
    }

    async fn revoke(&self, token: &SessionToken) -> Result<(), AuthError> {
        sqlx::query("DELETE FROM auth_sessions WHERE token_hash = $1")
            .bind(token.digest())
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(())
    }
}
