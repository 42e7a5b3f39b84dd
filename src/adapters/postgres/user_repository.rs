//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::user::{Email, HashedPassword, User};
use crate::ports::UserRepository;

use super::constraints::query_error;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.email().as_str())
        .bind(user.password_hash().as_str())
        .bind(user.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to insert user", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error("Failed to fetch user", e))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error("Failed to fetch user by email", e))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE id = ANY($1)",
        )
        .bind(uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("Failed to fetch users", e))?;

        rows.into_iter().map(row_to_user).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_user(row: sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

    let email: String = row
        .try_get("email")
        .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?;

    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| DomainError::database(format!("Failed to get password_hash: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    Ok(User::reconstitute(
        UserId::from_uuid(id),
        parse_stored_email(&email)?,
        HashedPassword::from_phc(password_hash),
        Timestamp::from_datetime(created_at),
    ))
}

fn parse_stored_email(raw: &str) -> Result<Email, DomainError> {
    Email::parse(raw)
        .map_err(|e| DomainError::database(format!("Invalid stored email {}: {}", raw, e)))
}
