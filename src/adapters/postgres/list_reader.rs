//! PostgreSQL implementation of ListReader.
//!
//! Read-only queries for the "my lists" page. The list name is taken from
//! the first item by `seq` inside the query, so no items are loaded.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ListId, Timestamp, UserId};
use crate::ports::{ListReader, ListSummary};

use super::constraints::query_error;

/// PostgreSQL implementation of ListReader.
#[derive(Clone)]
pub struct PostgresListReader {
    pool: PgPool,
}

impl PostgresListReader {
    /// Creates a new PostgresListReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListReader for PostgresListReader {
    async fn owned_by(&self, user_id: &UserId) -> Result<Vec<ListSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.owner_id, l.created_at,
                   (SELECT i.text FROM items i
                    WHERE i.list_id = l.id
                    ORDER BY i.seq
                    LIMIT 1) AS name
            FROM lists l
            WHERE l.owner_id = $1
            ORDER BY l.created_at, l.id
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("Failed to fetch owned lists", e))?;

        rows.into_iter().map(row_to_summary).collect()
    }

    async fn shared_with(&self, user_id: &UserId) -> Result<Vec<ListSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.owner_id, l.created_at,
                   (SELECT i.text FROM items i
                    WHERE i.list_id = l.id
                    ORDER BY i.seq
                    LIMIT 1) AS name
            FROM lists l
            JOIN list_shared_with s ON s.list_id = l.id
            WHERE s.user_id = $1
            ORDER BY l.created_at, l.id
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("Failed to fetch shared lists", e))?;

        rows.into_iter().map(row_to_summary).collect()
    }
}

fn row_to_summary(row: sqlx::postgres::PgRow) -> Result<ListSummary, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

    let owner_id: Option<uuid::Uuid> = row
        .try_get("owner_id")
        .map_err(|e| DomainError::database(format!("Failed to get owner_id: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    let name: Option<String> = row
        .try_get("name")
        .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?;

    Ok(ListSummary {
        id: ListId::from_uuid(id),
        name,
        owner: owner_id.map(UserId::from_uuid),
        created_at: Timestamp::from_datetime(created_at),
    })
}
