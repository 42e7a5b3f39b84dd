//! PostgreSQL implementation of ListRepository.
//!
//! Persists List aggregates together with their sharing rows.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ListId, Timestamp, UserId};
use crate::domain::list::{Item, List};
use crate::ports::ListRepository;

use super::constraints::{for_list, query_error};

/// PostgreSQL implementation of ListRepository.
#[derive(Clone)]
pub struct PostgresListRepository {
    pool: PgPool,
}

impl PostgresListRepository {
    /// Creates a new PostgresListRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for PostgresListRepository {
    async fn create_with_first_item(
        &self,
        list: &List,
        first_item: &Item,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to start transaction: {}", e)))?;

        sqlx::query("INSERT INTO lists (id, owner_id, created_at) VALUES ($1, $2, $3)")
            .bind(list.id().as_uuid())
            .bind(list.owner().map(|u| *u.as_uuid()))
            .bind(list.created_at().as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| query_error("Failed to insert list", e))?;

        sqlx::query(
            r#"
            INSERT INTO items (id, list_id, text, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(first_item.id().as_uuid())
        .bind(first_item.list_id().map(|l| *l.as_uuid()))
        .bind(first_item.text())
        .bind(first_item.created_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| query_error("Failed to insert first item", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit transaction: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ListId) -> Result<Option<List>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT l.id, l.owner_id, l.created_at,
                   COALESCE(
                       array_agg(s.user_id ORDER BY s.created_at)
                           FILTER (WHERE s.user_id IS NOT NULL),
                       '{}'
                   ) AS shared_with
            FROM lists l
            LEFT JOIN list_shared_with s ON s.list_id = l.id
            WHERE l.id = $1
            GROUP BY l.id, l.owner_id, l.created_at
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error("Failed to fetch list", e))?;

        row.map(row_to_list).transpose()
    }

    async fn add_sharee(&self, list_id: &ListId, user_id: &UserId) -> Result<(), DomainError> {
        // The owner never lands in list_shared_with, whoever calls this.
        sqlx::query(
            r#"
            INSERT INTO list_shared_with (list_id, user_id)
            SELECT $1, $2
            WHERE NOT EXISTS (
                SELECT 1 FROM lists WHERE id = $1 AND owner_id = $2
            )
            ON CONFLICT (list_id, user_id) DO NOTHING
            "#,
        )
        .bind(list_id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| for_list(query_error("Failed to share list", e), list_id))?;

        Ok(())
    }

    async fn delete(&self, id: &ListId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete list", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::list_not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_list(row: sqlx::postgres::PgRow) -> Result<List, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

    let owner_id: Option<uuid::Uuid> = row
        .try_get("owner_id")
        .map_err(|e| DomainError::database(format!("Failed to get owner_id: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    let shared_with: Vec<uuid::Uuid> = row
        .try_get("shared_with")
        .map_err(|e| DomainError::database(format!("Failed to get shared_with: {}", e)))?;

    Ok(build_list(id, owner_id, shared_with, created_at))
}

fn build_list(
    id: uuid::Uuid,
    owner_id: Option<uuid::Uuid>,
    shared_with: Vec<uuid::Uuid>,
    created_at: chrono::DateTime<chrono::Utc>,
) -> List {
    List::reconstitute(
        ListId::from_uuid(id),
        owner_id.map(UserId::from_uuid),
        shared_with.into_iter().map(UserId::from_uuid).collect(),
        Timestamp::from_datetime(created_at),
    )
}
