//! PostgreSQL implementation of ItemRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ItemId, ListId, Timestamp};
use crate::domain::list::Item;
use crate::ports::ItemRepository;

use super::constraints::{for_list, query_error};

/// PostgreSQL implementation of ItemRepository.
///
/// `(list_id, text)` uniqueness is the `items_list_text_key` constraint;
/// creation order is the `seq` column.
#[derive(Clone)]
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    /// Creates a new PostgresItemRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn save(&self, item: &Item) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO items (id, list_id, text, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id().as_uuid())
        .bind(item.list_id().map(|l| *l.as_uuid()))
        .bind(item.text())
        .bind(item.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let err = query_error("Failed to insert item", e);
            match item.list_id() {
                Some(list_id) => for_list(err, list_id),
                None => err,
            }
        })?;

        Ok(())
    }

    async fn find_by_list(&self, list_id: &ListId) -> Result<Vec<Item>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, list_id, text, created_at
            FROM items
            WHERE list_id = $1
            ORDER BY seq
            "#,
        )
        .bind(list_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("Failed to fetch items", e))?;

        rows.into_iter().map(row_to_item).collect()
    }
}

fn row_to_item(row: sqlx::postgres::PgRow) -> Result<Item, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

    let list_id: Option<uuid::Uuid> = row
        .try_get("list_id")
        .map_err(|e| DomainError::database(format!("Failed to get list_id: {}", e)))?;

    let text: String = row
        .try_get("text")
        .map_err(|e| DomainError::database(format!("Failed to get text: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    Ok(Item::reconstitute(
        ItemId::from_uuid(id),
        list_id.map(ListId::from_uuid),
        text,
        Timestamp::from_datetime(created_at),
    ))
}
