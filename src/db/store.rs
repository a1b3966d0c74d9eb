//! Collection store: whole-collection replace and full reads.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Collection, Record};

/// Handle to the document store, shared by every handler through `AppState`.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Round-trip to the database without touching any collection.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Number of documents stored in a collection.
    pub async fn count(&self, collection: Collection) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM documents WHERE collection = ?")
            .bind(collection.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("total"))
    }

    /// Read every record of a kind, in the order it was written.
    pub async fn list<T: Record>(&self) -> Result<Vec<T>, AppError> {
        let rows = sqlx::query(
            "SELECT position, body FROM documents WHERE collection = ? ORDER BY position",
        )
        .bind(T::COLLECTION.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let position: i64 = row.get("position");
                let body: String = row.get("body");
                serde_json::from_str(&body).map_err(|e| {
                    AppError::Internal(format!(
                        "Stored {} document {} is unreadable: {}",
                        T::COLLECTION,
                        position,
                        e
                    ))
                })
            })
            .collect()
    }

    /// Replace the whole collection with `records`.
    ///
    /// Delete and insert share one transaction, so a failed insert leaves the previous
    /// contents in place.
    pub async fn replace<T: Record>(&self, records: &[T]) -> Result<(), AppError> {
        let collection = T::COLLECTION.as_str();
        let bodies = records
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                AppError::Internal(format!("Failed to encode {} records: {}", collection, e))
            })?;

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM documents WHERE collection = ?")
            .bind(collection)
            .execute(&mut *tx)
            .await?;

        for (position, body) in bodies.iter().enumerate() {
            sqlx::query("INSERT INTO documents (collection, position, body) VALUES (?, ?, ?)")
                .bind(collection)
                .bind(position as i64)
                .bind(body)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Close the pool; in-flight queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
