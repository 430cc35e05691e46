//! Repository for the `categories` table.

use chrono::Utc;
use kb_core::types::DbId;

use crate::models::category::{Category, CreateCategory};
use crate::DbPool;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, description, color, created_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by name ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its unique name. Used as the duplicate-name
    /// precheck before create, so the store is never mutated on conflict.
    pub async fn find_by_name(
        pool: &DbPool,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Create a new category, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO categories (name, description, color, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Replace a category's fields by ID, returning the updated row.
    ///
    /// Explicit column list; `id` and `created_at` never change.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &CreateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = $2,
                description = $3,
                color = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    ///
    /// Notes referencing the category's name are deliberately left
    /// untouched; `notes.category` is a free-text label, not a foreign key.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
