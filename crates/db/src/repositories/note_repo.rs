//! Repository for the `notes` table.

use chrono::Utc;
use kb_core::search::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use kb_core::types::DbId;
use sqlx::{QueryBuilder, Sqlite};

use crate::models::note::{CreateNote, Note, NoteSearch};
use crate::DbPool;

/// Column list for notes queries.
const COLUMNS: &str = "id, title, content, summary, category, tags, \
    is_favorite, is_public, created_at, updated_at";

/// Provides CRUD and search operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a new note, returning the created row.
    ///
    /// `updated_at` starts equal to `created_at` so listing order is total
    /// from the moment of creation.
    pub async fn create(pool: &DbPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO notes
                (title, content, summary, category, tags, is_favorite, is_public,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.summary)
            .bind(&input.category)
            .bind(&input.tags)
            .bind(input.is_favorite)
            .bind(input.is_public)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notes, most recently updated first, optionally filtered by
    /// exact-match category.
    ///
    /// `category` must already be normalized: the `"all"` sentinel is
    /// resolved to `None` at the boundary.
    pub async fn list(
        pool: &DbPool,
        category: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);

        if let Some(category) = category {
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE category = $1
                 ORDER BY updated_at DESC
                 LIMIT $2 OFFSET $3"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(category)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 ORDER BY updated_at DESC
                 LIMIT $1 OFFSET $2"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await
        }
    }

    /// List favorited notes, most recently updated first.
    pub async fn list_favorites(
        pool: &DbPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE is_favorite = TRUE
             ORDER BY updated_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace a note's fields by ID, returning the updated row.
    ///
    /// Every mutable column is listed explicitly; `id` and `created_at`
    /// never appear in the SET list. `updated_at` is refreshed.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &CreateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "UPDATE notes SET
                title = $2,
                content = $3,
                summary = $4,
                category = $5,
                tags = $6,
                is_favorite = $7,
                is_public = $8,
                updated_at = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.summary)
            .bind(&input.category)
            .bind(&input.tags)
            .bind(input.is_favorite)
            .bind(input.is_public)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Flip a note's favorite flag, returning the updated row.
    pub async fn toggle_favorite(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "UPDATE notes SET is_favorite = NOT is_favorite, updated_at = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Search notes: every term must match in at least one of title,
    /// content, summary, or tags (AND across terms, OR across fields),
    /// optionally narrowed by category and by tag filters.
    ///
    /// The full result set is returned, most recently updated first; search
    /// is not paginated. Callers must pass at least one term -- the empty
    /// query is short-circuited at the boundary without a store round trip.
    pub async fn search(pool: &DbPool, search: &NoteSearch<'_>) -> Result<Vec<Note>, sqlx::Error> {
        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM notes WHERE 1=1"));

        // SQLite LIKE is ASCII case-insensitive; terms arrive lowercased.
        for term in search.terms {
            let pattern = format!("%{term}%");
            qb.push(" AND (title LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR content LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR summary LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR (tags IS NOT NULL AND tags LIKE ");
            qb.push_bind(pattern);
            qb.push("))");
        }

        if let Some(category) = search.category {
            qb.push(" AND category = ");
            qb.push_bind(category.to_string());
        }

        if !search.tags.is_empty() {
            qb.push(" AND (");
            for (i, tag) in search.tags.iter().enumerate() {
                if i > 0 {
                    qb.push(" OR ");
                }
                qb.push("(tags IS NOT NULL AND tags LIKE ");
                qb.push_bind(format!("%{tag}%"));
                qb.push(")");
            }
            qb.push(")");
        }

        qb.push(" ORDER BY updated_at DESC");

        qb.build_query_as::<Note>().fetch_all(pool).await
    }
}
