//! PostgreSQL implementation of `BlogRepository`.

use super::BlogRepository;
use crate::error::AppError;
use crate::model::{Blog, BlogPayload};
use async_trait::async_trait;
use sqlx::PgPool;

/// Selected and returned by every statement, so rows always decode by column name into `Blog`.
const COLUMNS: &str = "id, title, content, category, tags, created_at, updated_at";

#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        PgBlogRepository { pool }
    }
}

/// Escape `\`, `%` and `_` so a search term matches literally inside `ILIKE`.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn create(&self, payload: &BlogPayload) -> Result<Blog, AppError> {
        let sql = format!(
            "INSERT INTO blogs (title, content, category, tags, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, NOW(), NOW()) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, tags = ?payload.tags, "create");
        let blog = sqlx::query_as::<_, Blog>(&sql)
            .bind(&payload.title)
            .bind(&payload.content)
            .bind(&payload.category)
            .bind(&payload.tags)
            .fetch_one(&self.pool)
            .await?;
        Ok(blog)
    }

    async fn get_by_id(&self, id: i64) -> Result<Blog, AppError> {
        let sql = format!("SELECT {} FROM blogs WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "get_by_id");
        sqlx::query_as::<_, Blog>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn get_all(&self, term: &str) -> Result<Vec<Blog>, AppError> {
        let rows = if term.is_empty() {
            let sql = format!("SELECT {} FROM blogs ORDER BY id", COLUMNS);
            tracing::debug!(sql = %sql, "get_all");
            sqlx::query_as::<_, Blog>(&sql).fetch_all(&self.pool).await?
        } else {
            let sql = format!(
                "SELECT {} FROM blogs \
                 WHERE title ILIKE $1 OR content ILIKE $1 OR category ILIKE $1 \
                 ORDER BY id",
                COLUMNS
            );
            let pattern = format!("%{}%", escape_like(term));
            tracing::debug!(sql = %sql, pattern = %pattern, "get_all");
            sqlx::query_as::<_, Blog>(&sql)
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(rows)
    }

    async fn update(&self, id: i64, payload: &BlogPayload) -> Result<Blog, AppError> {
        let sql = format!(
            "UPDATE blogs SET title = $1, content = $2, category = $3, tags = $4, updated_at = NOW() \
             WHERE id = $5 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, tags = ?payload.tags, "update");
        // Zero matched rows yields no RETURNING row rather than an error.
        sqlx::query_as::<_, Blog>(&sql)
            .bind(&payload.title)
            .bind(&payload.content)
            .bind(&payload.category)
            .bind(&payload.tags)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete");
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
