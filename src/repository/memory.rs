//! In-memory `BlogRepository`, used by tests and when no database is configured.
//! Data is lost on process restart.

use super::BlogRepository;
use crate::error::AppError;
use crate::model::{Blog, BlogPayload};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Blog>,
}

#[derive(Default)]
pub struct InMemoryBlogRepository {
    table: RwLock<Table>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, payload: &BlogPayload) -> Result<Blog, AppError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let now = Utc::now();
        let blog = Blog {
            id: table.next_id,
            title: payload.title.clone(),
            content: payload.content.clone(),
            category: payload.category.clone(),
            tags: payload.tags.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn get_by_id(&self, id: i64) -> Result<Blog, AppError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(AppError::NotFound)
    }

    async fn get_all(&self, term: &str) -> Result<Vec<Blog>, AppError> {
        let needle = term.to_lowercase();
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|b| needle.is_empty() || b.matches_term(&needle))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, payload: &BlogPayload) -> Result<Blog, AppError> {
        let mut table = self.table.write().await;
        let blog = table.rows.get_mut(&id).ok_or(AppError::NotFound)?;
        blog.title = payload.title.clone();
        blog.content = payload.content.clone();
        blog.category = payload.category.clone();
        blog.tags = payload.tags.clone();
        // Never move backwards past created_at, even if the wall clock does.
        blog.updated_at = Utc::now().max(blog.created_at);
        Ok(blog.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(AppError::NotFound)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
