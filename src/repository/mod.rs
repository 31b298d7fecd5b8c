//! Storage boundary for blog posts.

mod memory;
mod postgres;

pub use memory::InMemoryBlogRepository;
pub use postgres::PgBlogRepository;

use crate::error::AppError;
use crate::model::{Blog, BlogPayload};
use async_trait::async_trait;

/// CRUD over the `blogs` table. Every method is a single statement; none span a transaction.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a row. The store assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, payload: &BlogPayload) -> Result<Blog, AppError>;

    /// Fetch by primary key. `AppError::NotFound` when no row matches.
    async fn get_by_id(&self, id: i64) -> Result<Blog, AppError>;

    /// All rows ordered by id, or those whose title, content or category contain
    /// `term` case-insensitively. An empty term disables filtering.
    async fn get_all(&self, term: &str) -> Result<Vec<Blog>, AppError>;

    /// Overwrite every mutable field and refresh `updated_at`. `AppError::NotFound` when the id is absent.
    async fn update(&self, id: i64, payload: &BlogPayload) -> Result<Blog, AppError>;

    /// `AppError::NotFound` when no row was removed.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Liveness check used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}
