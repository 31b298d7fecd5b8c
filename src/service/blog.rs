//! Pass-through orchestration over a `BlogRepository`.

use crate::error::AppError;
use crate::model::{Blog, BlogPayload};
use crate::repository::BlogRepository;
use std::sync::Arc;

/// Handlers depend on this type rather than on a repository, leaving room for business rules.
#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        BlogService { repo }
    }

    pub async fn create_blog(&self, payload: &BlogPayload) -> Result<Blog, AppError> {
        self.repo.create(payload).await
    }

    pub async fn get_blog_by_id(&self, id: i64) -> Result<Blog, AppError> {
        self.repo.get_by_id(id).await
    }

    pub async fn get_all_blogs(&self, term: &str) -> Result<Vec<Blog>, AppError> {
        self.repo.get_all(term).await
    }

    pub async fn update_blog(&self, id: i64, payload: &BlogPayload) -> Result<Blog, AppError> {
        self.repo.update(id, payload).await
    }

    pub async fn delete_blog(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.repo.ping().await
    }
}
