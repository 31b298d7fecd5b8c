//! Shared application state for all routes.

use crate::repository::BlogRepository;
use crate::service::BlogService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub blogs: BlogService,
}

impl AppState {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        AppState {
            blogs: BlogService::new(repo),
        }
    }
}
