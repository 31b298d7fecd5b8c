//! Blog API: CRUD over blog posts, layered as handlers -> service -> repository.

pub mod config;
pub mod cors;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
pub use model::{Blog, BlogPayload};
pub use repository::{BlogRepository, InMemoryBlogRepository, PgBlogRepository};
pub use routes::{app_router, blog_routes, common_routes_with_ready, API_PREFIX};
pub use service::{BlogService, RequestValidator};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_schema};
