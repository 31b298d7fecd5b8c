//! Blog CRUD routes under `/blogs`.

use crate::handlers::blog::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn blog_routes(state: AppState) -> Router {
    Router::new()
        .route("/blogs", get(list).post(create))
        .route("/blogs/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
