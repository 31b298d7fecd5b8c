//! Blog CRUD handlers: create, read, update, delete, list.

use crate::error::AppError;
use crate::extractors::{AppJson, AppQuery, BlogId};
use crate::model::BlogPayload;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub term: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let term = params.term.as_deref().map(str::trim).unwrap_or("");
    let blogs = state.blogs.get_all_blogs(term).await?;
    Ok((StatusCode::OK, Json(blogs)))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<BlogPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate(&body)?;
    let blog = state.blogs.create_blog(&body).await?;
    tracing::info!(id = blog.id, "blog created");
    Ok((StatusCode::CREATED, Json(blog)))
}

pub async fn read(
    State(state): State<AppState>,
    BlogId(id): BlogId,
) -> Result<impl IntoResponse, AppError> {
    let blog = state.blogs.get_blog_by_id(id).await?;
    Ok((StatusCode::OK, Json(blog)))
}

pub async fn update(
    State(state): State<AppState>,
    BlogId(id): BlogId,
    AppJson(body): AppJson<BlogPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate(&body)?;
    let blog = state.blogs.update_blog(id, &body).await?;
    tracing::info!(id, "blog updated");
    Ok((StatusCode::OK, Json(blog)))
}

pub async fn delete(
    State(state): State<AppState>,
    BlogId(id): BlogId,
) -> Result<impl IntoResponse, AppError> {
    state.blogs.delete_blog(id).await?;
    tracing::info!(id, "blog deleted");
    Ok(StatusCode::NO_CONTENT)
}
