//! Request extractors that report malformed input as `AppError::BadRequest`.

mod id;
mod json;
mod query;
pub use id::BlogId;
pub use json::AppJson;
pub use query::AppQuery;
