//! BlogService: orchestration between HTTP handlers and the repository.

mod blog;
mod validation;
pub use blog::BlogService;
pub use validation::RequestValidator;
