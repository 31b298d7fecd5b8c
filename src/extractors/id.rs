//! Extract the blog id from the `{id}` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogId(pub i64);

impl std::str::FromStr for BlogId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(n) if n > 0 => Ok(BlogId(n)),
            _ => Err(AppError::BadRequest(format!("invalid id: {}", s))),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BlogId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        assert_eq!("7".parse::<BlogId>().unwrap(), BlogId(7));
    }

    #[test]
    fn rejects_non_numeric_zero_and_negative() {
        for raw in ["abc", "0", "-3", "1.5", ""] {
            assert!(matches!(raw.parse::<BlogId>(), Err(AppError::BadRequest(_))), "{raw}");
        }
    }
}
