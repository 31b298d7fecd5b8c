//! CORS layer from configuration.

use crate::config::CorsSettings;
use crate::error::AppError;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn create_cors(settings: &CorsSettings) -> Result<CorsLayer, AppError> {
    let headers = settings
        .allowed_headers
        .iter()
        .map(|h| {
            HeaderName::try_from(h.trim())
                .map_err(|_| AppError::Config(format!("invalid cors header: {}", h)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let origin = if settings.allowed_origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        let origins = settings
            .allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o.trim())
                    .map_err(|_| AppError::Config(format!("invalid cors origin: {}", o)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(headers)
        .allow_origin(origin)
        .allow_credentials(true);
    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_header_names() {
        let settings = CorsSettings {
            allowed_headers: vec!["bad header".into()],
            allowed_origins: vec![],
        };
        assert!(matches!(create_cors(&settings), Err(AppError::Config(_))));
    }

    #[test]
    fn accepts_explicit_origins() {
        let settings = CorsSettings {
            allowed_headers: vec!["Origin".into(), "Content-Type".into()],
            allowed_origins: vec!["https://example.com".into()],
        };
        assert!(create_cors(&settings).is_ok());
    }
}
