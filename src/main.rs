//! Server binary: load config, open storage, serve the blog API until Ctrl-C or SIGTERM.

use blog_api::{
    app_router, connect, ensure_database_exists, ensure_schema, telemetry, AppConfig, AppState,
    BlogRepository, InMemoryBlogRepository, PgBlogRepository,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;
    telemetry::init_tracing(!config.is_development());
    tracing::info!(environment = %config.environment, "loaded config");

    let repo: Arc<dyn BlogRepository> = if config.database.in_memory {
        tracing::warn!("database.in_memory is set; data will not survive a restart");
        Arc::new(InMemoryBlogRepository::new())
    } else {
        let database_url = config.require_database_url()?;
        ensure_database_exists(database_url).await?;
        let pool = connect(database_url, &config.database).await?;
        ensure_schema(&pool).await?;
        tracing::info!("database initialized");
        Arc::new(PgBlogRepository::new(pool))
    };

    let app = app_router(AppState::new(repo), &config)?;

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
