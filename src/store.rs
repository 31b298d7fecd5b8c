//! Database bootstrap: create the database if missing, open the pool, and create the `blogs` table.

use crate::config::DatabaseSettings;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// `tags` is a native array so tag values may contain any character, commas included.
const BLOGS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS blogs (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    category TEXT NOT NULL,
    tags TEXT[] NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT blogs_tags_not_empty CHECK (cardinality(tags) > 0),
    CONSTRAINT blogs_timestamps_ordered CHECK (created_at <= updated_at)
)
"#;

/// Create the `blogs` table if it does not exist. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(BLOGS_DDL).execute(pool).await?;
    Ok(())
}

/// Open a pool whose connections carry a server-side statement timeout.
pub async fn connect(database_url: &str, settings: &DatabaseSettings) -> Result<PgPool, AppError> {
    let timeout_ms = statement_timeout_ms(settings.statement_timeout_secs);
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Config(format!("invalid DATABASE_URL: {}", e)))?
        .options([("statement_timeout", timeout_ms.as_str())]);
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Connects to the `postgres` maintenance database and creates the target database when absent.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Config(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Milliseconds for `statement_timeout`; saturates instead of overflowing on absurd settings.
fn statement_timeout_ms(secs: u64) -> String {
    secs.saturating_mul(1000).to_string()
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| AppError::Config("DATABASE_URL: no database path".into()))?;
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
