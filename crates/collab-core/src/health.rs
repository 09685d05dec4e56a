use anyhow::Context as _;
use axum::extract::State;
use axum::http::StatusCode;
use sea_orm::DatabaseConnection;

use crate::error::AppError;

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`: readiness check. Pings the database pool.
///
/// Service states expose their connection through `FromRef<AppState>`.
pub async fn readyz(State(db): State<DatabaseConnection>) -> Result<StatusCode, AppError> {
    db.ping().await.context("database ping")?;
    Ok(StatusCode::OK)
}
