use anyhow::Context as _;
use sea_orm::Database;
use tracing::{info, warn};

use collab_core::config::Config;
use collab_core::tracing::init_tracing;
use collab_dashboard::config::DashboardConfig;
use collab_dashboard::router::build_router;
use collab_dashboard::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DashboardConfig::try_from_env().context("load dashboard config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    if config.sample_data_fallback {
        warn!("SAMPLE_DATA_FALLBACK=true: empty member queries are answered with sample data");
    }

    let state = AppState {
        db,
        sample_data_fallback: config.sample_data_fallback,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.dashboard_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("dashboard service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
