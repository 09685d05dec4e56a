use serde::Deserialize;

use collab_core::config::Config;

/// Dashboard service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct DashboardConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on. Env var: `DASHBOARD_PORT`.
    #[serde(default = "default_dashboard_port")]
    pub dashboard_port: u16,
    /// Serve built-in sample records when a member query comes back empty.
    #[serde(default = "default_sample_data_fallback")]
    pub sample_data_fallback: bool,
}

impl Config for DashboardConfig {}

fn default_dashboard_port() -> u16 {
    3113
}

fn default_sample_data_fallback() -> bool {
    true
}
