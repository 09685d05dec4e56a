use axum::{Router, routing::get};

use collab_core::health::{healthz, readyz};
use collab_core::middleware::with_observability;

use crate::handlers::{
    admin::{list_creators, list_missions, list_payments},
    dashboard::{
        get_activities, get_assigned_missions, get_brand_missions, get_payments,
        get_recommended_creators, get_stats,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Member dashboard
        .route("/dashboard/missions", get(get_brand_missions))
        .route("/dashboard/missions/assigned", get(get_assigned_missions))
        .route("/dashboard/creators", get(get_recommended_creators))
        .route("/dashboard/payments", get(get_payments))
        .route("/dashboard/stats", get(get_stats))
        .route("/dashboard/activities", get(get_activities))
        // Admin
        .route("/admin/creators", get(list_creators))
        .route("/admin/missions", get(list_missions))
        .route("/admin/payments", get(list_payments))
        .with_state(state);
    with_observability(router)
}
