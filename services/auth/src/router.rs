use axum::{
    Router,
    routing::{get, post, put},
};

use collab_core::health::{healthz, readyz};
use collab_core::middleware::with_observability;

use crate::handlers::{
    profile::{complete_profile, get_me},
    session::{google_sign_in, login, register},
    token::{check_token, refresh_token, revoke_token},
    verification::{
        issue_login_code, issue_reset_code, verify_and_reset_password, verify_and_sign_in,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Verification codes
        .route("/auth/code/login", post(issue_login_code))
        .route("/auth/code/reset", post(issue_reset_code))
        .route("/auth/code/login/verify", post(verify_and_sign_in))
        .route("/auth/password/reset", post(verify_and_reset_password))
        // Password / Google sign-in
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/google", post(google_sign_in))
        // Token
        .route(
            "/auth/token",
            get(check_token).patch(refresh_token).delete(revoke_token),
        )
        // Profile
        .route("/users/@me", get(get_me))
        .route("/users/@me/profile", put(complete_profile))
        .with_state(state);
    with_observability(router)
}
