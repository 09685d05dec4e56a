use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::domain::clock::SystemClock;
use crate::infra::db::{DbAccountRepository, DbVerificationCodeRepository};
use crate::infra::google::GoogleTokenInfoClient;
use crate::infra::mail::AppMailer;
use crate::infra::password::Argon2Hasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub cookie_domain: String,
    /// Echo issued codes in responses (non-production only).
    pub expose_codes: bool,
    pub mailer: AppMailer,
    /// `None` when Google sign-in is not configured.
    pub google: Option<GoogleTokenInfoClient>,
}

impl AppState {
    pub fn code_repo(&self) -> DbVerificationCodeRepository {
        DbVerificationCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn hasher(&self) -> Argon2Hasher {
        Argon2Hasher
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
