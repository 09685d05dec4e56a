use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbActivityRepository, DbCreatorRepository, DbMissionRepository, DbPaymentRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub sample_data_fallback: bool,
}

impl AppState {
    pub fn creator_repo(&self) -> DbCreatorRepository {
        DbCreatorRepository {
            db: self.db.clone(),
        }
    }

    pub fn mission_repo(&self) -> DbMissionRepository {
        DbMissionRepository {
            db: self.db.clone(),
        }
    }

    pub fn payment_repo(&self) -> DbPaymentRepository {
        DbPaymentRepository {
            db: self.db.clone(),
        }
    }

    pub fn activity_repo(&self) -> DbActivityRepository {
        DbActivityRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
