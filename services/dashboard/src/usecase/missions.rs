use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::MissionRepository;
use crate::domain::types::{Mission, Sourced};
use crate::error::DashboardServiceError;
use crate::usecase::sample::{self, live_or_sample};

// ── BrandMissions ────────────────────────────────────────────────────────────

pub struct BrandMissionsUseCase<R: MissionRepository> {
    pub missions: R,
    pub sample_fallback: bool,
}

impl<R: MissionRepository> BrandMissionsUseCase<R> {
    pub async fn execute(
        &self,
        brand_id: Uuid,
    ) -> Result<Sourced<Vec<Mission>>, DashboardServiceError> {
        let rows = self.missions.list_by_brand(brand_id).await?;
        Ok(live_or_sample(rows, self.sample_fallback, "brand_missions", || {
            sample::missions(Utc::now())
        }))
    }
}

// ── AssignedMissions ─────────────────────────────────────────────────────────

pub struct AssignedMissionsUseCase<R: MissionRepository> {
    pub missions: R,
    pub sample_fallback: bool,
}

impl<R: MissionRepository> AssignedMissionsUseCase<R> {
    pub async fn execute(
        &self,
        creator_id: Uuid,
    ) -> Result<Sourced<Vec<Mission>>, DashboardServiceError> {
        let rows = self.missions.list_assigned(creator_id).await?;
        Ok(live_or_sample(rows, self.sample_fallback, "assigned_missions", || {
            sample::missions_by_deadline(Utc::now())
        }))
    }
}
