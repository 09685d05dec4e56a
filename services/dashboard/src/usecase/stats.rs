use tracing::info;
use uuid::Uuid;

use crate::domain::repository::{CreatorRepository, MissionRepository, PaymentRepository};
use crate::domain::types::{BrandStats, CreatorStats, MissionStats, Sourced, UserType};
use crate::error::DashboardServiceError;
use crate::usecase::sample;

// ── BrandStats ───────────────────────────────────────────────────────────────

pub struct BrandStatsUseCase<M: MissionRepository> {
    pub missions: M,
    pub sample_fallback: bool,
}

impl<M: MissionRepository> BrandStatsUseCase<M> {
    pub async fn execute(
        &self,
        brand_id: Uuid,
    ) -> Result<Sourced<BrandStats>, DashboardServiceError> {
        let counts = self
            .missions
            .count_by_status(brand_id, UserType::Brand)
            .await?;
        let missions = MissionStats::from_counts(counts);
        if missions.is_empty() && self.sample_fallback {
            info!(query = "brand_stats", "store returned no rows, serving sample data");
            return Ok(Sourced::sample(sample::brand_stats()));
        }

        let total_creators = self.missions.count_assigned_creators(brand_id).await?;
        Ok(Sourced::live(BrandStats {
            missions,
            total_creators,
        }))
    }
}

// ── CreatorStats ─────────────────────────────────────────────────────────────

pub struct CreatorStatsUseCase<M, P, C>
where
    M: MissionRepository,
    P: PaymentRepository,
    C: CreatorRepository,
{
    pub missions: M,
    pub payments: P,
    pub creators: C,
    pub sample_fallback: bool,
}

impl<M, P, C> CreatorStatsUseCase<M, P, C>
where
    M: MissionRepository,
    P: PaymentRepository,
    C: CreatorRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<Sourced<CreatorStats>, DashboardServiceError> {
        let counts = self
            .missions
            .count_by_status(user_id, UserType::Creator)
            .await?;
        let missions = MissionStats::from_counts(counts);
        if missions.is_empty() && self.sample_fallback {
            info!(query = "creator_stats", "store returned no rows, serving sample data");
            return Ok(Sourced::sample(sample::creator_stats()));
        }

        let deliveries = self.missions.deliveries(user_id).await?;
        let earnings = self.payments.total_paid_to(user_id).await?;
        let rating = self.creators.find_by_user(user_id).await?.map(|c| c.rating);
        Ok(Sourced::live(CreatorStats::new(
            missions,
            &deliveries,
            earnings,
            rating,
        )))
    }
}
