use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ActivityRepository;
use crate::domain::types::{Activity, RECENT_ACTIVITIES_LIMIT, Sourced};
use crate::error::DashboardServiceError;
use crate::usecase::sample::{self, live_or_sample};

pub struct RecentActivitiesUseCase<R: ActivityRepository> {
    pub activities: R,
    pub sample_fallback: bool,
}

impl<R: ActivityRepository> RecentActivitiesUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<Sourced<Vec<Activity>>, DashboardServiceError> {
        let rows = self
            .activities
            .recent(user_id, RECENT_ACTIVITIES_LIMIT)
            .await?;
        Ok(live_or_sample(rows, self.sample_fallback, "recent_activities", || {
            sample::activities(user_id, Utc::now())
        }))
    }
}
