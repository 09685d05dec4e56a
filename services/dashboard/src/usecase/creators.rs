use crate::domain::repository::CreatorRepository;
use crate::domain::types::{Creator, RECOMMENDED_CREATORS_LIMIT, Sourced};
use crate::error::DashboardServiceError;
use crate::usecase::sample::{self, live_or_sample};

pub struct RecommendCreatorsUseCase<R: CreatorRepository> {
    pub creators: R,
    pub sample_fallback: bool,
}

impl<R: CreatorRepository> RecommendCreatorsUseCase<R> {
    pub async fn execute(
        &self,
        category: &str,
    ) -> Result<Sourced<Vec<Creator>>, DashboardServiceError> {
        let category = category.trim().to_lowercase();
        if category.is_empty() {
            return Err(DashboardServiceError::MissingData);
        }
        let rows = self
            .creators
            .recommended(&category, RECOMMENDED_CREATORS_LIMIT)
            .await?;
        Ok(live_or_sample(
            rows,
            self.sample_fallback,
            "recommended_creators",
            sample::creators,
        ))
    }
}
