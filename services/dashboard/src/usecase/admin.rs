//! Unfiltered listings for the admin screens. No sample fallback: admins see
//! exactly what is stored.

use collab_domain::mission::{MissionStatus, PaymentStatus};
use collab_domain::pagination::PageRequest;

use crate::domain::repository::{CreatorRepository, MissionRepository, PaymentRepository};
use crate::domain::types::{Creator, Mission, Payment};
use crate::error::DashboardServiceError;

pub struct ListCreatorsUseCase<R: CreatorRepository> {
    pub creators: R,
}

impl<R: CreatorRepository> ListCreatorsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Creator>, DashboardServiceError> {
        self.creators.list(page).await
    }
}

pub struct ListMissionsUseCase<R: MissionRepository> {
    pub missions: R,
}

impl<R: MissionRepository> ListMissionsUseCase<R> {
    pub async fn execute(
        &self,
        status: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Mission>, DashboardServiceError> {
        let status = status
            .map(|s| {
                MissionStatus::parse(s).ok_or_else(|| {
                    DashboardServiceError::InvalidQuery(format!("unknown mission status {s:?}"))
                })
            })
            .transpose()?;
        self.missions.list(status, page).await
    }
}

pub struct ListPaymentsUseCase<R: PaymentRepository> {
    pub payments: R,
}

impl<R: PaymentRepository> ListPaymentsUseCase<R> {
    pub async fn execute(
        &self,
        status: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Payment>, DashboardServiceError> {
        let status = status
            .map(|s| {
                PaymentStatus::parse(s).ok_or_else(|| {
                    DashboardServiceError::InvalidQuery(format!("unknown payment status {s:?}"))
                })
            })
            .transpose()?;
        self.payments.list(status, page).await
    }
}
