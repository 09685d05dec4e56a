use chrono::Utc;
use uuid::Uuid;

use collab_domain::pagination::PageRequest;

use crate::domain::repository::PaymentRepository;
use crate::domain::types::{Payment, Sourced};
use crate::error::DashboardServiceError;
use crate::usecase::sample::{self, live_or_sample};

pub struct PartyPaymentsUseCase<R: PaymentRepository> {
    pub payments: R,
    pub sample_fallback: bool,
}

impl<R: PaymentRepository> PartyPaymentsUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Sourced<Vec<Payment>>, DashboardServiceError> {
        let rows = self.payments.list_for_party(user_id, page).await?;
        // A later page running dry is not an empty store.
        let fallback = self.sample_fallback && page.clamped().page == 1;
        Ok(live_or_sample(rows, fallback, "party_payments", || {
            page.slice(&sample::payments(Utc::now()))
        }))
    }
}
