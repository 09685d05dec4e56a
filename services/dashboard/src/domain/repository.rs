#![allow(async_fn_in_trait)]

use uuid::Uuid;

use collab_domain::mission::{MissionStatus, PaymentStatus};
use collab_domain::pagination::PageRequest;

use crate::domain::types::{Activity, Creator, Delivery, Mission, Payment, UserType};
use crate::error::DashboardServiceError;

pub trait CreatorRepository: Send + Sync {
    /// Up to `limit` creators listing `category`, in random order.
    async fn recommended(
        &self,
        category: &str,
        limit: u64,
    ) -> Result<Vec<Creator>, DashboardServiceError>;

    /// All creators, by name.
    async fn list(&self, page: PageRequest) -> Result<Vec<Creator>, DashboardServiceError>;

    /// The creator profile linked to an account, if any.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Creator>, DashboardServiceError>;
}

pub trait MissionRepository: Send + Sync {
    /// Missions owned by a brand, newest first.
    async fn list_by_brand(&self, brand_id: Uuid) -> Result<Vec<Mission>, DashboardServiceError>;

    /// Missions assigned to a creator, soonest deadline first.
    async fn list_assigned(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<Mission>, DashboardServiceError>;

    /// Per-status mission counts for missions the account owns (`Brand`) or is
    /// assigned to (`Creator`).
    async fn count_by_status(
        &self,
        user_id: Uuid,
        user_type: UserType,
    ) -> Result<Vec<(MissionStatus, u64)>, DashboardServiceError>;

    /// Number of distinct creators assigned across a brand's missions.
    async fn count_assigned_creators(&self, brand_id: Uuid) -> Result<u64, DashboardServiceError>;

    /// Completed missions assigned to a creator that record a completion time.
    async fn deliveries(&self, creator_id: Uuid) -> Result<Vec<Delivery>, DashboardServiceError>;

    /// All missions, newest first, optionally narrowed to one status.
    async fn list(
        &self,
        status: Option<MissionStatus>,
        page: PageRequest,
    ) -> Result<Vec<Mission>, DashboardServiceError>;
}

pub trait PaymentRepository: Send + Sync {
    /// Payments where the account is the paying brand or the paid creator, newest first.
    async fn list_for_party(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Payment>, DashboardServiceError>;

    /// All payments, newest first, optionally narrowed to one status.
    async fn list(
        &self,
        status: Option<PaymentStatus>,
        page: PageRequest,
    ) -> Result<Vec<Payment>, DashboardServiceError>;

    /// Sum in cents of the `paid` payments received by a creator.
    async fn total_paid_to(&self, creator_id: Uuid) -> Result<i64, DashboardServiceError>;
}

pub trait ActivityRepository: Send + Sync {
    /// Up to `limit` of the account's activities, newest first.
    async fn recent(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Activity>, DashboardServiceError>;
}
