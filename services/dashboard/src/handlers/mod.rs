pub mod admin;
pub mod dashboard;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use collab_core::serde::{opt_to_rfc3339_ms, to_rfc3339_ms};
use collab_domain::mission::{MissionStatus, PaymentStatus};

use crate::domain::types::{
    Activity, BrandStats, Creator, CreatorStats, DataSource, Mission, MissionStats, Payment,
    Sourced, UserType,
};
use crate::error::DashboardServiceError;

/// Parse a raw query string with `serde_qs`; an absent query yields `T::default()`.
pub(crate) fn parse_query<T>(raw_query: Option<String>) -> Result<T, DashboardServiceError>
where
    T: DeserializeOwned + Default,
{
    let query = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|e| DashboardServiceError::InvalidQuery(e.to_string()))?
        .unwrap_or_default();
    Ok(query)
}

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub source: &'static str,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new<U: Into<T>>(items: Vec<U>, source: DataSource) -> Self {
        Self {
            success: true,
            source: source.as_str(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn sourced<U: Into<T>>(sourced: Sourced<Vec<U>>) -> Self {
        Self::new(sourced.data, sourced.source)
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub source: &'static str,
    pub user_type: &'static str,
    pub stats: StatsView,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatsView {
    Brand(BrandStatsView),
    Creator(CreatorStatsView),
}

#[derive(Debug, Serialize)]
pub struct MissionCountsView {
    pub total_missions: u64,
    pub pending_missions: u64,
    pub in_progress_missions: u64,
    pub completed_missions: u64,
    pub cancelled_missions: u64,
}

impl From<MissionStats> for MissionCountsView {
    fn from(stats: MissionStats) -> Self {
        Self {
            total_missions: stats.total,
            pending_missions: stats.pending,
            in_progress_missions: stats.in_progress,
            completed_missions: stats.completed,
            cancelled_missions: stats.cancelled,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BrandStatsView {
    #[serde(flatten)]
    pub missions: MissionCountsView,
    pub total_creators: u64,
}

/// Rates are whole percentages, `null` when there is nothing to rate yet.
#[derive(Debug, Serialize)]
pub struct CreatorStatsView {
    #[serde(flatten)]
    pub missions: MissionCountsView,
    pub total_earnings_cents: i64,
    pub average_rating: Option<f64>,
    pub completion_rate: Option<u32>,
    pub on_time_delivery_rate: Option<u32>,
}

impl From<Sourced<BrandStats>> for StatsResponse {
    fn from(sourced: Sourced<BrandStats>) -> Self {
        let stats = sourced.data;
        Self {
            success: true,
            source: sourced.source.as_str(),
            user_type: UserType::Brand.as_str(),
            stats: StatsView::Brand(BrandStatsView {
                missions: stats.missions.into(),
                total_creators: stats.total_creators,
            }),
        }
    }
}

impl From<Sourced<CreatorStats>> for StatsResponse {
    fn from(sourced: Sourced<CreatorStats>) -> Self {
        let stats = sourced.data;
        Self {
            success: true,
            source: sourced.source.as_str(),
            user_type: UserType::Creator.as_str(),
            stats: StatsView::Creator(CreatorStatsView {
                missions: stats.missions.into(),
                total_earnings_cents: stats.total_earnings_cents,
                average_rating: stats.average_rating,
                completion_rate: stats.completion_rate,
                on_time_delivery_rate: stats.on_time_delivery_rate,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatorView {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub categories: Vec<String>,
    pub bio: String,
    pub photo_url: String,
    pub rating: f64,
}

impl From<Creator> for CreatorView {
    fn from(c: Creator) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            email: c.email,
            categories: c.categories,
            bio: c.bio,
            photo_url: c.photo_url,
            rating: c.rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MissionView {
    pub id: Uuid,
    pub title: String,
    pub kind: String,
    pub brand_id: Uuid,
    pub brand_name: String,
    pub assigned_creator_ids: Vec<Uuid>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub deadline: DateTime<Utc>,
    pub budget: i64,
    pub status: MissionStatus,
    #[serde(serialize_with = "opt_to_rfc3339_ms")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Mission> for MissionView {
    fn from(m: Mission) -> Self {
        Self {
            id: m.id,
            title: m.title,
            kind: m.kind,
            brand_id: m.brand_id,
            brand_name: m.brand_name,
            assigned_creator_ids: m.assigned_creator_ids,
            deadline: m.deadline,
            budget: m.budget,
            status: m.status,
            completed_at: m.completed_at,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentView {
    pub id: Uuid,
    pub mission_id: Uuid,
    pub creator_id: Uuid,
    pub brand_id: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PaymentStatus,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentView {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            mission_id: p.mission_id,
            creator_id: p.creator_id,
            brand_id: p.brand_id,
            amount_cents: p.amount_cents,
            currency: p.currency,
            status: p.status,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
}

impl From<Activity> for ActivityView {
    fn from(a: Activity) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            title: a.title,
            description: a.description,
            timestamp: a.occurred_at,
        }
    }
}
