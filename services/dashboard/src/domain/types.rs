use chrono::{DateTime, Utc};
use uuid::Uuid;

use collab_domain::mission::{MissionStatus, PaymentStatus};

/// Upper bound on creators returned by a category recommendation.
pub const RECOMMENDED_CREATORS_LIMIT: u64 = 5;

/// Number of activities shown on the dashboard timeline.
pub const RECENT_ACTIVITIES_LIMIT: u64 = 10;

/// A creator profile as listed to brands.
#[derive(Debug, Clone, PartialEq)]
pub struct Creator {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub categories: Vec<String>,
    pub bio: String,
    pub photo_url: String,
    pub rating: f64,
}

/// A brand mission, optionally assigned to one or more creators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub id: Uuid,
    pub title: String,
    pub kind: String,
    pub brand_id: Uuid,
    pub brand_name: String,
    pub assigned_creator_ids: Vec<Uuid>,
    pub deadline: DateTime<Utc>,
    pub budget: i64,
    pub status: MissionStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: Uuid,
    pub mission_id: Uuid,
    pub creator_id: Uuid,
    pub brand_id: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Mission counts by status for one account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissionStats {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
}

impl MissionStats {
    pub fn from_counts(counts: impl IntoIterator<Item = (MissionStatus, u64)>) -> Self {
        let mut stats = Self::default();
        for (status, count) in counts {
            stats.total += count;
            match status {
                MissionStatus::Pending => stats.pending += count,
                MissionStatus::InProgress => stats.in_progress += count,
                MissionStatus::Completed => stats.completed += count,
                MissionStatus::Cancelled => stats.cancelled += count,
            }
        }
        stats
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of closed missions that were completed rather than cancelled.
    pub fn completion_rate(&self) -> Option<u32> {
        percent(self.completed, self.completed + self.cancelled)
    }
}

/// `part / whole` as a whole percentage, rounded half up. `None` when `whole` is 0.
pub fn percent(part: u64, whole: u64) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    u32::try_from((part * 100 + whole / 2) / whole).ok()
}

/// Which side of the marketplace a dashboard is rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserType {
    #[default]
    Brand,
    Creator,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Creator => "creator",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "brand" => Some(Self::Brand),
            "creator" => Some(Self::Creator),
            _ => None,
        }
    }
}

/// Dashboard figures for a brand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrandStats {
    pub missions: MissionStats,
    /// Distinct creators assigned across the brand's missions.
    pub total_creators: u64,
}

/// A completed mission's deadline and completion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub deadline: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl Delivery {
    pub fn is_on_time(&self) -> bool {
        self.completed_at <= self.deadline
    }
}

/// Dashboard figures for a creator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CreatorStats {
    pub missions: MissionStats,
    /// Sum of paid payments, in cents.
    pub total_earnings_cents: i64,
    /// From the creator profile; `None` without one.
    pub average_rating: Option<f64>,
    pub completion_rate: Option<u32>,
    pub on_time_delivery_rate: Option<u32>,
}

impl CreatorStats {
    pub fn new(
        missions: MissionStats,
        deliveries: &[Delivery],
        total_earnings_cents: i64,
        average_rating: Option<f64>,
    ) -> Self {
        let on_time = deliveries.iter().filter(|d| d.is_on_time()).count() as u64;
        Self {
            missions,
            total_earnings_cents,
            average_rating,
            completion_rate: missions.completion_rate(),
            on_time_delivery_rate: percent(on_time, deliveries.len() as u64),
        }
    }
}

/// Timeline entry on a user's dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
}

/// Where a dashboard response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    /// Built-in sample records served because the store had nothing to show.
    Sample,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Sample => "sample",
        }
    }
}

/// A query result tagged with its [`DataSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
        }
    }

    pub fn sample(data: T) -> Self {
        Self {
            data,
            source: DataSource::Sample,
        }
    }
}
