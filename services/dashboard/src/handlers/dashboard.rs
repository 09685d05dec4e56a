use axum::{
    Json,
    extract::{RawQuery, State},
};
use serde::Deserialize;
use uuid::Uuid;

use collab_auth_types::identity::IdentityHeaders;
use collab_domain::pagination::PageRequest;

use crate::domain::types::UserType;
use crate::error::DashboardServiceError;
use crate::handlers::{
    ActivityView, CreatorView, ListResponse, MissionView, PaymentView, StatsResponse, parse_query,
};
use crate::state::AppState;
use crate::usecase::activities::RecentActivitiesUseCase;
use crate::usecase::creators::RecommendCreatorsUseCase;
use crate::usecase::missions::{AssignedMissionsUseCase, BrandMissionsUseCase};
use crate::usecase::payments::PartyPaymentsUseCase;
use crate::usecase::stats::{BrandStatsUseCase, CreatorStatsUseCase};

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct BrandMissionsQuery {
    /// Defaults to the caller.
    pub brand_id: Option<Uuid>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct CreatorsQuery {
    pub category: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PageQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest {
            per_page: self.per_page.unwrap_or(defaults.per_page),
            page: self.page.unwrap_or(defaults.page),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct StatsQuery {
    /// `brand` (default) or `creator`.
    pub user_type: Option<String>,
}

impl StatsQuery {
    pub fn user_type(&self) -> Result<UserType, DashboardServiceError> {
        match self.user_type.as_deref() {
            None => Ok(UserType::default()),
            Some(raw) => UserType::parse(raw).ok_or_else(|| {
                DashboardServiceError::InvalidQuery(format!("unknown user type {raw:?}"))
            }),
        }
    }
}

// ── GET /dashboard/missions ──────────────────────────────────────────────────

pub async fn get_brand_missions(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<ListResponse<MissionView>>, DashboardServiceError> {
    let query: BrandMissionsQuery = parse_query(raw_query)?;
    let usecase = BrandMissionsUseCase {
        missions: state.mission_repo(),
        sample_fallback: state.sample_data_fallback,
    };
    let missions = usecase
        .execute(query.brand_id.unwrap_or(identity.user_id))
        .await?;
    Ok(Json(ListResponse::sourced(missions)))
}

// ── GET /dashboard/missions/assigned ─────────────────────────────────────────

pub async fn get_assigned_missions(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<ListResponse<MissionView>>, DashboardServiceError> {
    let usecase = AssignedMissionsUseCase {
        missions: state.mission_repo(),
        sample_fallback: state.sample_data_fallback,
    };
    let missions = usecase.execute(identity.user_id).await?;
    Ok(Json(ListResponse::sourced(missions)))
}

// ── GET /dashboard/creators ──────────────────────────────────────────────────

pub async fn get_recommended_creators(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<ListResponse<CreatorView>>, DashboardServiceError> {
    let query: CreatorsQuery = parse_query(raw_query)?;
    let category = query.category.ok_or(DashboardServiceError::MissingData)?;
    let usecase = RecommendCreatorsUseCase {
        creators: state.creator_repo(),
        sample_fallback: state.sample_data_fallback,
    };
    let creators = usecase.execute(&category).await?;
    Ok(Json(ListResponse::sourced(creators)))
}

// ── GET /dashboard/payments ──────────────────────────────────────────────────

pub async fn get_payments(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<ListResponse<PaymentView>>, DashboardServiceError> {
    let query: PageQuery = parse_query(raw_query)?;
    let usecase = PartyPaymentsUseCase {
        payments: state.payment_repo(),
        sample_fallback: state.sample_data_fallback,
    };
    let payments = usecase
        .execute(identity.user_id, query.page_request())
        .await?;
    Ok(Json(ListResponse::sourced(payments)))
}

// ── GET /dashboard/stats ─────────────────────────────────────────────────────

pub async fn get_stats(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<StatsResponse>, DashboardServiceError> {
    let query: StatsQuery = parse_query(raw_query)?;
    let response: StatsResponse = match query.user_type()? {
        UserType::Brand => {
            let usecase = BrandStatsUseCase {
                missions: state.mission_repo(),
                sample_fallback: state.sample_data_fallback,
            };
            usecase.execute(identity.user_id).await?.into()
        }
        UserType::Creator => {
            let usecase = CreatorStatsUseCase {
                missions: state.mission_repo(),
                payments: state.payment_repo(),
                creators: state.creator_repo(),
                sample_fallback: state.sample_data_fallback,
            };
            usecase.execute(identity.user_id).await?.into()
        }
    };
    Ok(Json(response))
}

// ── GET /dashboard/activities ────────────────────────────────────────────────

pub async fn get_activities(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<ListResponse<ActivityView>>, DashboardServiceError> {
    let usecase = RecentActivitiesUseCase {
        activities: state.activity_repo(),
        sample_fallback: state.sample_data_fallback,
    };
    let activities = usecase.execute(identity.user_id).await?;
    Ok(Json(ListResponse::sourced(activities)))
}
