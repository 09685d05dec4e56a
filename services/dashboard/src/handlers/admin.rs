use axum::{
    Json,
    extract::{RawQuery, State},
};
use serde::Deserialize;

use collab_auth_types::identity::IdentityHeaders;
use collab_domain::user::UserRole;

use crate::domain::types::DataSource;
use crate::error::DashboardServiceError;
use crate::handlers::dashboard::PageQuery;
use crate::handlers::{CreatorView, ListResponse, MissionView, PaymentView, parse_query};
use crate::state::AppState;
use crate::usecase::admin::{ListCreatorsUseCase, ListMissionsUseCase, ListPaymentsUseCase};

fn require_admin(identity: &IdentityHeaders) -> Result<(), DashboardServiceError> {
    if identity.has_role_at_least(UserRole::Admin.as_u8()) {
        Ok(())
    } else {
        Err(DashboardServiceError::Forbidden)
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AdminListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub status: Option<String>,
}

impl AdminListQuery {
    fn page_query(&self) -> PageQuery {
        PageQuery {
            per_page: self.per_page,
            page: self.page,
        }
    }
}

// ── GET /admin/creators ──────────────────────────────────────────────────────

pub async fn list_creators(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<ListResponse<CreatorView>>, DashboardServiceError> {
    require_admin(&identity)?;
    let query: PageQuery = parse_query(raw_query)?;
    let usecase = ListCreatorsUseCase {
        creators: state.creator_repo(),
    };
    let creators = usecase.execute(query.page_request()).await?;
    Ok(Json(ListResponse::new(creators, DataSource::Live)))
}

// ── GET /admin/missions ──────────────────────────────────────────────────────

pub async fn list_missions(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<ListResponse<MissionView>>, DashboardServiceError> {
    require_admin(&identity)?;
    let query: AdminListQuery = parse_query(raw_query)?;
    let usecase = ListMissionsUseCase {
        missions: state.mission_repo(),
    };
    let missions = usecase
        .execute(query.status.as_deref(), query.page_query().page_request())
        .await?;
    Ok(Json(ListResponse::new(missions, DataSource::Live)))
}

// ── GET /admin/payments ──────────────────────────────────────────────────────

pub async fn list_payments(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<ListResponse<PaymentView>>, DashboardServiceError> {
    require_admin(&identity)?;
    let query: AdminListQuery = parse_query(raw_query)?;
    let usecase = ListPaymentsUseCase {
        payments: state.payment_repo(),
    };
    let payments = usecase
        .execute(query.status.as_deref(), query.page_query().page_request())
        .await?;
    Ok(Json(ListResponse::new(payments, DataSource::Live)))
}
