use axum::{Json, extract::State};
use serde::Deserialize;

use collab_auth_types::identity::IdentityHeaders;

use crate::domain::types::ProfileUpdate;
use crate::error::AuthServiceError;
use crate::handlers::{AccountView, AuthResponse};
use crate::state::AppState;
use crate::usecase::profile::{CompleteProfileUseCase, GetProfileUseCase};

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    State(state): State<AppState>,
    identity: IdentityHeaders,
) -> Result<Json<AccountView>, AuthServiceError> {
    let usecase = GetProfileUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase.execute(identity.user_id).await?;
    Ok(Json(account.into()))
}

// ── PUT /users/@me/profile ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CompleteProfileRequest {
    pub display_name: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub location: String,
}

pub async fn complete_profile(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(body): Json<CompleteProfileRequest>,
) -> Result<Json<AuthResponse>, AuthServiceError> {
    let usecase = CompleteProfileUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase
        .execute(
            identity.user_id,
            ProfileUpdate {
                display_name: body.display_name,
                first_name: body.first_name,
                last_name: body.last_name,
                phone_number: body.phone_number,
                address: body.address,
                location: body.location,
            },
        )
        .await?;
    Ok(Json(AuthResponse {
        user: Some(account.into()),
        ..AuthResponse::ok()
    }))
}
