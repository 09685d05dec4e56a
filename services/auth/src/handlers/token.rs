use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use collab_auth_types::{
    cookie::{
        COLLAB_ACCESS_TOKEN, COLLAB_REFRESH_TOKEN, clear_cookies, set_access_token_cookie,
        set_refresh_token_cookie,
    },
    token::validate_access_token,
};

use crate::error::AuthServiceError;
use crate::handlers::token_expires_headers;
use crate::state::AppState;
use crate::usecase::token::RefreshTokenUseCase;

// ── GET /auth/token ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CheckTokenQuery {
    pub role: Option<u8>,
}

#[derive(Serialize)]
pub struct CheckTokenResponse {
    pub user_id: uuid::Uuid,
    pub user_role: u8,
    pub access_token_exp: u64,
}

/// Called by the gateway to turn the access cookie into identity headers.
pub async fn check_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CheckTokenQuery>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let token_value = jar
        .get(COLLAB_ACCESS_TOKEN)
        .map(|c| c.value().to_owned())
        .ok_or(AuthServiceError::InvalidToken)?;

    let info = validate_access_token(&token_value, &state.jwt_secret)
        .map_err(|_| AuthServiceError::InvalidToken)?;

    if let Some(min_role) = query.role {
        if info.user_role < min_role {
            return Err(AuthServiceError::InvalidToken);
        }
    }

    let body = CheckTokenResponse {
        user_id: info.user_id,
        user_role: info.user_role,
        access_token_exp: info.access_token_exp,
    };
    Ok((
        StatusCode::OK,
        token_expires_headers(info.access_token_exp),
        Json(body),
    ))
}

// ── PATCH /auth/token ────────────────────────────────────────────────────────

pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthServiceError> {
    let refresh_value = jar
        .get(COLLAB_REFRESH_TOKEN)
        .map(|c| c.value().to_owned())
        .ok_or(AuthServiceError::InvalidRefreshToken)?;

    let usecase = RefreshTokenUseCase {
        accounts: state.account_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(&refresh_value).await?;

    let session = out.session;
    let jar = set_access_token_cookie(jar, session.access_token, state.cookie_domain.clone());
    let jar = set_refresh_token_cookie(jar, session.refresh_token, state.cookie_domain.clone());

    Ok((
        StatusCode::CREATED,
        jar,
        token_expires_headers(session.access_token_exp),
    ))
}

// ── DELETE /auth/token ───────────────────────────────────────────────────────

/// Sign out. Cookies are cleared whether or not they were valid.
pub async fn revoke_token(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_cookies(jar, state.cookie_domain.clone());
    (StatusCode::NO_CONTENT, jar)
}
