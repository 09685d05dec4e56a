use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::error::AuthServiceError;
use crate::handlers::signed_in_response;
use crate::state::AppState;
use crate::usecase::account::{
    GoogleSignInUseCase, PasswordLoginInput, PasswordLoginUseCase, RegisterInput,
    RegisterUseCase,
};

// ── POST /auth/register ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<RegisterRequest>,
) -> Result<Response, AuthServiceError> {
    let usecase = RegisterUseCase {
        accounts: state.account_repo(),
        hasher: state.hasher(),
        clock: state.clock(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let signed_in = usecase
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        signed_in_response(&state, jar, signed_in),
    )
        .into_response())
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PasswordLoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<PasswordLoginRequest>,
) -> Result<Response, AuthServiceError> {
    let usecase = PasswordLoginUseCase {
        accounts: state.account_repo(),
        hasher: state.hasher(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let signed_in = usecase
        .execute(PasswordLoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(signed_in_response(&state, jar, signed_in))
}

// ── POST /auth/google ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GoogleSignInRequest {
    #[serde(alias = "idToken")]
    pub id_token: String,
}

pub async fn google_sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<GoogleSignInRequest>,
) -> Result<Response, AuthServiceError> {
    let google = state
        .google
        .clone()
        .ok_or(AuthServiceError::GoogleSignInDisabled)?;
    let usecase = GoogleSignInUseCase {
        accounts: state.account_repo(),
        google,
        clock: state.clock(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let signed_in = usecase.execute(&body.id_token).await?;
    Ok(signed_in_response(&state, jar, signed_in))
}
