use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::domain::types::CodePurpose;
use crate::error::AuthServiceError;
use crate::handlers::{AuthResponse, signed_in_response};
use crate::state::AppState;
use crate::usecase::code_login::{CodeLoginInput, CodeLoginOutcome, CodeLoginUseCase};
use crate::usecase::password_reset::{
    ResetPasswordInput, ResetPasswordOutcome, ResetPasswordUseCase,
};
use crate::usecase::verification::{IssueCodeInput, IssueCodeUseCase};

// ── POST /auth/code/login, POST /auth/code/reset ─────────────────────────────

#[derive(Deserialize)]
pub struct IssueCodeRequest {
    pub email: String,
}

async fn issue(
    state: &AppState,
    email: String,
    purpose: CodePurpose,
) -> Result<Json<AuthResponse>, AuthServiceError> {
    let usecase = IssueCodeUseCase {
        codes: state.code_repo(),
        mailer: state.mailer.clone(),
        clock: state.clock(),
    };
    let issued = usecase.execute(IssueCodeInput { email, purpose }).await?;

    Ok(Json(AuthResponse {
        message: Some("verification code sent".to_owned()),
        expires_at: Some(issued.expires_at),
        code: state.expose_codes.then_some(issued.code),
        ..AuthResponse::ok()
    }))
}

pub async fn issue_login_code(
    State(state): State<AppState>,
    Json(body): Json<IssueCodeRequest>,
) -> Result<Json<AuthResponse>, AuthServiceError> {
    issue(&state, body.email, CodePurpose::Login).await
}

pub async fn issue_reset_code(
    State(state): State<AppState>,
    Json(body): Json<IssueCodeRequest>,
) -> Result<Json<AuthResponse>, AuthServiceError> {
    issue(&state, body.email, CodePurpose::PasswordReset).await
}

// ── POST /auth/code/login/verify ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

pub async fn verify_and_sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeRequest>,
) -> Result<Response, AuthServiceError> {
    let usecase = CodeLoginUseCase {
        accounts: state.account_repo(),
        codes: state.code_repo(),
        hasher: state.hasher(),
        clock: state.clock(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let outcome = usecase
        .execute(CodeLoginInput {
            email: body.email,
            code: body.code,
        })
        .await?;

    let response = match outcome {
        CodeLoginOutcome::SignedIn(signed_in) => signed_in_response(&state, jar, *signed_in),
        CodeLoginOutcome::RequiresGoogleSignIn { .. } => Json(AuthResponse {
            valid: Some(true),
            requires_google_sign_in: Some(true),
            message: Some("this account signs in with Google".to_owned()),
            ..AuthResponse::ok()
        })
        .into_response(),
        CodeLoginOutcome::Rejected(reason) => Json(AuthResponse {
            valid: Some(false),
            message: Some(reason.message().to_owned()),
            ..AuthResponse::ok()
        })
        .into_response(),
    };
    Ok(response)
}

// ── POST /auth/password/reset ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    #[serde(alias = "newPassword")]
    pub new_password: String,
}

pub async fn verify_and_reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Json<AuthResponse>, AuthServiceError> {
    let usecase = ResetPasswordUseCase {
        accounts: state.account_repo(),
        codes: state.code_repo(),
        hasher: state.hasher(),
        clock: state.clock(),
    };
    let outcome = usecase
        .execute(ResetPasswordInput {
            email: body.email,
            code: body.code,
            new_password: body.new_password,
        })
        .await?;

    let body = match outcome {
        ResetPasswordOutcome::Reset => AuthResponse {
            valid: Some(true),
            message: Some("password updated".to_owned()),
            ..AuthResponse::ok()
        },
        ResetPasswordOutcome::Rejected(reason) => AuthResponse {
            valid: Some(false),
            message: Some(reason.message().to_owned()),
            ..AuthResponse::ok()
        },
    };
    Ok(Json(body))
}
