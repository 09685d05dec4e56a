pub mod profile;
pub mod session;
pub mod token;
pub mod verification;

use axum::Json;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use collab_auth_types::cookie::{set_access_token_cookie, set_refresh_token_cookie};
use collab_core::serde::to_rfc3339_ms;
use collab_domain::user::{AuthProvider, SignInMethod};

use crate::domain::types::Account;
use crate::state::AppState;
use crate::usecase::code_login::SignedIn;

const X_COLLAB_ACCESS_TOKEN_EXPIRES: &str = "x-collab-access-token-expires";

pub(crate) fn token_expires_headers(exp: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(X_COLLAB_ACCESS_TOKEN_EXPIRES),
        HeaderValue::from(exp),
    );
    headers
}

/// Account as returned to clients. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct AccountView {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub location: String,
    pub photo_url: String,
    pub profile_complete: bool,
    pub auth_provider: AuthProvider,
    pub sign_in_methods: Vec<SignInMethod>,
    pub role: u8,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        let sign_in_methods = account.sign_in_methods();
        Self {
            id: account.id,
            email: account.email,
            display_name: account.display_name,
            first_name: account.first_name,
            last_name: account.last_name,
            phone_number: account.phone_number,
            address: account.address,
            location: account.location,
            photo_url: account.photo_url,
            profile_complete: account.profile_complete,
            auth_provider: account.auth_provider,
            sign_in_methods,
            role: account.role.as_u8(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Success body shared by the auth endpoints.
#[derive(Debug, Default, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_google_sign_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Issued code, only when code exposure is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }
}

/// Set session cookies and build the signed-in body.
pub(crate) fn signed_in_response(state: &AppState, jar: CookieJar, signed_in: SignedIn) -> Response {
    let session = signed_in.session;
    let jar = set_access_token_cookie(jar, session.access_token, state.cookie_domain.clone());
    let jar = set_refresh_token_cookie(jar, session.refresh_token, state.cookie_domain.clone());
    let body = AuthResponse {
        valid: Some(true),
        user: Some(signed_in.account.into()),
        is_new_user: Some(signed_in.is_new_user),
        ..AuthResponse::ok()
    };
    (
        jar,
        token_expires_headers(session.access_token_exp),
        Json(body),
    )
        .into_response()
}
