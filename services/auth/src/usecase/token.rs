use jsonwebtoken::{EncodingKey, Header, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use collab_auth_types::cookie::{ACCESS_TOKEN_EXP, REFRESH_TOKEN_EXP};
use collab_auth_types::token::{JwtClaims, TokenKind, validate_refresh_token};

use crate::domain::repository::AccountRepository;
use crate::domain::types::Account;
use crate::error::AuthServiceError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Access + refresh token pair handed out on every successful sign-in.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

fn sign(
    account: &Account,
    kind: TokenKind,
    ttl_secs: u64,
    secret: &str,
) -> Result<(String, u64), AuthServiceError> {
    let exp = now_secs() + ttl_secs;
    let claims = JwtClaims {
        sub: account.id.to_string(),
        role: account.role.as_u8(),
        typ: kind,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

/// Mint a fresh session for `account`.
pub fn issue_session(account: &Account, secret: &str) -> Result<SessionTokens, AuthServiceError> {
    let (access_token, access_token_exp) =
        sign(account, TokenKind::Access, ACCESS_TOKEN_EXP, secret)?;
    let (refresh_token, _) = sign(account, TokenKind::Refresh, REFRESH_TOKEN_EXP, secret)?;
    Ok(SessionTokens {
        access_token,
        access_token_exp,
        refresh_token,
    })
}

// ── RefreshToken ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct RefreshTokenOutput {
    pub user_id: Uuid,
    pub user_role: u8,
    pub session: SessionTokens,
}

pub struct RefreshTokenUseCase<A: AccountRepository> {
    pub accounts: A,
    pub jwt_secret: String,
}

impl<A: AccountRepository> RefreshTokenUseCase<A> {
    pub async fn execute(
        &self,
        refresh_token_value: &str,
    ) -> Result<RefreshTokenOutput, AuthServiceError> {
        // Refresh token must verify on its own; the access token may already be expired.
        let claims = validate_refresh_token(refresh_token_value, &self.jwt_secret)
            .map_err(|_| AuthServiceError::InvalidRefreshToken)?;

        let user_id = claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| AuthServiceError::InvalidRefreshToken)?;

        // Role is re-read so promotions and demotions apply at the next refresh.
        let account = self
            .accounts
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::InvalidRefreshToken)?;

        let session = issue_session(&account, &self.jwt_secret)?;
        Ok(RefreshTokenOutput {
            user_id: account.id,
            user_role: account.role.as_u8(),
            session,
        })
    }
}
