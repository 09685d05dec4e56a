use std::time::Duration;

use anyhow::Context as _;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::repository::GoogleIdentityPort;
use crate::domain::types::GoogleIdentity;
use crate::error::AuthServiceError;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Verifies ID tokens with Google's `tokeninfo` endpoint.
#[derive(Clone)]
pub struct GoogleTokenInfoClient {
    client: Client,
    client_id: String,
}

impl GoogleTokenInfoClient {
    pub fn new(client_id: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, client_id })
    }
}

/// `email_verified` arrives as `"true"` from tokeninfo but as a JSON bool in decoded JWTs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => s == "true",
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    sub: String,
    email: Option<String>,
    email_verified: Option<Flag>,
    name: Option<String>,
    picture: Option<String>,
}

/// ID tokens are three base64url segments.
fn is_jwt_shaped(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '='))
}

fn identity_for(info: TokenInfo, client_id: &str) -> Option<GoogleIdentity> {
    if info.aud != client_id {
        return None;
    }
    if !info.email_verified.as_ref().is_some_and(Flag::is_set) {
        return None;
    }
    Some(GoogleIdentity {
        subject: info.sub,
        email: info.email?,
        name: info.name,
        picture: info.picture,
    })
}

impl GoogleIdentityPort for GoogleTokenInfoClient {
    async fn verify_id_token(
        &self,
        id_token: &str,
    ) -> Result<Option<GoogleIdentity>, AuthServiceError> {
        if !is_jwt_shaped(id_token) {
            return Ok(None);
        }
        let resp = self
            .client
            .get(format!("{TOKENINFO_URL}?id_token={id_token}"))
            .send()
            .await
            .context("google tokeninfo request")?;

        // Invalid or expired tokens come back as 400.
        if resp.status() == StatusCode::BAD_REQUEST {
            return Ok(None);
        }
        let info = resp
            .error_for_status()
            .context("google tokeninfo status")?
            .json::<TokenInfo>()
            .await
            .context("google tokeninfo body")?;

        let identity = identity_for(info, &self.client_id);
        if identity.is_none() {
            tracing::debug!("google id token rejected: audience or email verification mismatch");
        }
        Ok(identity)
    }
}
