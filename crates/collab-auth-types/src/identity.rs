//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Header carrying the authenticated account id.
pub const X_COLLAB_USER_ID: &str = "x-collab-user-id";

/// Header carrying the authenticated account's role wire value.
pub const X_COLLAB_USER_ROLE: &str = "x-collab-user-role";

/// Account identity injected by the gateway after it validated the access cookie
/// against `GET /auth/token`.
///
/// Returns 401 if either header is absent or unparsable.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub user_role: u8,
}

impl IdentityHeaders {
    pub fn has_role_at_least(&self, min_role: u8) -> bool {
        self.user_role >= min_role
    }
}

fn header_value<T: std::str::FromStr>(parts: &Parts, name: &str) -> Option<T> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<T>().ok())
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Values are read synchronously so the returned future does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = header_value::<Uuid>(parts, X_COLLAB_USER_ID);
        let user_role = header_value::<u8>(parts, X_COLLAB_USER_ROLE);

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            let user_role = user_role.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_id, user_role })
        }
    }
}
