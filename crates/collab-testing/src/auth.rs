//! Mock identity helpers for router tests.
//!
//! Services behind the gateway receive identity headers injected by the gateway.
//! `MockAuth` builds those headers directly so no real gateway or JWT is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use collab_auth_types::identity::{X_COLLAB_USER_ID, X_COLLAB_USER_ROLE};
use collab_domain::user::UserRole;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub user_role: UserRole,
}

impl MockAuth {
    pub fn new(user_id: Uuid, user_role: UserRole) -> Self {
        Self { user_id, user_role }
    }

    pub fn member() -> Self {
        Self::new(Uuid::now_v7(), UserRole::Member)
    }

    pub fn admin() -> Self {
        Self::new(Uuid::now_v7(), UserRole::Admin)
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static(X_COLLAB_USER_ID),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        map.insert(
            HeaderName::from_static(X_COLLAB_USER_ROLE),
            HeaderValue::from(u16::from(self.user_role.as_u8())),
        );
        map
    }
}
