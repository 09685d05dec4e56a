#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{Account, CodePurpose, GoogleIdentity, ProfileUpdate, VerificationCode};
use crate::error::{AuthServiceError, MailError};

/// Storage for verification codes.
pub trait VerificationCodeRepository: Send + Sync {
    /// Delete every code stored for `code.email`, then insert `code`, as one atomic
    /// step serialized per email. Returns how many old codes were removed.
    async fn replace_for_email(&self, code: &VerificationCode) -> Result<u64, AuthServiceError>;

    /// All codes matching `email` and `code` that are not yet used, expired or not.
    async fn find_unused(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Vec<VerificationCode>, AuthServiceError>;

    /// Flip `used` to true if it is still false. Returns `false` when another caller
    /// consumed the code first.
    async fn mark_used(&self, id: Uuid) -> Result<bool, AuthServiceError>;
}

/// Storage for accounts (the `users` table).
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AuthServiceError>;

    /// Insert a new account. `UserAlreadyExists` if the email is taken.
    async fn create(&self, account: &Account) -> Result<(), AuthServiceError>;

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AuthServiceError>;

    /// Record that the account may also sign in with Google. The password, if any,
    /// is kept.
    async fn link_google(&self, id: Uuid) -> Result<(), AuthServiceError>;

    /// Store profile fields and mark the profile complete.
    async fn complete_profile(
        &self,
        id: Uuid,
        profile: &ProfileUpdate,
    ) -> Result<(), AuthServiceError>;
}

/// Outbound email.
pub trait Mailer: Send + Sync {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        purpose: CodePurpose,
        expires_at: DateTime<Utc>,
    ) -> Result<(), MailError>;
}

/// Verifies Google ID tokens.
pub trait GoogleIdentityPort: Send + Sync {
    /// `Ok(None)` when the token is invalid, expired, for another audience, or the
    /// email is not verified.
    async fn verify_id_token(
        &self,
        id_token: &str,
    ) -> Result<Option<GoogleIdentity>, AuthServiceError>;
}

/// One-way password hashing. Implementations may be CPU-heavy and must not block the
/// async executor.
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plain: &str) -> Result<String, AuthServiceError>;
    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, AuthServiceError>;
}
