use tracing::info;

use collab_domain::email::normalize_email;

use crate::domain::clock::Clock;
use crate::domain::repository::{AccountRepository, PasswordHasher, VerificationCodeRepository};
use crate::domain::types::{CodeCheck, MIN_PASSWORD_LEN, RejectReason};
use crate::error::AuthServiceError;
use crate::usecase::verification::verify_code;

pub fn validate_password(password: &str) -> Result<(), AuthServiceError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthServiceError::WeakPassword);
    }
    Ok(())
}

pub struct ResetPasswordInput {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResetPasswordOutcome {
    Reset,
    Rejected(RejectReason),
}

pub struct ResetPasswordUseCase<A, C, H, K>
where
    A: AccountRepository,
    C: VerificationCodeRepository,
    H: PasswordHasher,
    K: Clock,
{
    pub accounts: A,
    pub codes: C,
    pub hasher: H,
    pub clock: K,
}

impl<A, C, H, K> ResetPasswordUseCase<A, C, H, K>
where
    A: AccountRepository,
    C: VerificationCodeRepository,
    H: PasswordHasher,
    K: Clock,
{
    pub async fn execute(
        &self,
        input: ResetPasswordInput,
    ) -> Result<ResetPasswordOutcome, AuthServiceError> {
        // 1. Reject a bad password before it can burn the code
        validate_password(&input.new_password)?;

        // 2. Consume the code
        if let CodeCheck::Rejected(reason) =
            verify_code(&self.codes, &self.clock, &input.email, &input.code).await?
        {
            return Ok(ResetPasswordOutcome::Rejected(reason));
        }
        let email = normalize_email(&input.email).map_err(|_| AuthServiceError::InvalidEmail)?;

        // 3. Replace the hash
        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;
        let password_hash = self.hasher.hash(&input.new_password).await?;
        self.accounts
            .update_password_hash(account.id, &password_hash)
            .await?;

        info!(user_id = %account.id, "password reset");
        Ok(ResetPasswordOutcome::Reset)
    }
}
