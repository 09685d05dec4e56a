use chrono::{DateTime, Utc};
use rand::RngExt;
use tracing::{debug, info, warn};

use collab_domain::email::normalize_email;

use crate::domain::clock::Clock;
use crate::domain::repository::{Mailer, VerificationCodeRepository};
use crate::domain::types::{
    CODE_MAX, CODE_MIN, CodeCheck, CodePurpose, RejectReason, VerificationCode,
};
use crate::error::AuthServiceError;

/// Six-digit code drawn uniformly from [`CODE_MIN`, `CODE_MAX`].
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(CODE_MIN..=CODE_MAX).to_string()
}

/// Check `(email, code)` and consume the code if it is active.
///
/// Expired matches are left untouched. A code consumed concurrently between the
/// lookup and the update is reported as [`RejectReason::InvalidCode`].
pub async fn verify_code<C, K>(
    codes: &C,
    clock: &K,
    email: &str,
    code: &str,
) -> Result<CodeCheck, AuthServiceError>
where
    C: VerificationCodeRepository,
    K: Clock,
{
    // No code can ever be stored under an address that fails normalization.
    let Ok(email) = normalize_email(email) else {
        return Ok(CodeCheck::Rejected(RejectReason::InvalidCode));
    };
    let code = code.trim();

    let candidates = codes.find_unused(&email, code).await?;
    if candidates.is_empty() {
        debug!(email = %email, "verification rejected: no unused code");
        return Ok(CodeCheck::Rejected(RejectReason::InvalidCode));
    }

    let now = clock.now();
    let Some(active) = candidates.iter().find(|c| c.expires_at > now) else {
        debug!(email = %email, "verification rejected: code expired");
        return Ok(CodeCheck::Rejected(RejectReason::Expired));
    };

    if !codes.mark_used(active.id).await? {
        debug!(email = %email, code_id = %active.id, "verification rejected: code consumed concurrently");
        return Ok(CodeCheck::Rejected(RejectReason::InvalidCode));
    }

    info!(email = %email, code_id = %active.id, "verification code consumed");
    Ok(CodeCheck::Valid)
}

// ── IssueCode ────────────────────────────────────────────────────────────────

pub struct IssueCodeInput {
    pub email: String,
    pub purpose: CodePurpose,
}

#[derive(Debug)]
pub struct IssuedCode {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

pub struct IssueCodeUseCase<C, M, K>
where
    C: VerificationCodeRepository,
    M: Mailer,
    K: Clock,
{
    pub codes: C,
    pub mailer: M,
    pub clock: K,
}

impl<C, M, K> IssueCodeUseCase<C, M, K>
where
    C: VerificationCodeRepository,
    M: Mailer,
    K: Clock,
{
    pub async fn execute(&self, input: IssueCodeInput) -> Result<IssuedCode, AuthServiceError> {
        let email = normalize_email(&input.email).map_err(|_| AuthServiceError::InvalidEmail)?;

        // 1. Replace whatever the address had with one fresh code (atomic per email)
        let record = VerificationCode::new(email, generate_code(), self.clock.now());
        let replaced = self.codes.replace_for_email(&record).await?;
        info!(
            email = %record.email,
            purpose = ?input.purpose,
            replaced,
            expires_at = %record.expires_at,
            "verification code issued"
        );

        // 2. Best-effort notification; the stored code stays valid if mail fails
        if let Err(e) = self
            .mailer
            .send_verification_code(&record.email, &record.code, input.purpose, record.expires_at)
            .await
        {
            warn!(email = %record.email, error = %e, "failed to send verification code email");
        }

        Ok(IssuedCode {
            email: record.email,
            code: record.code,
            expires_at: record.expires_at,
        })
    }
}

// ── VerifyCode ───────────────────────────────────────────────────────────────

/// Standalone code check. The login and reset flows call [`verify_code`] directly.
pub struct VerifyCodeUseCase<C, K>
where
    C: VerificationCodeRepository,
    K: Clock,
{
    pub codes: C,
    pub clock: K,
}

impl<C, K> VerifyCodeUseCase<C, K>
where
    C: VerificationCodeRepository,
    K: Clock,
{
    pub async fn execute(&self, email: &str, code: &str) -> Result<CodeCheck, AuthServiceError> {
        verify_code(&self.codes, &self.clock, email, code).await
    }
}
