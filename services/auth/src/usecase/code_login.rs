use anyhow::anyhow;
use rand::RngExt;
use tracing::info;

use collab_domain::email::normalize_email;

use crate::domain::clock::Clock;
use crate::domain::repository::{AccountRepository, PasswordHasher, VerificationCodeRepository};
use crate::domain::types::{Account, CodeCheck, DEFAULT_DISPLAY_NAME, RejectReason};
use crate::error::AuthServiceError;
use crate::usecase::token::{SessionTokens, issue_session};
use crate::usecase::verification::verify_code;

const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const GENERATED_PASSWORD_LEN: usize = 32;

/// Password for accounts created by a code login. Hashed and discarded, so the
/// account can only sign in by code (or after a reset).
fn generate_unrecoverable_password() -> String {
    let mut rng = rand::rng();
    (0..GENERATED_PASSWORD_LEN)
        .map(|_| PASSWORD_CHARSET[rng.random_range(0..PASSWORD_CHARSET.len())] as char)
        .collect()
}

pub struct CodeLoginInput {
    pub email: String,
    pub code: String,
}

#[derive(Debug)]
pub struct SignedIn {
    pub account: Account,
    pub is_new_user: bool,
    pub session: SessionTokens,
}

#[derive(Debug)]
pub enum CodeLoginOutcome {
    SignedIn(Box<SignedIn>),
    /// The account exists but only signs in through Google. No session is issued.
    RequiresGoogleSignIn { email: String },
    Rejected(RejectReason),
}

pub struct CodeLoginUseCase<A, C, H, K>
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
    pub jwt_secret: String,
}

impl<A, C, H, K> CodeLoginUseCase<A, C, H, K>
where
    A: AccountRepository,
    C: VerificationCodeRepository,
    H: PasswordHasher,
    K: Clock,
{
    pub async fn execute(&self, input: CodeLoginInput) -> Result<CodeLoginOutcome, AuthServiceError> {
        // 1. Consume the code
        if let CodeCheck::Rejected(reason) =
            verify_code(&self.codes, &self.clock, &input.email, &input.code).await?
        {
            return Ok(CodeLoginOutcome::Rejected(reason));
        }
        let email = normalize_email(&input.email).map_err(|_| AuthServiceError::InvalidEmail)?;

        // 2. Resolve or create the account
        let account = match self.accounts.find_by_email(&email).await? {
            Some(account) => account,
            None => self.create_account(&email).await?,
        };
        if account.requires_google_sign_in() {
            info!(user_id = %account.id, "code login refused: google-only account");
            return Ok(CodeLoginOutcome::RequiresGoogleSignIn { email });
        }
        let is_new_user = account.is_new_user();

        // 3. Session
        let session = issue_session(&account, &self.jwt_secret)?;
        Ok(CodeLoginOutcome::SignedIn(Box::new(SignedIn {
            account,
            is_new_user,
            session,
        })))
    }

    /// Create a password account for `email`. If a concurrent first login inserted it
    /// first, the stored account is returned instead.
    async fn create_account(&self, email: &str) -> Result<Account, AuthServiceError> {
        let password_hash = self.hasher.hash(&generate_unrecoverable_password()).await?;
        let account = Account::new_with_password(
            email.to_owned(),
            DEFAULT_DISPLAY_NAME,
            password_hash,
            self.clock.now(),
        );
        match self.accounts.create(&account).await {
            Ok(()) => {
                info!(user_id = %account.id, "account created by code login");
                Ok(account)
            }
            Err(AuthServiceError::UserAlreadyExists) => self
                .accounts
                .find_by_email(email)
                .await?
                .ok_or_else(|| anyhow!("account {email} missing after duplicate insert").into()),
            Err(e) => Err(e),
        }
    }
}
