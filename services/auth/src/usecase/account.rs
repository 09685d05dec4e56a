use anyhow::anyhow;
use tracing::info;

use collab_domain::email::normalize_email;
use collab_domain::user::AuthProvider;

use crate::domain::clock::Clock;
use crate::domain::repository::{AccountRepository, GoogleIdentityPort, PasswordHasher};
use crate::domain::types::Account;
use crate::error::AuthServiceError;
use crate::usecase::code_login::SignedIn;
use crate::usecase::password_reset::validate_password;
use crate::usecase::token::issue_session;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUseCase<A, H, K>
where
    A: AccountRepository,
    H: PasswordHasher,
    K: Clock,
{
    pub accounts: A,
    pub hasher: H,
    pub clock: K,
    pub jwt_secret: String,
}

impl<A, H, K> RegisterUseCase<A, H, K>
where
    A: AccountRepository,
    H: PasswordHasher,
    K: Clock,
{
    pub async fn execute(&self, input: RegisterInput) -> Result<SignedIn, AuthServiceError> {
        let email = normalize_email(&input.email).map_err(|_| AuthServiceError::InvalidEmail)?;
        if input.name.trim().is_empty() {
            return Err(AuthServiceError::MissingData);
        }
        validate_password(&input.password)?;

        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(AuthServiceError::UserAlreadyExists);
        }

        let password_hash = self.hasher.hash(&input.password).await?;
        let account =
            Account::new_with_password(email, &input.name, password_hash, self.clock.now());
        self.accounts.create(&account).await?;
        info!(user_id = %account.id, "account registered");

        let session = issue_session(&account, &self.jwt_secret)?;
        Ok(SignedIn {
            account,
            is_new_user: true,
            session,
        })
    }
}

// ── PasswordLogin ────────────────────────────────────────────────────────────

pub struct PasswordLoginInput {
    pub email: String,
    pub password: String,
}

pub struct PasswordLoginUseCase<A, H>
where
    A: AccountRepository,
    H: PasswordHasher,
{
    pub accounts: A,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<A, H> PasswordLoginUseCase<A, H>
where
    A: AccountRepository,
    H: PasswordHasher,
{
    pub async fn execute(&self, input: PasswordLoginInput) -> Result<SignedIn, AuthServiceError> {
        // Unknown email and wrong password are indistinguishable to the caller.
        let email =
            normalize_email(&input.email).map_err(|_| AuthServiceError::InvalidCredential)?;
        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AuthServiceError::InvalidCredential)?;
        let hash = account
            .password_hash
            .as_deref()
            .ok_or(AuthServiceError::InvalidCredential)?;
        if !self.hasher.verify(&input.password, hash).await? {
            return Err(AuthServiceError::InvalidCredential);
        }

        let session = issue_session(&account, &self.jwt_secret)?;
        let is_new_user = account.is_new_user();
        Ok(SignedIn {
            account,
            is_new_user,
            session,
        })
    }
}

// ── GoogleSignIn ─────────────────────────────────────────────────────────────

pub struct GoogleSignInUseCase<A, G, K>
where
    A: AccountRepository,
    G: GoogleIdentityPort,
    K: Clock,
{
    pub accounts: A,
    pub google: G,
    pub clock: K,
    pub jwt_secret: String,
}

impl<A, G, K> GoogleSignInUseCase<A, G, K>
where
    A: AccountRepository,
    G: GoogleIdentityPort,
    K: Clock,
{
    pub async fn execute(&self, id_token: &str) -> Result<SignedIn, AuthServiceError> {
        let mut identity = self
            .google
            .verify_id_token(id_token)
            .await?
            .ok_or(AuthServiceError::InvalidGoogleToken)?;
        identity.email =
            normalize_email(&identity.email).map_err(|_| AuthServiceError::InvalidGoogleToken)?;

        let account = match self.accounts.find_by_email(&identity.email).await? {
            Some(account) => self.link_google(account).await?,
            None => {
                let account = Account::new_from_google(&identity, self.clock.now());
                match self.accounts.create(&account).await {
                    Ok(()) => {
                        info!(user_id = %account.id, "account created by google sign-in");
                        account
                    }
                    // A concurrent sign-in created the account first.
                    Err(AuthServiceError::UserAlreadyExists) => {
                        let existing = self
                            .accounts
                            .find_by_email(&identity.email)
                            .await?
                            .ok_or_else(|| {
                                anyhow!("account {} missing after duplicate insert", identity.email)
                            })?;
                        self.link_google(existing).await?
                    }
                    Err(e) => return Err(e),
                }
            }
        };
        let is_new_user = account.is_new_user();

        let session = issue_session(&account, &self.jwt_secret)?;
        Ok(SignedIn {
            account,
            is_new_user,
            session,
        })
    }

    /// Mark an existing account as Google-enabled so its sign-in methods list both
    /// password and Google.
    async fn link_google(&self, mut account: Account) -> Result<Account, AuthServiceError> {
        if account.auth_provider != AuthProvider::Google {
            self.accounts.link_google(account.id).await?;
            account.auth_provider = AuthProvider::Google;
            info!(user_id = %account.id, "google sign-in linked to existing account");
        }
        Ok(account)
    }
}
