use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use collab_auth::domain::clock::Clock;
use collab_auth::domain::repository::{
    AccountRepository, GoogleIdentityPort, Mailer, PasswordHasher, VerificationCodeRepository,
};
use collab_auth::domain::types::{
    Account, CodePurpose, GoogleIdentity, ProfileUpdate, VerificationCode,
};
use collab_auth::error::{AuthServiceError, MailError};
use collab_domain::user::AuthProvider;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const TEST_EMAIL: &str = "sarah@creator.com";

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn db_down() -> AuthServiceError {
    AuthServiceError::Internal(anyhow::anyhow!("connection refused"))
}

// ── TestClock ────────────────────────────────────────────────────────────────

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone)]
pub struct TestClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl TestClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ── MockCodeRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockCodeRepo {
    pub codes: Arc<Mutex<Vec<VerificationCode>>>,
    /// Every call fails as if the store were unreachable.
    pub fail: bool,
    /// Simulate another request consuming the code between lookup and update.
    pub consumed_concurrently: bool,
}

impl MockCodeRepo {
    pub fn new(codes: Vec<VerificationCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Returns a shared handle to the internal code list for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<VerificationCode>>> {
        Arc::clone(&self.codes)
    }
}

impl VerificationCodeRepository for MockCodeRepo {
    async fn replace_for_email(&self, code: &VerificationCode) -> Result<u64, AuthServiceError> {
        if self.fail {
            return Err(db_down());
        }
        let mut codes = self.codes.lock().unwrap();
        let before = codes.len();
        codes.retain(|c| c.email != code.email);
        let removed = (before - codes.len()) as u64;
        codes.push(code.clone());
        Ok(removed)
    }

    async fn find_unused(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Vec<VerificationCode>, AuthServiceError> {
        if self.fail {
            return Err(db_down());
        }
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.email == email && c.code == code && !c.used)
            .cloned()
            .collect())
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        if self.fail {
            return Err(db_down());
        }
        let mut codes = self.codes.lock().unwrap();
        let Some(c) = codes.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        if self.consumed_concurrently {
            c.used = true;
        }
        if c.used {
            return Ok(false);
        }
        c.used = true;
        Ok(true)
    }
}

// ── MockAccountRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAccountRepo {
    pub accounts: Arc<Mutex<Vec<Account>>>,
    pub fail: bool,
    /// Inserted by a concurrent request just before the next `create`, which then
    /// hits the unique email constraint.
    pub concurrent_insert: Arc<Mutex<Option<Account>>>,
}

impl MockAccountRepo {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
            ..Default::default()
        }
    }

    /// Empty store where `account` appears between the caller's lookup and insert.
    pub fn racing(account: Account) -> Self {
        Self {
            concurrent_insert: Arc::new(Mutex::new(Some(account))),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn accounts_handle(&self) -> Arc<Mutex<Vec<Account>>> {
        Arc::clone(&self.accounts)
    }
}

impl AccountRepository for MockAccountRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthServiceError> {
        if self.fail {
            return Err(db_down());
        }
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AuthServiceError> {
        if self.fail {
            return Err(db_down());
        }
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn create(&self, account: &Account) -> Result<(), AuthServiceError> {
        if self.fail {
            return Err(db_down());
        }
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(winner) = self.concurrent_insert.lock().unwrap().take() {
            accounts.push(winner);
        }
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AuthServiceError::UserAlreadyExists);
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AuthServiceError> {
        if self.fail {
            return Err(db_down());
        }
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AuthServiceError::UserNotFound)?;
        account.password_hash = Some(password_hash.to_owned());
        Ok(())
    }

    async fn link_google(&self, id: Uuid) -> Result<(), AuthServiceError> {
        if self.fail {
            return Err(db_down());
        }
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AuthServiceError::UserNotFound)?;
        account.auth_provider = AuthProvider::Google;
        Ok(())
    }

    async fn complete_profile(
        &self,
        id: Uuid,
        profile: &ProfileUpdate,
    ) -> Result<(), AuthServiceError> {
        if self.fail {
            return Err(db_down());
        }
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AuthServiceError::UserNotFound)?;
        if let Some(name) = &profile.display_name {
            account.display_name = name.clone();
        }
        account.first_name = profile.first_name.clone();
        account.last_name = profile.last_name.clone();
        account.phone_number = profile.phone_number.clone();
        account.address = profile.address.clone();
        account.location = profile.location.clone();
        account.profile_complete = true;
        Ok(())
    }
}

// ── RecordingMailer ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SentMail {
    pub email: String,
    pub code: String,
    pub purpose: CodePurpose,
}

#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for RecordingMailer {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        purpose: CodePurpose,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Transport("connection reset".to_owned()));
        }
        self.sent.lock().unwrap().push(SentMail {
            email: email.to_owned(),
            code: code.to_owned(),
            purpose,
        });
        Ok(())
    }
}

// ── PlainHasher ──────────────────────────────────────────────────────────────

/// Reversible stand-in for argon2 so tests stay fast.
#[derive(Clone, Copy, Default)]
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    async fn hash(&self, plain: &str) -> Result<String, AuthServiceError> {
        Ok(plain_hash(plain))
    }

    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, AuthServiceError> {
        Ok(hash == plain_hash(plain))
    }
}

pub fn plain_hash(plain: &str) -> String {
    format!("plain:{plain}")
}

// ── MockGoogle ───────────────────────────────────────────────────────────────

pub struct MockGoogle {
    pub identity: Option<GoogleIdentity>,
}

impl GoogleIdentityPort for MockGoogle {
    async fn verify_id_token(
        &self,
        id_token: &str,
    ) -> Result<Option<GoogleIdentity>, AuthServiceError> {
        Ok(self.identity.clone().filter(|_| id_token == "good-token"))
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_code(email: &str, code: &str, issued_at: DateTime<Utc>) -> VerificationCode {
    VerificationCode::new(email.to_owned(), code.to_owned(), issued_at)
}

/// Email/password account with a completed profile.
pub fn test_account(email: &str) -> Account {
    let password_hash = plain_hash("old-password");
    let mut account =
        Account::new_with_password(email.to_owned(), "Sarah Creator", password_hash, t0());
    account.phone_number = "+1 555 0100".to_owned();
    account.address = "1 Market St".to_owned();
    account.location = "San Francisco".to_owned();
    account.profile_complete = true;
    account
}

/// Account that can only sign in with Google.
pub fn google_only_account(email: &str) -> Account {
    let mut account = test_account(email);
    account.auth_provider = AuthProvider::Google;
    account.password_hash = None;
    account
}

pub fn google_identity(email: &str) -> GoogleIdentity {
    GoogleIdentity {
        subject: "google-sub-1".to_owned(),
        email: email.to_owned(),
        name: Some("Gina Google".to_owned()),
        picture: Some("https://example.com/gina.png".to_owned()),
    }
}
