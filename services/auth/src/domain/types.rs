use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use collab_domain::user::{AuthProvider, SignInMethod, UserRole};

/// Verification code time-to-live in seconds (15 minutes).
pub const VERIFICATION_CODE_TTL_SECS: i64 = 15 * 60;

/// Inclusive range verification codes are drawn from, so every code has 6 digits.
pub const CODE_MIN: u32 = 100_000;
pub const CODE_MAX: u32 = 999_999;

/// Minimum accepted password length for registration and reset.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Display name given to accounts created by a passwordless login.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// One-time code issued to an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
}

impl VerificationCode {
    pub fn new(email: String, code: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            email,
            code,
            created_at: now,
            expires_at: now + Duration::seconds(VERIFICATION_CODE_TTL_SECS),
            used: false,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Unused and unexpired.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.used && !self.is_expired_at(now)
    }
}

/// What a code was requested for. Only changes the email wording: a code issued for
/// one flow is accepted by the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePurpose {
    Login,
    PasswordReset,
}

/// Why a submitted code was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No unused code matches the (email, code) pair.
    InvalidCode,
    /// Matching codes exist but all are past their expiry.
    Expired,
}

impl RejectReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidCode => "invalid code",
            Self::Expired => "code has expired",
        }
    }
}

/// Result of checking an (email, code) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCheck {
    Valid,
    Rejected(RejectReason),
}

/// Marketplace account as the auth service sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub location: String,
    pub photo_url: String,
    pub profile_complete: bool,
    pub auth_provider: AuthProvider,
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// New email/password account with an incomplete profile.
    pub fn new_with_password(
        email: String,
        display_name: &str,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        let (first_name, last_name) = split_name(display_name);
        Self {
            id: Uuid::now_v7(),
            email,
            display_name: display_name.trim().to_owned(),
            first_name,
            last_name,
            phone_number: String::new(),
            address: String::new(),
            location: String::new(),
            photo_url: String::new(),
            profile_complete: false,
            auth_provider: AuthProvider::Email,
            password_hash: Some(password_hash),
            role: UserRole::Member,
            created_at: now,
            updated_at: now,
        }
    }

    /// New Google-only account (no password) with an incomplete profile.
    pub fn new_from_google(identity: &GoogleIdentity, now: DateTime<Utc>) -> Self {
        let display_name = identity.name.clone().unwrap_or_default();
        let (first_name, last_name) = split_name(&display_name);
        Self {
            id: Uuid::now_v7(),
            email: identity.email.clone(),
            display_name,
            first_name,
            last_name,
            phone_number: String::new(),
            address: String::new(),
            location: String::new(),
            photo_url: identity.picture.clone().unwrap_or_default(),
            profile_complete: false,
            auth_provider: AuthProvider::Google,
            password_hash: None,
            role: UserRole::Member,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn sign_in_methods(&self) -> Vec<SignInMethod> {
        let mut methods = Vec::with_capacity(2);
        if self.password_hash.is_some() {
            methods.push(SignInMethod::Password);
        }
        if self.auth_provider == AuthProvider::Google {
            methods.push(SignInMethod::Google);
        }
        methods
    }

    /// Accounts that can only sign in through Google must not be signed in by an
    /// email code; the client is sent to Google instead.
    pub fn requires_google_sign_in(&self) -> bool {
        let methods = self.sign_in_methods();
        methods.contains(&SignInMethod::Google) && !methods.contains(&SignInMethod::Password)
    }

    /// New users are routed to profile completion.
    pub fn is_new_user(&self) -> bool {
        !self.profile_complete
    }
}

/// Fields submitted when completing a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub location: String,
}

impl ProfileUpdate {
    /// All required profile fields are non-blank.
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.phone_number,
            &self.address,
            &self.location,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Identity asserted by a verified Google ID token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleIdentity {
    pub subject: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Split a full name at the first whitespace into (first, last).
pub fn split_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_owned();
    let last = parts.collect::<Vec<_>>().join(" ");
    (first, last)
}
