use collab_auth::domain::types::ProfileUpdate;
use collab_auth::error::AuthServiceError;
use collab_auth::usecase::account::{
    GoogleSignInUseCase, PasswordLoginInput, PasswordLoginUseCase, RegisterInput,
    RegisterUseCase,
};
use collab_auth::usecase::profile::{CompleteProfileUseCase, GetProfileUseCase};
use collab_domain::user::{AuthProvider, SignInMethod};

use crate::helpers::{
    MockAccountRepo, MockGoogle, PlainHasher, TEST_EMAIL, TEST_JWT_SECRET, TestClock,
    google_identity, t0, test_account,
};

// ── Register ─────────────────────────────────────────────────────────────────

fn register_usecase(
    accounts: MockAccountRepo,
) -> RegisterUseCase<MockAccountRepo, PlainHasher, TestClock> {
    RegisterUseCase {
        accounts,
        hasher: PlainHasher,
        clock: TestClock::at(t0()),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

#[tokio::test]
async fn should_register_with_split_name() {
    let accounts = MockAccountRepo::empty();
    let handle = accounts.accounts_handle();

    let signed_in = register_usecase(accounts)
        .execute(RegisterInput {
            name: "Mary Ann Brand".to_owned(),
            email: "Mary@Brand.com".to_owned(),
            password: "long-enough".to_owned(),
        })
        .await
        .unwrap();

    assert!(signed_in.is_new_user);
    let stored = handle.lock().unwrap();
    assert_eq!(stored[0].email, "mary@brand.com");
    assert_eq!(stored[0].first_name, "Mary");
    assert_eq!(stored[0].last_name, "Ann Brand");
    assert_eq!(stored[0].password_hash.as_deref(), Some("plain:long-enough"));
    assert!(!stored[0].profile_complete);
}

#[tokio::test]
async fn should_reject_duplicate_registration() {
    let result = register_usecase(MockAccountRepo::new(vec![test_account(TEST_EMAIL)]))
        .execute(RegisterInput {
            name: "Sarah".to_owned(),
            email: TEST_EMAIL.to_owned(),
            password: "long-enough".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_short_registration_password() {
    let result = register_usecase(MockAccountRepo::empty())
        .execute(RegisterInput {
            name: "Sarah".to_owned(),
            email: TEST_EMAIL.to_owned(),
            password: "short".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(AuthServiceError::WeakPassword)));
}

// ── PasswordLogin ────────────────────────────────────────────────────────────

fn password_login(email: &str, password: &str) -> PasswordLoginInput {
    PasswordLoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn should_sign_in_with_correct_password() {
    let uc = PasswordLoginUseCase {
        accounts: MockAccountRepo::new(vec![test_account(TEST_EMAIL)]),
        hasher: PlainHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let signed_in = uc
        .execute(password_login(TEST_EMAIL, "old-password"))
        .await
        .unwrap();
    assert!(!signed_in.is_new_user);
}

#[tokio::test]
async fn should_hide_whether_email_or_password_was_wrong() {
    let uc = PasswordLoginUseCase {
        accounts: MockAccountRepo::new(vec![test_account(TEST_EMAIL)]),
        hasher: PlainHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let wrong_password = uc.execute(password_login(TEST_EMAIL, "nope-nope")).await;
    let unknown_email = uc
        .execute(password_login("ghost@brand.com", "old-password"))
        .await;

    assert!(matches!(wrong_password, Err(AuthServiceError::InvalidCredential)));
    assert!(matches!(unknown_email, Err(AuthServiceError::InvalidCredential)));
}

// ── GoogleSignIn ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_google_account_without_password() {
    let accounts = MockAccountRepo::empty();
    let handle = accounts.accounts_handle();
    let uc = GoogleSignInUseCase {
        accounts,
        google: MockGoogle {
            identity: Some(google_identity("gina@brand.com")),
        },
        clock: TestClock::at(t0()),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let signed_in = uc.execute("good-token").await.unwrap();

    assert!(signed_in.is_new_user);
    let stored = handle.lock().unwrap();
    assert_eq!(stored[0].auth_provider, AuthProvider::Google);
    assert_eq!(stored[0].sign_in_methods(), vec![SignInMethod::Google]);
    assert_eq!(stored[0].first_name, "Gina");
    assert_eq!(stored[0].photo_url, "https://example.com/gina.png");
}

#[tokio::test]
async fn should_sign_existing_account_in_with_google() {
    let account = test_account(TEST_EMAIL);
    let accounts = MockAccountRepo::new(vec![account.clone()]);
    let handle = accounts.accounts_handle();
    let uc = GoogleSignInUseCase {
        accounts,
        google: MockGoogle {
            identity: Some(google_identity(TEST_EMAIL)),
        },
        clock: TestClock::at(t0()),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let signed_in = uc.execute("good-token").await.unwrap();

    assert_eq!(signed_in.account.id, account.id);
    assert_eq!(handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_link_google_to_password_account() {
    let account = test_account(TEST_EMAIL);
    let accounts = MockAccountRepo::new(vec![account.clone()]);
    let handle = accounts.accounts_handle();
    let uc = GoogleSignInUseCase {
        accounts,
        google: MockGoogle {
            identity: Some(google_identity(TEST_EMAIL)),
        },
        clock: TestClock::at(t0()),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let signed_in = uc.execute("good-token").await.unwrap();

    let both = vec![SignInMethod::Password, SignInMethod::Google];
    assert_eq!(signed_in.account.sign_in_methods(), both);
    let stored = handle.lock().unwrap();
    assert_eq!(stored[0].sign_in_methods(), both);
    assert_eq!(stored[0].password_hash, account.password_hash, "password kept");
}

#[tokio::test]
async fn should_sign_in_when_concurrent_google_sign_in_created_account() {
    let winner = test_account("gina@brand.com");
    let accounts = MockAccountRepo::racing(winner.clone());
    let handle = accounts.accounts_handle();
    let uc = GoogleSignInUseCase {
        accounts,
        google: MockGoogle {
            identity: Some(google_identity("gina@brand.com")),
        },
        clock: TestClock::at(t0()),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let signed_in = uc.execute("good-token").await.unwrap();

    assert_eq!(signed_in.account.id, winner.id);
    assert_eq!(handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_unverified_google_token() {
    let uc = GoogleSignInUseCase {
        accounts: MockAccountRepo::empty(),
        google: MockGoogle {
            identity: Some(google_identity(TEST_EMAIL)),
        },
        clock: TestClock::at(t0()),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc.execute("forged-token").await;
    assert!(matches!(result, Err(AuthServiceError::InvalidGoogleToken)));
}

// ── Profile ──────────────────────────────────────────────────────────────────

fn profile(location: &str) -> ProfileUpdate {
    ProfileUpdate {
        display_name: Some("  Sarah C ".to_owned()),
        first_name: "Sarah".to_owned(),
        last_name: "Creator".to_owned(),
        phone_number: "+1 555 0100".to_owned(),
        address: "1 Market St".to_owned(),
        location: location.to_owned(),
    }
}

#[tokio::test]
async fn should_complete_profile() {
    let mut account = test_account(TEST_EMAIL);
    account.profile_complete = false;
    let accounts = MockAccountRepo::new(vec![account.clone()]);

    let updated = CompleteProfileUseCase {
        accounts: accounts.clone(),
    }
    .execute(account.id, profile("Austin"))
    .await
    .unwrap();

    assert!(updated.profile_complete);
    assert_eq!(updated.display_name, "Sarah C");
    assert_eq!(updated.location, "Austin");

    let fetched = GetProfileUseCase { accounts }
        .execute(account.id)
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn should_require_every_profile_field() {
    let mut account = test_account(TEST_EMAIL);
    account.profile_complete = false;
    let accounts = MockAccountRepo::new(vec![account.clone()]);
    let handle = accounts.accounts_handle();

    let result = CompleteProfileUseCase { accounts }
        .execute(account.id, profile("   "))
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::MissingData)),
        "expected MissingData, got {result:?}"
    );
    assert!(!handle.lock().unwrap()[0].profile_complete);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_profile() {
    let result = GetProfileUseCase {
        accounts: MockAccountRepo::empty(),
    }
    .execute(uuid::Uuid::now_v7())
    .await;
    assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
}
