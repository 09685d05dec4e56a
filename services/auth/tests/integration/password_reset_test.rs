use chrono::Duration;

use collab_auth::domain::types::RejectReason;
use collab_auth::error::AuthServiceError;
use collab_auth::usecase::password_reset::{
    ResetPasswordInput, ResetPasswordOutcome, ResetPasswordUseCase,
};
use collab_domain::user::SignInMethod;

use crate::helpers::{
    MockAccountRepo, MockCodeRepo, PlainHasher, TEST_EMAIL, TestClock, google_only_account, t0,
    test_account, test_code,
};

fn reset_usecase(
    accounts: MockAccountRepo,
    codes: MockCodeRepo,
    clock: TestClock,
) -> ResetPasswordUseCase<MockAccountRepo, MockCodeRepo, PlainHasher, TestClock> {
    ResetPasswordUseCase {
        accounts,
        codes,
        hasher: PlainHasher,
        clock,
    }
}

fn input(code: &str, new_password: &str) -> ResetPasswordInput {
    ResetPasswordInput {
        email: TEST_EMAIL.to_owned(),
        code: code.to_owned(),
        new_password: new_password.to_owned(),
    }
}

#[tokio::test]
async fn should_replace_password_hash() {
    let accounts = MockAccountRepo::new(vec![test_account(TEST_EMAIL)]);
    let handle = accounts.accounts_handle();
    let uc = reset_usecase(
        accounts,
        MockCodeRepo::new(vec![test_code(TEST_EMAIL, "123456", t0())]),
        TestClock::at(t0()),
    );

    let outcome = uc.execute(input("123456", "new-password")).await.unwrap();

    assert_eq!(outcome, ResetPasswordOutcome::Reset);
    assert_eq!(
        handle.lock().unwrap()[0].password_hash.as_deref(),
        Some("plain:new-password")
    );
}

#[tokio::test]
async fn should_add_password_method_to_google_only_account() {
    let accounts = MockAccountRepo::new(vec![google_only_account(TEST_EMAIL)]);
    let handle = accounts.accounts_handle();
    let uc = reset_usecase(
        accounts,
        MockCodeRepo::new(vec![test_code(TEST_EMAIL, "123456", t0())]),
        TestClock::at(t0()),
    );

    uc.execute(input("123456", "new-password")).await.unwrap();

    assert_eq!(
        handle.lock().unwrap()[0].sign_in_methods(),
        vec![SignInMethod::Password, SignInMethod::Google]
    );
}

#[tokio::test]
async fn should_reject_weak_password_without_consuming_code() {
    let codes = MockCodeRepo::new(vec![test_code(TEST_EMAIL, "123456", t0())]);
    let handle = codes.codes_handle();
    let uc = reset_usecase(
        MockAccountRepo::new(vec![test_account(TEST_EMAIL)]),
        codes,
        TestClock::at(t0()),
    );

    let result = uc.execute(input("123456", "short")).await;

    assert!(
        matches!(result, Err(AuthServiceError::WeakPassword)),
        "expected WeakPassword, got {result:?}"
    );
    assert!(!handle.lock().unwrap()[0].used);
}

#[tokio::test]
async fn should_report_user_not_found_after_valid_code() {
    let uc = reset_usecase(
        MockAccountRepo::empty(),
        MockCodeRepo::new(vec![test_code(TEST_EMAIL, "123456", t0())]),
        TestClock::at(t0()),
    );

    let result = uc.execute(input("123456", "new-password")).await;

    assert!(
        matches!(result, Err(AuthServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_leave_password_unchanged_for_expired_code() {
    let accounts = MockAccountRepo::new(vec![test_account(TEST_EMAIL)]);
    let handle = accounts.accounts_handle();
    let clock = TestClock::at(t0());
    clock.advance(Duration::minutes(20));
    let uc = reset_usecase(
        accounts,
        MockCodeRepo::new(vec![test_code(TEST_EMAIL, "123456", t0())]),
        clock,
    );

    let outcome = uc.execute(input("123456", "new-password")).await.unwrap();

    assert_eq!(outcome, ResetPasswordOutcome::Rejected(RejectReason::Expired));
    assert_eq!(
        handle.lock().unwrap()[0].password_hash.as_deref(),
        Some("plain:old-password")
    );
}

#[tokio::test]
async fn should_propagate_account_store_failure() {
    let uc = reset_usecase(
        MockAccountRepo::failing(),
        MockCodeRepo::new(vec![test_code(TEST_EMAIL, "123456", t0())]),
        TestClock::at(t0()),
    );

    let result = uc.execute(input("123456", "new-password")).await;
    assert!(
        matches!(result, Err(AuthServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}
