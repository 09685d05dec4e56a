use collab_auth::error::AuthServiceError;
use collab_auth::usecase::token::{RefreshTokenUseCase, issue_session};
use collab_auth_types::token::validate_access_token;
use collab_domain::user::UserRole;

use crate::helpers::{MockAccountRepo, TEST_EMAIL, TEST_JWT_SECRET, test_account};

#[tokio::test]
async fn should_refresh_session_with_current_role() {
    let mut account = test_account(TEST_EMAIL);
    let session = issue_session(&account, TEST_JWT_SECRET).unwrap();

    // Promoted after the original sign-in.
    account.role = UserRole::Admin;
    let uc = RefreshTokenUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = uc.execute(&session.refresh_token).await.unwrap();

    assert_eq!(out.user_id, account.id);
    assert_eq!(out.user_role, UserRole::Admin.as_u8());
    let info = validate_access_token(&out.session.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_role, UserRole::Admin.as_u8());
}

#[tokio::test]
async fn should_reject_access_token_used_as_refresh_token() {
    let account = test_account(TEST_EMAIL);
    let session = issue_session(&account, TEST_JWT_SECRET).unwrap();
    let uc = RefreshTokenUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc.execute(&session.access_token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidRefreshToken)),
        "expected InvalidRefreshToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_refresh_for_deleted_account() {
    let session = issue_session(&test_account(TEST_EMAIL), TEST_JWT_SECRET).unwrap();
    let uc = RefreshTokenUseCase {
        accounts: MockAccountRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc.execute(&session.refresh_token).await;
    assert!(matches!(result, Err(AuthServiceError::InvalidRefreshToken)));
}

#[tokio::test]
async fn should_reject_refresh_token_signed_with_other_secret() {
    let account = test_account(TEST_EMAIL);
    let session = issue_session(&account, "another-secret").unwrap();
    let uc = RefreshTokenUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc.execute(&session.refresh_token).await;
    assert!(matches!(result, Err(AuthServiceError::InvalidRefreshToken)));
}
