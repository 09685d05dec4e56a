use chrono::Duration;

use collab_auth::domain::clock::Clock;
use collab_auth::domain::types::{CodePurpose, VerificationCode};
use collab_auth::error::AuthServiceError;
use collab_auth::usecase::verification::{IssueCodeInput, IssueCodeUseCase};

use crate::helpers::{MockCodeRepo, RecordingMailer, TEST_EMAIL, TestClock, t0, test_code};

fn active_for(codes: &[VerificationCode], email: &str, clock: &TestClock) -> usize {
    let now = clock.now();
    codes
        .iter()
        .filter(|c| c.email == email && c.is_active_at(now))
        .count()
}

#[tokio::test]
async fn should_store_unused_code_expiring_in_fifteen_minutes() {
    let repo = MockCodeRepo::empty();
    let codes = repo.codes_handle();
    let mailer = RecordingMailer::default();
    let sent = mailer.sent_handle();

    let uc = IssueCodeUseCase {
        codes: repo,
        mailer,
        clock: TestClock::at(t0()),
    };
    let issued = uc
        .execute(IssueCodeInput {
            email: TEST_EMAIL.to_owned(),
            purpose: CodePurpose::Login,
        })
        .await
        .unwrap();

    let codes = codes.lock().unwrap();
    assert_eq!(codes.len(), 1);
    let stored = &codes[0];
    assert_eq!(stored.email, TEST_EMAIL);
    assert_eq!(stored.code, issued.code);
    assert!(!stored.used, "new code should not be used");
    assert_eq!(stored.created_at, t0());
    assert_eq!(stored.expires_at, t0() + Duration::minutes(15));

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, TEST_EMAIL);
    assert_eq!(sent[0].code, issued.code);
    assert_eq!(sent[0].purpose, CodePurpose::Login);
}

#[tokio::test]
async fn should_normalize_email_before_storing() {
    let repo = MockCodeRepo::empty();
    let codes = repo.codes_handle();
    let uc = IssueCodeUseCase {
        codes: repo,
        mailer: RecordingMailer::default(),
        clock: TestClock::at(t0()),
    };

    let issued = uc
        .execute(IssueCodeInput {
            email: "  Sarah@Creator.COM ".to_owned(),
            purpose: CodePurpose::Login,
        })
        .await
        .unwrap();

    assert_eq!(issued.email, TEST_EMAIL);
    assert_eq!(codes.lock().unwrap()[0].email, TEST_EMAIL);
}

#[tokio::test]
async fn should_leave_exactly_one_active_code_after_reissue() {
    let clock = TestClock::at(t0());
    let repo = MockCodeRepo::new(vec![
        test_code(TEST_EMAIL, "111111", t0() - Duration::minutes(5)),
        test_code(TEST_EMAIL, "222222", t0() - Duration::minutes(1)),
        test_code("other@brand.com", "333333", t0()),
    ]);
    let codes = repo.codes_handle();
    let uc = IssueCodeUseCase {
        codes: repo,
        mailer: RecordingMailer::default(),
        clock: clock.clone(),
    };

    uc.execute(IssueCodeInput {
        email: TEST_EMAIL.to_owned(),
        purpose: CodePurpose::Login,
    })
    .await
    .unwrap();
    let second = uc
        .execute(IssueCodeInput {
            email: TEST_EMAIL.to_owned(),
            purpose: CodePurpose::PasswordReset,
        })
        .await
        .unwrap();

    let codes = codes.lock().unwrap();
    assert_eq!(active_for(&codes, TEST_EMAIL, &clock), 1);
    let mine: Vec<_> = codes.iter().filter(|c| c.email == TEST_EMAIL).collect();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].code, second.code);
    assert_eq!(
        active_for(&codes, "other@brand.com", &clock),
        1,
        "other addresses keep their codes"
    );
}

#[tokio::test]
async fn should_succeed_when_mail_delivery_fails() {
    let repo = MockCodeRepo::empty();
    let codes = repo.codes_handle();
    let uc = IssueCodeUseCase {
        codes: repo,
        mailer: RecordingMailer::failing(),
        clock: TestClock::at(t0()),
    };

    let issued = uc
        .execute(IssueCodeInput {
            email: TEST_EMAIL.to_owned(),
            purpose: CodePurpose::Login,
        })
        .await
        .unwrap();

    assert_eq!(codes.lock().unwrap()[0].code, issued.code);
}

#[tokio::test]
async fn should_propagate_store_failure() {
    let mailer = RecordingMailer::default();
    let sent = mailer.sent_handle();
    let uc = IssueCodeUseCase {
        codes: MockCodeRepo::failing(),
        mailer,
        clock: TestClock::at(t0()),
    };

    let result = uc
        .execute(IssueCodeInput {
            email: TEST_EMAIL.to_owned(),
            purpose: CodePurpose::Login,
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    assert!(sent.lock().unwrap().is_empty(), "no mail for an unstored code");
}

#[tokio::test]
async fn should_reject_malformed_email() {
    let repo = MockCodeRepo::empty();
    let codes = repo.codes_handle();
    let uc = IssueCodeUseCase {
        codes: repo,
        mailer: RecordingMailer::default(),
        clock: TestClock::at(t0()),
    };

    for email in ["", "not-an-email", "@creator.com"] {
        let result = uc
            .execute(IssueCodeInput {
                email: email.to_owned(),
                purpose: CodePurpose::Login,
            })
            .await;
        assert!(
            matches!(result, Err(AuthServiceError::InvalidEmail)),
            "expected InvalidEmail for {email:?}, got {result:?}"
        );
    }
    assert!(codes.lock().unwrap().is_empty());
}
