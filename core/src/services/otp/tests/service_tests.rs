//! Unit tests for the OTP service

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::mail::{MockMailService, TemplateRenderer};
use crate::services::otp::{
    InMemoryOtpStore, OtpService, OtpServiceConfig, OtpStoreTrait, SendOtpResult, CODE_LENGTH,
};

type TestService = OtpService<MockUserRepository, MockMailService, InMemoryOtpStore>;

struct Fixture {
    users: Arc<MockUserRepository>,
    mail: Arc<MockMailService>,
    store: Arc<InMemoryOtpStore>,
    service: TestService,
}

fn fixture_with_mail(mail: MockMailService) -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let mail = Arc::new(mail);
    let store = Arc::new(InMemoryOtpStore::new());
    let service = OtpService::new(
        users.clone(),
        mail.clone(),
        Arc::new(TemplateRenderer::new().unwrap()),
        store.clone(),
        OtpServiceConfig::default(),
    );
    Fixture {
        users,
        mail,
        store,
        service,
    }
}

fn fixture() -> Fixture {
    fixture_with_mail(MockMailService::new())
}

#[test]
fn test_generated_code_is_six_digits() {
    for _ in 0..1000 {
        let code = TestService::generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        let value: u32 = code.parse().unwrap();
        assert!((100_000..=999_999).contains(&value));
    }
}

#[tokio::test]
async fn test_send_otp_stores_and_mails_code() {
    let f = fixture();

    let result = f.service.send_otp(Some("a@x.com")).await.unwrap();
    assert!(result.otp_sent());

    let stored = f.store.peek("a@x.com").await.unwrap().expect("code stored");
    assert_eq!(stored.len(), CODE_LENGTH);

    let message = f.mail.last_message_to("a@x.com").await.expect("mail sent");
    assert_eq!(message.subject, "Your OTP Code");
    assert_eq!(message.text_body.trim(), format!("Your OTP code is {}", stored));
}

#[tokio::test]
async fn test_send_otp_requires_email() {
    let f = fixture();

    for email in [None, Some(""), Some("   ")] {
        match f.service.send_otp(email).await {
            Err(DomainError::Validation(ValidationError::RequiredField { message, .. })) => {
                assert_eq!(message, "Email is required");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
    assert!(f.mail.sent_messages().await.is_empty());
}

#[tokio::test]
async fn test_send_otp_skips_verified_user() {
    let f = fixture();
    let mut user = User::new("a@x.com");
    user.verify();
    let user = f.users.insert(user).await;

    let result = f.service.send_otp(Some("a@x.com")).await.unwrap();

    assert_eq!(result, SendOtpResult::AlreadyVerified { user });
    assert_eq!(f.store.peek("a@x.com").await.unwrap(), None);
    assert!(f.mail.sent_messages().await.is_empty());
}

#[tokio::test]
async fn test_send_otp_issues_code_for_unverified_user() {
    let f = fixture();
    f.users.insert(User::new("a@x.com")).await;

    let result = f.service.send_otp(Some("a@x.com")).await.unwrap();

    assert!(result.otp_sent());
    assert!(f.store.peek("a@x.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_mail_failure_keeps_stored_code() {
    let f = fixture();
    f.mail.set_should_fail(true);

    match f.service.send_otp(Some("a@x.com")).await {
        Err(DomainError::Delivery { message }) => assert_eq!(message, "Failed to send OTP"),
        other => panic!("Expected delivery error, got {:?}", other),
    }
    assert!(f.store.peek("a@x.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_user_lookup_failure_is_persistence_error() {
    let f = fixture();
    f.users.set_should_fail(true);

    let result = f.service.send_otp(Some("a@x.com")).await;

    assert!(matches!(result, Err(DomainError::Persistence { .. })));
    assert_eq!(f.store.peek("a@x.com").await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_slow_mail_times_out() {
    let f = fixture_with_mail(MockMailService::with_delay(Duration::from_secs(60)));

    let result = f.service.send_otp(Some("a@x.com")).await;

    assert!(matches!(result, Err(DomainError::Delivery { .. })));
}

#[tokio::test]
async fn test_verify_otp_succeeds_exactly_once() {
    let f = fixture();
    f.service.send_otp(Some("a@x.com")).await.unwrap();
    let code = f.store.peek("a@x.com").await.unwrap().unwrap();

    let verified = f.service.verify_otp(Some("a@x.com"), Some(&code)).await.unwrap();
    assert_eq!(verified.user.email, "a@x.com");
    assert!(verified.user.is_verified);
    assert_eq!(f.store.peek("a@x.com").await.unwrap(), None);

    let stored = f.users.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(stored.is_verified);

    let second = f.service.verify_otp(Some("a@x.com"), Some(&code)).await;
    assert!(matches!(second, Err(DomainError::InvalidCode)));
}

#[tokio::test]
async fn test_verify_otp_wrong_code_leaves_code_unchanged() {
    let f = fixture();
    f.store.put("a@x.com", "123456").await.unwrap();

    let result = f.service.verify_otp(Some("a@x.com"), Some("654321")).await;

    assert!(matches!(result, Err(DomainError::InvalidCode)));
    assert_eq!(f.store.peek("a@x.com").await.unwrap(), Some("123456".to_string()));
    assert!(f.users.is_empty().await);
}

#[tokio::test]
async fn test_second_issuance_invalidates_first_code() {
    let f = fixture();
    f.store.put("a@x.com", "111111").await.unwrap();
    f.service.send_otp(Some("a@x.com")).await.unwrap();
    let latest = f.store.peek("a@x.com").await.unwrap().unwrap();

    if latest != "111111" {
        let stale = f.service.verify_otp(Some("a@x.com"), Some("111111")).await;
        assert!(matches!(stale, Err(DomainError::InvalidCode)));
    }
    assert!(f.service.verify_otp(Some("a@x.com"), Some(&latest)).await.is_ok());
}

#[tokio::test]
async fn test_verify_otp_without_issued_code() {
    let f = fixture();

    let result = f.service.verify_otp(Some("a@x.com"), Some("123456")).await;

    assert!(matches!(result, Err(DomainError::InvalidCode)));
}

#[tokio::test]
async fn test_verify_otp_requires_both_fields() {
    let f = fixture();

    for (email, otp) in [(None, Some("123456")), (Some("a@x.com"), None), (Some(""), Some(""))] {
        match f.service.verify_otp(email, otp).await {
            Err(DomainError::Validation(ValidationError::RequiredField { message, .. })) => {
                assert_eq!(message, "Email and OTP are required");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_verify_otp_marks_existing_user_verified() {
    let f = fixture();
    let existing = f.users.insert(User::new("a@x.com")).await;
    f.store.put("a@x.com", "123456").await.unwrap();

    let verified = f.service.verify_otp(Some("a@x.com"), Some("123456")).await.unwrap();

    assert_eq!(verified.user.id, existing.id);
    assert!(verified.user.is_verified);
    assert_eq!(f.users.len().await, 1);
}

#[tokio::test]
async fn test_upsert_failure_keeps_code_consumed() {
    let f = fixture();
    f.store.put("a@x.com", "123456").await.unwrap();
    f.users.set_should_fail(true);

    let result = f.service.verify_otp(Some("a@x.com"), Some("123456")).await;

    assert!(matches!(result, Err(DomainError::Persistence { .. })));
    assert_eq!(f.store.peek("a@x.com").await.unwrap(), None);
}
