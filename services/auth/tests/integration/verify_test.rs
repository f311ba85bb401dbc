use chrono::Duration;

use stepauth_auth::domain::repository::LoginSessionStore;
use stepauth_auth::error::AuthServiceError;
use stepauth_auth::infra::memory::InMemoryLoginSessionStore;
use stepauth_auth::usecase::verify::{VerifyInput, VerifyUseCase};

use crate::helpers::{FailingStore, MockClock, logged_in, verify_uc};

fn input(session_id: &str, code: impl ToString) -> VerifyInput {
    VerifyInput {
        session_id: session_id.to_owned(),
        code: code.to_string(),
    }
}

#[tokio::test]
async fn should_return_marker_and_consume_code() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;

    let marker = verify_uc(&store, &clock)
        .execute(input(&out.session_id, out.code))
        .await
        .unwrap();

    assert_eq!(marker, out.session_id);
    assert!(store.get_code(&out.session_id).await.unwrap().is_none());
    // Session survives for the token step.
    assert!(store.get(&out.session_id).await.unwrap().is_some());
}

#[tokio::test]
async fn should_allow_only_one_successful_verify() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;
    let uc = verify_uc(&store, &clock);

    uc.execute(input(&out.session_id, out.code)).await.unwrap();
    let second = uc.execute(input(&out.session_id, out.code)).await;

    assert!(
        matches!(second, Err(AuthServiceError::InvalidCode)),
        "expected InvalidCode, got {second:?}"
    );
}

#[tokio::test]
async fn should_keep_code_after_wrong_guess_and_allow_retry() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;
    let uc = verify_uc(&store, &clock);

    let wrong = (out.code + 1) % 1_000_000;
    let result = uc.execute(input(&out.session_id, wrong)).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCode)),
        "expected InvalidCode, got {result:?}"
    );
    assert!(store.get_code(&out.session_id).await.unwrap().is_some());

    let marker = uc.execute(input(&out.session_id, out.code)).await.unwrap();
    assert_eq!(marker, out.session_id);
}

#[tokio::test]
async fn should_treat_non_numeric_code_as_invalid() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;

    let result = verify_uc(&store, &clock)
        .execute(input(&out.session_id, "12ab56"))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCode)),
        "expected InvalidCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_accept_code_exactly_at_expiry_instant() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;

    clock.advance(Duration::minutes(2));
    let marker = verify_uc(&store, &clock)
        .execute(input(&out.session_id, out.code))
        .await
        .unwrap();
    assert_eq!(marker, out.session_id);
}

#[tokio::test]
async fn should_expire_then_forget_session() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;
    let uc = verify_uc(&store, &clock);

    clock.advance(Duration::minutes(2) + Duration::seconds(1));

    let first = uc.execute(input(&out.session_id, out.code)).await;
    assert!(
        matches!(first, Err(AuthServiceError::SessionExpired)),
        "expected SessionExpired, got {first:?}"
    );
    assert!(store.get(&out.session_id).await.unwrap().is_none());
    assert!(store.get_code(&out.session_id).await.unwrap().is_none());

    let second = uc.execute(input(&out.session_id, out.code)).await;
    assert!(
        matches!(second, Err(AuthServiceError::SessionNotFound)),
        "expected SessionNotFound, got {second:?}"
    );
}

#[tokio::test]
async fn should_check_expiry_before_code() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;

    clock.advance(Duration::minutes(5));
    let result = verify_uc(&store, &clock)
        .execute(input(&out.session_id, "000000"))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::SessionExpired)),
        "expected SessionExpired, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_for_unknown_session() {
    let result = verify_uc(&InMemoryLoginSessionStore::new(), &MockClock::new())
        .execute(input("nosuchsession", 123456))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::SessionNotFound)),
        "expected SessionNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_missing_arguments() {
    let uc = verify_uc(&InMemoryLoginSessionStore::new(), &MockClock::new());

    for (session_id, code) in [("", "123456"), ("abc", ""), (" ", " ")] {
        let result = uc.execute(input(session_id, code)).await;
        assert!(
            matches!(result, Err(AuthServiceError::InvalidInput)),
            "expected InvalidInput for ({session_id:?}, {code:?}), got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_propagate_store_failure_as_internal() {
    let uc = VerifyUseCase {
        sessions: FailingStore,
        clock: MockClock::new(),
    };
    let result = uc.execute(input("abc", 123456)).await;
    assert!(
        matches!(result, Err(AuthServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}
