use chrono::Duration;

use stepauth_auth::error::AuthServiceError;
use stepauth_auth::infra::memory::InMemoryLoginSessionStore;
use stepauth_auth::usecase::protected::authorize;
use stepauth_auth::usecase::token::IssueTokenUseCase;
use stepauth_auth::usecase::verify::VerifyInput;

use crate::helpers::{
    FailingStore, MockClock, TEST_EMAIL, TEST_JWT_SECRET, issue_uc, logged_in, verify_uc,
};

#[tokio::test]
async fn should_issue_credential_for_verified_session() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;
    let marker = verify_uc(&store, &clock)
        .execute(VerifyInput {
            session_id: out.session_id.clone(),
            code: out.code.to_string(),
        })
        .await
        .unwrap();

    let issued = issue_uc(&store, &clock).execute(Some(marker)).await.unwrap();
    assert_eq!(issued.expires_in, 900);

    let claims = authorize(Some(&issued.access_token), TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.email, TEST_EMAIL);
    assert_eq!(claims.session_id, out.session_id);
    assert_eq!(claims.exp - claims.iat, 900);
}

#[tokio::test]
async fn should_issue_independent_credentials_per_call() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;
    let uc = issue_uc(&store, &clock);

    let first = uc.execute(Some(out.session_id.clone())).await.unwrap();
    clock.advance(Duration::seconds(5));
    let second = uc.execute(Some(out.session_id.clone())).await.unwrap();

    assert_ne!(first.access_token, second.access_token);
    assert!(authorize(Some(&first.access_token), TEST_JWT_SECRET).is_ok());
    assert!(authorize(Some(&second.access_token), TEST_JWT_SECRET).is_ok());
}

// The token step only checks that the session is still stored.

#[tokio::test]
async fn should_issue_for_session_that_was_never_verified() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;

    let issued = issue_uc(&store, &clock)
        .execute(Some(out.session_id.clone()))
        .await
        .unwrap();
    let claims = authorize(Some(&issued.access_token), TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.email, TEST_EMAIL);
}

#[tokio::test]
async fn should_issue_for_expired_session_still_in_store() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;

    clock.advance(Duration::minutes(10));
    let result = issue_uc(&store, &clock).execute(Some(out.session_id)).await;
    assert!(result.is_ok(), "expected credential, got {result:?}");
}

#[tokio::test]
async fn should_fail_after_expired_session_was_removed() {
    let store = InMemoryLoginSessionStore::new();
    let clock = MockClock::new();
    let out = logged_in(&store, &clock).await;

    clock.advance(Duration::minutes(3));
    let _ = verify_uc(&store, &clock)
        .execute(VerifyInput {
            session_id: out.session_id.clone(),
            code: out.code.to_string(),
        })
        .await;

    let result = issue_uc(&store, &clock).execute(Some(out.session_id)).await;
    assert!(
        matches!(result, Err(AuthServiceError::SessionNotFound)),
        "expected SessionNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_marker() {
    let result = issue_uc(&InMemoryLoginSessionStore::new(), &MockClock::new())
        .execute(Some("forged-marker".to_owned()))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::SessionNotFound)),
        "expected SessionNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_require_marker() {
    let uc = issue_uc(&InMemoryLoginSessionStore::new(), &MockClock::new());

    for marker in [None, Some(String::new())] {
        let result = uc.execute(marker).await;
        assert!(
            matches!(result, Err(AuthServiceError::Unauthenticated)),
            "expected Unauthenticated, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_reject_credential_after_its_lifetime() {
    let store = InMemoryLoginSessionStore::new();
    // Mint 901 seconds in the past so the credential is already stale in real time.
    let clock = MockClock::new();
    clock.advance(-Duration::seconds(901));
    let out = logged_in(&store, &clock).await;

    let issued = issue_uc(&store, &clock)
        .execute(Some(out.session_id))
        .await
        .unwrap();
    let result = authorize(Some(&issued.access_token), TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredential)),
        "expected InvalidCredential, got {result:?}"
    );
}

#[tokio::test]
async fn should_propagate_store_failure_as_internal() {
    let uc = IssueTokenUseCase {
        sessions: FailingStore,
        clock: MockClock::new(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc.execute(Some("abc".to_owned())).await;
    assert!(
        matches!(result, Err(AuthServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}
