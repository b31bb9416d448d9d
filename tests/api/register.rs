use crate::helpers::TestApp;
use claims::{assert_err, assert_ok};
use fake::faker::internet::en::{Password, SafeEmail};
use fake::Fake;
use quickcheck::{Arbitrary, Gen};
use storefront_auth::domain::InvalidReason;
use storefront_auth::error::{AuthFailure, AuthFlowError};

#[derive(Debug, Clone)]
struct ShortSecretFixture(pub String);

impl Arbitrary for ShortSecretFixture {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let secret = Password(1..6).fake_with_rng(g);
        Self(secret)
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build runtime")
        .block_on(future)
}

#[quickcheck_macros::quickcheck]
fn secrets_shorter_than_six_are_rejected_locally(secret: ShortSecretFixture) -> bool {
    block_on(async {
        let app = TestApp::spawn_app();
        let outcome = app.register("new@example.com", &secret.0, &secret.0).await;
        matches!(
            outcome,
            Err(AuthFlowError::ValidationError(InvalidReason::SecretIsTooShort))
        ) && app.store_size().await == 1
    })
}

#[tokio::test]
async fn a_mismatched_confirmation_is_rejected_and_the_store_is_unchanged() {
    let app = TestApp::spawn_app();

    let error = assert_err!(app.register("new@example.com", "abcdef", "abcdeg").await);

    assert!(matches!(
        error,
        AuthFlowError::ValidationError(InvalidReason::SecretConfirmationMismatch)
    ));
    assert_eq!(app.store_size().await, 1);
}

#[tokio::test]
async fn a_new_identifier_grows_the_store_by_exactly_one() {
    let app = TestApp::spawn_app();
    let email: String = SafeEmail().fake();

    assert_ok!(app.register(&email, "abcdef", "abcdef").await);

    assert_eq!(app.store_size().await, 2);
    assert!(app.store.contains(&email).await);
}

#[tokio::test]
async fn an_existing_identifier_is_already_registered() {
    let app = TestApp::spawn_app();

    let error = assert_err!(app.register("test@example.com", "abcdef", "abcdef").await);

    assert!(matches!(
        error,
        AuthFlowError::AuthError(AuthFailure::AlreadyRegistered)
    ));
    assert!(error.to_string().contains("already registered"));
    assert_eq!(app.store_size().await, 1);
    // the fixture keeps its original secret
    assert_ok!(app.login("test@example.com", "123456").await);
}

#[tokio::test]
async fn a_registered_account_can_log_in() {
    let app = TestApp::spawn_app();
    let email: String = SafeEmail().fake();
    let secret: String = Password(6..20).fake();

    assert_ok!(app.register(&email, &secret, &secret).await);
    assert!(!app.simulator.is_authenticated());
    assert_ok!(app.login(&email, &secret).await);

    assert!(app.simulator.is_authenticated());
}

#[tokio::test]
async fn registering_twice_only_stores_once() {
    let app = TestApp::spawn_app();

    assert_ok!(app.register("twice@example.com", "abcdef", "abcdef").await);
    assert_err!(app.register("twice@example.com", "abcdef", "abcdef").await);

    assert_eq!(app.store_size().await, 2);
}

#[tokio::test]
async fn presence_is_the_only_check_on_the_identifier() {
    let app = TestApp::spawn_app();

    assert_ok!(app.register("   ", "abcdef", "abcdef").await);

    assert_eq!(app.store_size().await, 2);
    assert_ok!(app.login("   ", "abcdef").await);
}

#[tokio::test]
async fn secret_length_counts_utf16_code_units() {
    let app = TestApp::spawn_app();

    assert_ok!(app.register("thumbs@example.com", "👍👍👍", "👍👍👍").await);
    let decomposed = "e\u{301}".repeat(3);
    assert_ok!(app.register("accent@example.com", &decomposed, &decomposed).await);

    assert_eq!(app.store_size().await, 3);
}

#[tokio::test]
async fn a_whitespace_secret_of_six_is_accepted() {
    let app = TestApp::spawn_app();

    assert_ok!(app.register("user", "      ", "      ").await);

    assert_eq!(app.store_size().await, 2);
}
