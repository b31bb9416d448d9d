use crate::helpers::TestApp;
use claims::{assert_err, assert_ok};
use storefront_auth::domain::InvalidReason;
use storefront_auth::error::{AuthFailure, AuthFlowError};

#[tokio::test]
async fn the_fixture_account_can_log_in() {
    // Arrange
    let app = TestApp::spawn_app();

    // Act
    let outcome = app.login("test@example.com", "123456").await;

    // Assert
    assert_ok!(outcome);
    assert!(app.simulator.is_authenticated());
}

#[tokio::test]
async fn a_wrong_secret_is_an_auth_error_and_the_session_stays_logged_out() {
    let app = TestApp::spawn_app();

    let error = assert_err!(app.login("test@example.com", "wrong").await);

    assert!(matches!(
        error,
        AuthFlowError::AuthError(AuthFailure::InvalidCredentials)
    ));
    assert!(!app.simulator.is_authenticated());
}

#[tokio::test]
async fn an_unknown_identifier_is_an_auth_error() {
    let app = TestApp::spawn_app();

    let error = assert_err!(app.login("nobody@example.com", "123456").await);

    assert!(matches!(error, AuthFlowError::AuthError(_)));
    assert!(!app.simulator.is_authenticated());
}

#[tokio::test]
async fn login_returns_a_validation_error_when_data_is_missing() {
    let app = TestApp::spawn_app();
    let test_cases = vec![
        ("", "123456", "missing the identifier"),
        ("test@example.com", "", "missing the secret"),
        ("", "", "missing both"),
    ];
    for (identifier, secret, error_msg) in test_cases {
        let error = assert_err!(app.login(identifier, secret).await);
        assert!(
            matches!(
                error,
                AuthFlowError::ValidationError(InvalidReason::LoginFieldsMissing)
            ),
            "The login was not rejected locally when {}",
            error_msg
        );
    }
    assert!(!app.simulator.is_authenticated());
}

#[tokio::test]
async fn a_whitespace_identifier_is_looked_up_rather_than_rejected() {
    let app = TestApp::spawn_app();

    let error = assert_err!(app.login("   ", "123456").await);

    assert!(matches!(
        error,
        AuthFlowError::AuthError(AuthFailure::InvalidCredentials)
    ));
}

#[tokio::test]
async fn identifiers_are_case_sensitive() {
    let app = TestApp::spawn_app();

    assert_err!(app.login("Test@Example.com", "123456").await);
}
