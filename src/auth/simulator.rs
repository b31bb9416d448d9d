use crate::auth::{Credentials, CredentialStore, Latency};
use crate::domain::NewAccount;
use crate::error::{AuthFailure, AuthFlowError};
use crate::request::{LoginData, RegisterData};
use crate::session_state::SessionState;
use crate::telemetry;
use std::sync::Arc;

/// Fake auth backend: validates a request locally, waits out the
/// simulated latency, then consults the credential store.
pub struct AuthSimulator {
    store: Arc<CredentialStore>,
    latency: Arc<dyn Latency>,
    session: SessionState,
}

impl AuthSimulator {
    pub fn new(store: Arc<CredentialStore>, latency: Arc<dyn Latency>) -> Self {
        Self {
            store,
            latency,
            session: SessionState::default(),
        }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Validation failures return before any waiting. A rejected login
    /// leaves the session as it was.
    #[tracing::instrument(
        name = "Login",
        skip(self, data),
        fields(identifier = tracing::field::Empty)
    )]
    pub async fn login(&self, data: LoginData) -> Result<(), AuthFlowError> {
        let credentials: Credentials = data.try_into()?;
        telemetry::record_field("identifier", credentials.identifier.as_ref());

        self.latency.wait().await;

        if !self.store.verify(&credentials).await {
            tracing::info!("No account matches the submitted credentials");
            return Err(AuthFailure::InvalidCredentials.into());
        }
        self.session.log_in();
        Ok(())
    }

    /// Registration never logs the new account in.
    #[tracing::instrument(
        name = "Register",
        skip(self, data),
        fields(identifier = tracing::field::Empty)
    )]
    pub async fn register(&self, data: RegisterData) -> Result<(), AuthFlowError> {
        let new_account: NewAccount = data.try_into()?;
        telemetry::record_field("identifier", new_account.identifier());

        self.latency.wait().await;

        self.store.insert(new_account.into()).await.map_err(|e| {
            tracing::info!("Refused to register a duplicate identifier");
            e
        })?;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_logged_in()
    }

    #[tracing::instrument(name = "Logout", skip(self))]
    pub fn log_out(&self) {
        self.session.log_out();
    }
}
