use once_cell::sync::Lazy;
use std::sync::Arc;
use storefront_auth::auth::{AuthSimulator, CredentialStore, NoLatency};
use storefront_auth::configuration;
use storefront_auth::error::AuthFlowError;
use storefront_auth::request::{LoginData, RegisterData};
use storefront_auth::startup::Application;
use storefront_auth::telemetry;
use storefront_auth::view::ViewController;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink types differ, hence the two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber).expect("Failed to init subscriber");
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber).expect("Failed to init subscriber");
    }
});

pub struct TestApp {
    pub store: Arc<CredentialStore>,
    pub simulator: Arc<AuthSimulator>,
}

impl TestApp {
    /// A fresh fixture store behind a simulator that does not wait.
    pub fn spawn_app() -> Self {
        Lazy::force(&TRACING);

        let store = Arc::new(CredentialStore::default());
        let simulator = Arc::new(AuthSimulator::new(store.clone(), Arc::new(NoLatency)));
        Self { store, simulator }
    }

    pub async fn login(&self, identifier: &str, secret: &str) -> Result<(), AuthFlowError> {
        self.simulator
            .login(LoginData::new(identifier, secret))
            .await
    }

    pub async fn register(
        &self,
        identifier: &str,
        secret: &str,
        confirm_secret: &str,
    ) -> Result<(), AuthFlowError> {
        self.simulator
            .register(RegisterData::new(identifier, secret, confirm_secret))
            .await
    }

    pub async fn store_size(&self) -> usize {
        self.store.len().await
    }

    pub fn controller(&self) -> ViewController {
        ViewController::new(self.simulator.clone())
    }
}

/// Feed `script` to the terminal front-end and return everything it printed.
pub async fn run_terminal(script: &str) -> String {
    Lazy::force(&TRACING);

    let mut config = configuration::get_configuration().expect("Failed to read configuration");
    config.application.latency_milliseconds = 0;
    let application = Application::build(config).expect("Failed to build application");

    let mut output = Vec::new();
    application
        .run(script.as_bytes(), &mut output)
        .await
        .expect("The terminal loop failed");
    String::from_utf8(output).expect("Output was not UTF-8")
}
