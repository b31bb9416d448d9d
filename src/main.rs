use storefront_auth::configuration;
use storefront_auth::error::BizErrorEnum;
use storefront_auth::startup::Application;
use storefront_auth::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let config = configuration::get_configuration()?;

    // Logs go to stderr, stdout belongs to the rendered screens.
    let subscriber = telemetry::get_subscriber(
        "storefront-auth".into(),
        config.application.log_level.clone(),
        std::io::stderr,
    );
    telemetry::init_subscriber(subscriber)?;

    let application = Application::build(config)?;
    application.run_until_stopped().await?;

    Ok(())
}
