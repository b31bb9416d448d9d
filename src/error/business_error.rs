use std::fmt::{Debug, Formatter};

/// Failures of the application shell: configuration, telemetry and
/// terminal I/O. Auth outcomes are reported through `AuthFlowError`.
#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // CONFIGURATION
    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    #[error("The `{0}` setting of the fixture account must not be empty.")]
    InvalidFixtureAccount(&'static str),

    // TELEMETRY
    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),

    // TERMINAL
    #[error("Failed to read a command from stdin.")]
    ReadCommandError(#[source] std::io::Error),

    #[error("Failed to write to stdout.")]
    WriteOutputError(#[source] std::io::Error),
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
