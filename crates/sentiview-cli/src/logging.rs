use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::CliError;

const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber. stdout carries only envelopes.
pub fn init(directive: Option<&str>) -> Result<(), CliError> {
    tracing_subscriber::registry()
        .with(build_filter(directive)?)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}

fn build_filter(directive: Option<&str>) -> Result<EnvFilter, CliError> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).map_err(|error| {
            CliError::Command(format!("invalid --log-level '{directive}': {error}"))
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}
