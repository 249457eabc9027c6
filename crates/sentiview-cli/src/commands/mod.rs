mod classify;
mod companies;
mod format;
mod panels;
mod routes;
mod tables;

use std::fs;

use sentiview_core::{
    DashboardConfig, Envelope, EnvelopeError, EnvelopeMeta, FixtureSource, FixtureStore, Locale,
    NumberFormatter, RouteTable,
};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Everything a command reads from. Built once per invocation.
pub struct Context {
    pub store: FixtureStore,
    pub source: FixtureSource,
    pub routes: RouteTable,
    pub config: DashboardConfig,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let config = match &cli.locale {
            Some(tag) => DashboardConfig::default().with_locale(tag.parse::<Locale>()?),
            None => DashboardConfig::from_env()?,
        };

        let (store, source) = match &cli.fixtures {
            Some(path) => {
                info!(path = %path.display(), "loading fixtures from file");
                let store = FixtureStore::from_json(&fs::read_to_string(path)?)?;
                let source = FixtureSource::File {
                    path: path.display().to_string(),
                };
                (store, source)
            }
            None => (FixtureStore::builtin(), FixtureSource::Builtin),
        };

        Ok(Self {
            store,
            source,
            routes: RouteTable::default(),
            config,
        })
    }

    pub fn formatter(&self) -> NumberFormatter {
        self.config.number_formatter()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            store: FixtureStore::builtin(),
            source: FixtureSource::Builtin,
            routes: RouteTable::default(),
            config: DashboardConfig::default(),
        }
    }
}

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let context = Context::from_cli(cli)?;
    debug!(locale = %context.config.locale, "context ready");

    let CommandResult {
        data,
        warnings,
        errors,
    } = dispatch(&cli.command, &context)?;

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        &context.config,
        context.source.clone(),
    )?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::new(meta, data, errors).map_err(CliError::from)
}

pub fn dispatch(command: &Command, context: &Context) -> Result<CommandResult, CliError> {
    match command {
        Command::Companies => companies::list(context),
        Command::Company(args) => companies::show(args, context),
        Command::Search(args) => companies::search(args, context),
        Command::Alias(args) => companies::alias(args, context),
        Command::Sentiment => panels::sentiment(context),
        Command::Stock => panels::stock(context),
        Command::Tweets(args) => panels::tweets(args, context),
        Command::Volume => panels::volume(context),
        Command::Correlation => tables::correlation(context),
        Command::Comparison => tables::comparison(context),
        Command::Classify(args) => classify::run(args),
        Command::Format(args) => format::run(args, context),
        Command::Routes(args) => routes::run(args, context),
    }
}
