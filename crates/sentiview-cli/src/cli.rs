//! CLI argument definitions for sentiview.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `companies` | List registered companies with logo paths |
//! | `company` | Show one company by id |
//! | `search` | Search companies by id prefix or name |
//! | `alias` | Resolve a brand name to its ticker |
//! | `sentiment` | Sentiment summary panel |
//! | `stock` | Stock summary panel |
//! | `tweets` | Top tweets with sentiment badges |
//! | `correlation` | Sentiment/price correlation table |
//! | `comparison` | Peer comparison table |
//! | `volume` | Tweet volume chart bars |
//! | `classify` | Classify a sentiment score or correlation |
//! | `format` | Format a number for the active locale |
//! | `routes` | Show or resolve the navigation table |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--locale` | `$SENTIVIEW_LOCALE` or `en-US` | Number formatting locale |
//! | `--fixtures` | built-in | JSON file replacing the shipped fixtures |
//! | `--log-level` | `$RUST_LOG` or `warn` | Tracing filter for stderr logs |
//!
//! # Examples
//!
//! ```bash
//! sentiview company AAPL --pretty
//! sentiview classify sentiment 6.9
//! sentiview format 24863 --locale de-DE
//! sentiview routes --resolve /
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Stock sentiment dashboard data on the command line.
#[derive(Debug, Parser)]
#[command(
    name = "sentiview",
    author,
    version,
    about = "Stock sentiment dashboard data and helpers",
    long_about = "sentiview prints the dashboard's fixture data and presentation helpers \
as structured envelopes:\n\
\n\
  • Companies, sentiment and stock panels, tweets, correlation and comparison tables\n\
  • Sentiment and correlation classifiers\n\
  • Locale-aware number formatting\n\
  • The navigation table\n\
\n\
Use 'sentiview <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Locale for number formatting (en-US, en-GB, en-IN, de-DE, de-CH, fr-FR).
    ///
    /// Falls back to SENTIVIEW_LOCALE, then en-US.
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// JSON file with fixture data to use instead of the built-in set.
    #[arg(long, global = true)]
    pub fixtures: Option<PathBuf>,

    /// Tracing filter directive, e.g. `debug` or `sentiview_core=trace`.
    ///
    /// Falls back to RUST_LOG, then `warn`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one envelope per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered companies with their logo paths.
    Companies,

    /// Show a company's name, logo path and comparison row.
    ///
    /// Unknown ids are echoed back as the name, with a warning.
    ///
    /// # Examples
    ///
    ///   sentiview company AAPL
    ///   sentiview company META --strict
    Company(CompanyArgs),

    /// Search companies by id prefix or name substring.
    Search(SearchArgs),

    /// Resolve a brand or product name (e.g. Youtube) to a ticker.
    Alias(AliasArgs),

    /// Sentiment summary panel with classes and formatted volume.
    Sentiment,

    /// Stock summary panel with formatted prices.
    Stock,

    /// Top tweets with sentiment badges.
    Tweets(TweetsArgs),

    /// Sentiment/price correlation table.
    Correlation,

    /// Peer comparison table.
    Comparison,

    /// Tweet volume chart bars.
    Volume,

    /// Classify a sentiment score or a correlation coefficient.
    Classify(ClassifyArgs),

    /// Format a number for the active locale.
    ///
    /// # Examples
    ///
    ///   sentiview format 24863
    ///   sentiview format -1234.5 --locale fr-FR
    Format(FormatArgs),

    /// Show the navigation table, or resolve a single path.
    Routes(RoutesArgs),
}

/// Arguments for the `company` command.
#[derive(Debug, Args)]
pub struct CompanyArgs {
    /// Company id, matched case-sensitively (e.g. AAPL).
    pub id: String,
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form query (id prefix or part of the name).
    pub query: String,

    /// Maximum number of results to return.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

/// Arguments for the `alias` command.
#[derive(Debug, Args)]
pub struct AliasArgs {
    /// Brand, product or ticker name.
    pub name: String,
}

/// Arguments for the `tweets` command.
#[derive(Debug, Args)]
pub struct TweetsArgs {
    /// Only show the first N tweets.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `classify` command group.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[command(subcommand)]
    pub command: ClassifyCommand,
}

/// Classifier subcommands.
#[derive(Debug, Subcommand)]
pub enum ClassifyCommand {
    /// Classify a 0-10 sentiment score (positive >= 7, neutral >= 5).
    Sentiment {
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },

    /// Classify a correlation coefficient (strong >= 0.7, moderate >= 0.5).
    Correlation {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

/// Arguments for the `format` command.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Number to format.
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

/// Arguments for the `routes` command.
#[derive(Debug, Args)]
pub struct RoutesArgs {
    /// Resolve this exact path instead of listing the table.
    #[arg(long)]
    pub resolve: Option<String>,
}
