//! # Sentiview Core
//!
//! Data contracts and presentation helpers for the sentiview stock sentiment
//! dashboard.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`classify`] | Score to color / class / label threshold classifiers |
//! | [`config`] | Locale and schema settings |
//! | [`domain`] | Typed, validated records (companies, summaries, tweets, tables) |
//! | [`envelope`] | Response envelope stamped with locale and fixture source |
//! | [`error`] | Core error types |
//! | [`fixtures`] | Immutable fixture store with the shipped data set |
//! | [`format`] | Locale-aware number formatting |
//! | [`lookup`] | Company names, logo paths, ticker aliases, search |
//! | [`routes`] | Navigation table |
//!
//! ## Quick Start
//!
//! ```rust
//! use sentiview_core::{sentiment_class, FixtureStore, RouteTable};
//!
//! let store = FixtureStore::builtin();
//! let score = store.sentiment().overall.score;
//!
//! assert_eq!(store.company_name("AAPL"), "Apple Inc.");
//! assert_eq!(sentiment_class(score), "positive");
//! assert!(RouteTable::default().resolve("/").is_some());
//! ```
//!
//! Nothing in this crate performs I/O or holds mutable state; every value is
//! safe to share across threads.

pub mod classify;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod lookup;
pub mod routes;

pub use classify::{
    correlation_class, correlation_label, sentiment_class, sentiment_color, CorrelationStrength,
    SentimentTier,
};
pub use config::DashboardConfig;
pub use domain::{
    Company, ComparisonRow, CorrelationRow, IsoDate, OverallSentiment, Prediction, PricePoint,
    SentimentDistribution, SentimentPoint, SentimentSummary, StockSummary, Ticker, Trend,
    TrendChange, Tweet, VolumeBars,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, SCHEMA_VERSION};
pub use error::{CoreError, ValidationError};
pub use fixtures::{FixtureParts, FixtureSource, FixtureStore};
pub use format::{format_number, Locale, NumberFormatter};
pub use lookup::{resolve_company_name, resolve_logo_path, resolve_ticker_alias, search_companies};
pub use routes::{Route, RouteTable, View};
