//! # Domain Models
//!
//! Typed records behind every dashboard panel.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Company`] | Ticker and display name |
//! | [`SentimentSummary`] | Headline score, tweet volume, distribution, timeline |
//! | [`StockSummary`] | Price, daily move, prediction, price timeline |
//! | [`Tweet`] | Sample post with sentiment and engagement counts |
//! | [`CorrelationRow`] | Sentiment vs. price correlation for a period |
//! | [`ComparisonRow`] | Peer company sentiment and price trend |
//! | [`VolumeBars`] | Chart magnitudes for tweet volume |
//! | [`Ticker`] | Validated uppercase company id |
//! | [`Trend`] | `up` / `down` |
//! | [`IsoDate`] | `YYYY-MM-DD` calendar date |
//!
//! ## Validation
//!
//! Constructors check every invariant and return a [`ValidationError`](crate::ValidationError)
//! on failure: scores stay within `[0, 10]`, correlations within `[-1, 1]`,
//! percentages within `[0, 100]`, prices are positive, timelines are strictly
//! chronological and the sentiment distribution sums to 100.
//!
//! ```rust
//! use sentiview_core::{SentimentDistribution, ValidationError};
//!
//! # fn main() -> Result<(), ValidationError> {
//! let ok = SentimentDistribution::new(62, 25, 13)?;
//! assert_eq!(ok.total(), 100);
//!
//! let bad = SentimentDistribution::new(62, 25, 12);
//! assert!(matches!(bad, Err(ValidationError::DistributionSum { total: 99 })));
//! # Ok(())
//! # }
//! ```

mod date;
mod models;
mod ticker;
mod trend;

pub use date::IsoDate;
pub use models::{
    Company, ComparisonRow, CorrelationRow, OverallSentiment, Prediction, PricePoint,
    SentimentDistribution, SentimentPoint, SentimentSummary, StockSummary, TrendChange, Tweet,
    VolumeBars, MAX_SENTIMENT_SCORE,
};
pub use ticker::Ticker;
pub use trend::Trend;
