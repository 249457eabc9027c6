//! Immutable fixture data backing every dashboard panel.
//!
//! [`FixtureStore::builtin`] is the shipped data set. Consumers receive the
//! store by reference and can only read from it; there is no global instance.
//! The free functions ([`companies`], [`sentiment_summary`], ...) hand out owned
//! copies of the individual shipped fixtures.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::macros::date;
use time::Date;
use tracing::debug;

use crate::lookup;
use crate::CoreError;
use crate::{
    Company, ComparisonRow, CorrelationRow, IsoDate, OverallSentiment, Prediction, PricePoint,
    SentimentDistribution, SentimentPoint, SentimentSummary, StockSummary, Ticker, Trend,
    TrendChange, Tweet, ValidationError, VolumeBars,
};

/// Owned inputs for [`FixtureStore::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureParts {
    pub companies: Vec<Company>,
    pub sentiment: SentimentSummary,
    pub stock: StockSummary,
    pub top_tweets: Vec<Tweet>,
    pub correlation: Vec<CorrelationRow>,
    pub comparison: Vec<ComparisonRow>,
    pub volume_bars: VolumeBars,
}

/// Where a store's records were loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FixtureSource {
    Builtin,
    File { path: String },
}

/// Read-only set of dashboard fixtures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureStore {
    companies: Vec<Company>,
    sentiment: SentimentSummary,
    stock: StockSummary,
    top_tweets: Vec<Tweet>,
    correlation: Vec<CorrelationRow>,
    comparison: Vec<ComparisonRow>,
    volume_bars: VolumeBars,
}

impl FixtureStore {
    /// Builds a store from custom records, checking every invariant.
    pub fn new(parts: FixtureParts) -> Result<Self, ValidationError> {
        let store = Self::from_parts(parts);
        store.validate()?;
        debug!(
            companies = store.companies.len(),
            tweets = store.top_tweets.len(),
            "fixture store validated"
        );
        Ok(store)
    }

    /// Parses a JSON document shaped like [`FixtureParts`] and validates it.
    pub fn from_json(input: &str) -> Result<Self, CoreError> {
        let parts: FixtureParts = serde_json::from_str(input)?;
        Ok(Self::new(parts)?)
    }

    /// The shipped data set.
    pub fn builtin() -> Self {
        Self::from_parts(FixtureParts {
            companies: companies(),
            sentiment: sentiment_summary(),
            stock: stock_summary(),
            top_tweets: top_tweets(),
            correlation: correlation_rows(),
            comparison: comparison_rows(),
            volume_bars: volume_bars(),
        })
    }

    fn from_parts(parts: FixtureParts) -> Self {
        let FixtureParts {
            companies,
            sentiment,
            stock,
            top_tweets,
            correlation,
            comparison,
            volume_bars,
        } = parts;

        Self {
            companies,
            sentiment,
            stock,
            top_tweets,
            correlation,
            comparison,
            volume_bars,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(self.companies.len());
        for company in &self.companies {
            company.validate()?;
            if !seen.insert(company.id.as_str()) {
                return Err(ValidationError::DuplicateCompany {
                    id: company.id.to_string(),
                });
            }
        }

        self.sentiment.validate()?;
        self.stock.validate()?;
        for tweet in &self.top_tweets {
            tweet.validate()?;
        }
        for row in &self.correlation {
            row.validate()?;
        }
        for row in &self.comparison {
            row.validate()?;
        }
        Ok(())
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn sentiment(&self) -> &SentimentSummary {
        &self.sentiment
    }

    pub fn stock(&self) -> &StockSummary {
        &self.stock
    }

    pub fn top_tweets(&self) -> &[Tweet] {
        &self.top_tweets
    }

    pub fn correlation(&self) -> &[CorrelationRow] {
        &self.correlation
    }

    pub fn comparison(&self) -> &[ComparisonRow] {
        &self.comparison
    }

    pub fn volume_bars(&self) -> &VolumeBars {
        &self.volume_bars
    }

    pub fn company(&self, id: &str) -> Option<&Company> {
        lookup::find_company(&self.companies, id)
    }

    /// Display name for `id`, falling back to `id` itself.
    pub fn company_name<'a>(&'a self, id: &'a str) -> &'a str {
        lookup::resolve_company_name(&self.companies, id)
    }

    pub fn comparison_for(&self, id: &str) -> Option<&ComparisonRow> {
        self.comparison.iter().find(|row| row.id == *id)
    }

    pub fn resolve_alias(&self, name: &str) -> Option<Ticker> {
        lookup::resolve_ticker_alias(&self.companies, name)
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<&Company> {
        lookup::search_companies(&self.companies, query, limit)
    }

    pub fn into_parts(self) -> FixtureParts {
        FixtureParts {
            companies: self.companies,
            sentiment: self.sentiment,
            stock: self.stock,
            top_tweets: self.top_tweets,
            correlation: self.correlation,
            comparison: self.comparison,
            volume_bars: self.volume_bars,
        }
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn companies() -> Vec<Company> {
    [
        ("AAPL", "Apple Inc."),
        ("GOOGL", "Alphabet Inc."),
        ("MSFT", "Microsoft Corp."),
        ("AMZN", "Amazon.com Inc."),
        ("NFLX", "Netflix."),
        ("TSLA", "Tesla Inc."),
        ("NVDA", "Nvidia."),
        ("AMD", "AMD"),
    ]
    .into_iter()
    .map(|(id, name)| Company {
        id: Ticker::from_static(id),
        name: name.to_owned(),
    })
    .collect()
}

const TIMELINE_DATES: [Date; 7] = [
    date!(2023 - 04 - 01),
    date!(2023 - 04 - 02),
    date!(2023 - 04 - 03),
    date!(2023 - 04 - 04),
    date!(2023 - 04 - 05),
    date!(2023 - 04 - 06),
    date!(2023 - 04 - 07),
];

pub fn sentiment_summary() -> SentimentSummary {
    let scores = [6.8, 6.9, 7.1, 6.7, 6.5, 6.8, 7.2];

    SentimentSummary {
        overall: OverallSentiment {
            score: 7.2,
            label: String::from("Positive"),
            trend: Trend::Up,
            change: 3.5,
        },
        tweet_volume: 24_863,
        volume_trend: TrendChange {
            trend: Trend::Up,
            change: 12.3,
        },
        distribution: SentimentDistribution {
            positive: 62,
            neutral: 25,
            negative: 13,
        },
        timeline: TIMELINE_DATES
            .into_iter()
            .zip(scores)
            .map(|(date, score)| SentimentPoint {
                date: IsoDate::from_date(date),
                score,
            })
            .collect(),
    }
}

pub fn stock_summary() -> StockSummary {
    let prices = [172.50, 173.75, 175.20, 174.90, 176.30, 177.80, 178.72];

    StockSummary {
        current_price: 178.72,
        change: 0.92,
        change_percent: 0.52,
        prediction: Prediction {
            direction: Trend::Up,
            confidence: 72.5,
        },
        timeline: TIMELINE_DATES
            .into_iter()
            .zip(prices)
            .map(|(date, price)| PricePoint {
                date: IsoDate::from_date(date),
                price,
            })
            .collect(),
    }
}

pub fn top_tweets() -> Vec<Tweet> {
    let tweet = |author: &str,
                 initials: &str,
                 text: &str,
                 sentiment: f64,
                 (likes, retweets, replies): (u64, u64, u64),
                 time: &str| Tweet {
        author: author.to_owned(),
        avatar: format!("https://via.placeholder.com/24?text={initials}"),
        text: text.to_owned(),
        sentiment,
        likes,
        retweets,
        replies,
        time: time.to_owned(),
    };

    vec![
        tweet(
            "techanalyst",
            "TA",
            "Apple's new product announcement exceeded all expectations. The innovation is back! #Apple",
            9.2,
            (1243, 532, 89),
            "2h ago",
        ),
        tweet(
            "investorprime",
            "IP",
            "Strong quarterly results from $AAPL again. Revenue growth in services is the key story here.",
            7.8,
            (876, 321, 54),
            "4h ago",
        ),
        tweet(
            "marketwatcher",
            "MW",
            "Some concerns about supply chain issues affecting next quarter's iPhone production. $AAPL",
            4.2,
            (567, 189, 76),
            "6h ago",
        ),
        tweet(
            "techreview",
            "TR",
            "The new MacBook Pro is impressive but the price point remains a barrier for many consumers.",
            5.5,
            (432, 112, 67),
            "12h ago",
        ),
    ]
}

pub fn correlation_rows() -> Vec<CorrelationRow> {
    [
        ("Last Week", 7.2, 3.45, 0.78, 82.5),
        ("Last Month", 6.8, 2.12, 0.72, 76.3),
        ("Last Quarter", 6.2, -1.23, 0.65, 71.8),
        ("Year to Date", 6.5, 12.87, 0.68, 74.2),
    ]
    .into_iter()
    .map(
        |(label, sentiment, stock_change, correlation, accuracy)| CorrelationRow {
            label: label.to_owned(),
            sentiment,
            stock_change,
            correlation,
            accuracy,
        },
    )
    .collect()
}

pub fn comparison_rows() -> Vec<ComparisonRow> {
    [
        ("AAPL", "Apple", 7.2, Trend::Up, 0.52),
        ("GOOGL", "Google", 6.8, Trend::Up, 0.35),
        ("MSFT", "Microsoft", 7.5, Trend::Up, 0.78),
        ("AMZN", "Amazon", 6.2, Trend::Down, -0.42),
        ("META", "Meta", 5.8, Trend::Down, -0.65),
        ("TSLA", "Tesla", 6.5, Trend::Up, 1.23),
    ]
    .into_iter()
    .map(
        |(id, name, sentiment, stock_trend, stock_change)| ComparisonRow {
            id: Ticker::from_static(id),
            name: name.to_owned(),
            sentiment,
            stock_trend,
            stock_change,
        },
    )
    .collect()
}

pub fn volume_bars() -> VolumeBars {
    VolumeBars::new(vec![45, 60, 75, 55, 80, 65, 90])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_is_valid() {
        FixtureStore::builtin()
            .validate()
            .expect("shipped fixtures must satisfy every invariant");
    }

    #[test]
    fn builtin_distribution_sums_to_hundred() {
        let store = FixtureStore::builtin();
        assert_eq!(store.sentiment().distribution.total(), 100);
    }

    #[test]
    fn rejects_duplicate_company_ids() {
        let mut parts = FixtureStore::builtin().into_parts();
        parts.companies.push(Company {
            id: Ticker::from_static("AAPL"),
            name: String::from("Apple again"),
        });

        let err = FixtureStore::new(parts).expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::DuplicateCompany {
                id: String::from("AAPL")
            }
        );
    }

    #[test]
    fn rejects_invalid_nested_record() {
        let mut parts = FixtureStore::builtin().into_parts();
        parts.sentiment.distribution.negative = 14;

        let err = FixtureStore::new(parts).expect_err("must fail");
        assert_eq!(err, ValidationError::DistributionSum { total: 101 });
    }

    #[test]
    fn accepts_custom_valid_parts() {
        let mut parts = FixtureStore::builtin().into_parts();
        parts.companies.truncate(2);
        parts.volume_bars = VolumeBars::new(vec![1, 2, 3]);

        let store = FixtureStore::new(parts).expect("valid parts");
        assert_eq!(store.companies().len(), 2);
        assert_eq!(store.volume_bars().as_slice(), &[1_u64, 2, 3][..]);
    }

    #[test]
    fn loads_store_from_json() {
        let json = serde_json::to_string(&FixtureStore::builtin()).expect("serialize");
        let store = FixtureStore::from_json(&json).expect("round trip");
        assert_eq!(store, FixtureStore::builtin());
    }

    #[test]
    fn json_loading_reports_invalid_data() {
        let mut parts = FixtureStore::builtin().into_parts();
        parts.stock.prediction.confidence = 140.0;
        let json = serde_json::to_string(&parts).expect("serialize");

        let err = FixtureStore::from_json(&json).expect_err("must fail");
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange {
                field: "prediction.confidence",
                ..
            })
        ));
        assert!(matches!(
            FixtureStore::from_json("{").expect_err("must fail"),
            CoreError::Serialization(_)
        ));
    }

    #[test]
    fn free_functions_match_store() {
        let store = FixtureStore::builtin();
        assert_eq!(store.companies(), companies().as_slice());
        assert_eq!(store.top_tweets(), top_tweets().as_slice());
        assert_eq!(store.volume_bars(), &volume_bars());
    }

    #[test]
    fn comparison_lookup_covers_unlisted_companies() {
        let store = FixtureStore::builtin();
        let meta = store.comparison_for("META").expect("META has a comparison row");
        assert_eq!(meta.stock_trend, Trend::Down);
        assert!(store.company("META").is_none());
        assert_eq!(store.company_name("META"), "META");
    }

    #[test]
    fn store_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FixtureStore>();
    }
}
