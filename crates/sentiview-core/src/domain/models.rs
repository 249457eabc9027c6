use serde::{Deserialize, Serialize};

use crate::{IsoDate, Ticker, Trend, ValidationError};

/// Upper bound of the sentiment score scale.
pub const MAX_SENTIMENT_SCORE: f64 = 10.0;

/// A company shown in the dashboard picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Ticker,
    pub name: String,
}

impl Company {
    pub fn new(id: Ticker, name: impl Into<String>) -> Result<Self, ValidationError> {
        let company = Self {
            id,
            name: name.into(),
        };
        company.validate()?;
        Ok(company)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("name", &self.name)
    }
}

/// Headline sentiment figure with its label and recent movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSentiment {
    pub score: f64,
    pub label: String,
    pub trend: Trend,
    pub change: f64,
}

/// A direction paired with the percentage it moved by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendChange {
    pub trend: Trend,
    pub change: f64,
}

/// Share of positive, neutral and negative posts, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

impl SentimentDistribution {
    pub fn new(positive: u8, neutral: u8, negative: u8) -> Result<Self, ValidationError> {
        let distribution = Self {
            positive,
            neutral,
            negative,
        };
        distribution.validate()?;
        Ok(distribution)
    }

    pub const fn total(&self) -> u32 {
        self.positive as u32 + self.neutral as u32 + self.negative as u32
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let total = self.total();
        if total != 100 {
            return Err(ValidationError::DistributionSum { total });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub date: IsoDate,
    pub score: f64,
}

/// Aggregated sentiment panel: headline score, tweet volume, split and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    pub overall: OverallSentiment,
    pub tweet_volume: u64,
    pub volume_trend: TrendChange,
    pub distribution: SentimentDistribution,
    pub timeline: Vec<SentimentPoint>,
}

impl SentimentSummary {
    pub fn new(
        overall: OverallSentiment,
        tweet_volume: u64,
        volume_trend: TrendChange,
        distribution: SentimentDistribution,
        timeline: Vec<SentimentPoint>,
    ) -> Result<Self, ValidationError> {
        let summary = Self {
            overall,
            tweet_volume,
            volume_trend,
            distribution,
            timeline,
        };
        summary.validate()?;
        Ok(summary)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_score("overall.score", self.overall.score)?;
        validate_not_empty("overall.label", &self.overall.label)?;
        validate_finite("overall.change", self.overall.change)?;
        validate_finite("volumeTrend.change", self.volume_trend.change)?;
        self.distribution.validate()?;

        for point in &self.timeline {
            validate_score("timeline.score", point.score)?;
        }
        validate_chronological(self.timeline.iter().map(|point| point.date))
    }
}

/// Model output attached to the stock panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub direction: Trend,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: IsoDate,
    pub price: f64,
}

/// Stock panel: last price, daily move, prediction and price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub prediction: Prediction,
    pub timeline: Vec<PricePoint>,
}

impl StockSummary {
    pub fn new(
        current_price: f64,
        change: f64,
        change_percent: f64,
        prediction: Prediction,
        timeline: Vec<PricePoint>,
    ) -> Result<Self, ValidationError> {
        let summary = Self {
            current_price,
            change,
            change_percent,
            prediction,
            timeline,
        };
        summary.validate()?;
        Ok(summary)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_positive("currentPrice", self.current_price)?;
        validate_finite("change", self.change)?;
        validate_finite("changePercent", self.change_percent)?;
        validate_range(
            "prediction.confidence",
            self.prediction.confidence,
            0.0,
            100.0,
        )?;

        for point in &self.timeline {
            validate_positive("timeline.price", point.price)?;
        }
        validate_chronological(self.timeline.iter().map(|point| point.date))
    }
}

/// A sample post shown in the "top tweets" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub author: String,
    pub avatar: String,
    pub text: String,
    pub sentiment: f64,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    /// Relative display time such as `2h ago`.
    pub time: String,
}

impl Tweet {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        author: impl Into<String>,
        avatar: impl Into<String>,
        text: impl Into<String>,
        sentiment: f64,
        likes: u64,
        retweets: u64,
        replies: u64,
        time: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let tweet = Self {
            author: author.into(),
            avatar: avatar.into(),
            text: text.into(),
            sentiment,
            likes,
            retweets,
            replies,
            time: time.into(),
        };
        tweet.validate()?;
        Ok(tweet)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("author", &self.author)?;
        validate_not_empty("text", &self.text)?;
        validate_score("sentiment", self.sentiment)
    }
}

/// One row of the sentiment/price correlation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationRow {
    pub label: String,
    pub sentiment: f64,
    pub stock_change: f64,
    pub correlation: f64,
    pub accuracy: f64,
}

impl CorrelationRow {
    pub fn new(
        label: impl Into<String>,
        sentiment: f64,
        stock_change: f64,
        correlation: f64,
        accuracy: f64,
    ) -> Result<Self, ValidationError> {
        let row = Self {
            label: label.into(),
            sentiment,
            stock_change,
            correlation,
            accuracy,
        };
        row.validate()?;
        Ok(row)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("label", &self.label)?;
        validate_score("sentiment", self.sentiment)?;
        validate_finite("stockChange", self.stock_change)?;
        validate_range("correlation", self.correlation, -1.0, 1.0)?;
        validate_range("accuracy", self.accuracy, 0.0, 100.0)
    }
}

/// One row of the peer comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub id: Ticker,
    pub name: String,
    pub sentiment: f64,
    pub stock_trend: Trend,
    pub stock_change: f64,
}

impl ComparisonRow {
    pub fn new(
        id: Ticker,
        name: impl Into<String>,
        sentiment: f64,
        stock_trend: Trend,
        stock_change: f64,
    ) -> Result<Self, ValidationError> {
        let row = Self {
            id,
            name: name.into(),
            sentiment,
            stock_trend,
            stock_change,
        };
        row.validate()?;
        Ok(row)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("name", &self.name)?;
        validate_score("sentiment", self.sentiment)?;
        validate_finite("stockChange", self.stock_change)
    }
}

/// Bar heights for the tweet volume chart, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeBars(Vec<u64>);

impl VolumeBars {
    pub fn new(bars: Vec<u64>) -> Self {
        Self(bars)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tallest bar, used to scale the chart.
    pub fn peak(&self) -> Option<u64> {
        self.0.iter().copied().max()
    }
}

fn validate_not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}

fn validate_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

fn validate_score(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_range(field, value, 0.0, MAX_SENTIMENT_SCORE)
}

fn validate_chronological(
    dates: impl Iterator<Item = IsoDate>,
) -> Result<(), ValidationError> {
    let mut previous: Option<IsoDate> = None;
    for (index, date) in dates.enumerate() {
        if previous.is_some_and(|prev| date <= prev) {
            return Err(ValidationError::TimelineNotChronological { index });
        }
        previous = Some(date);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn day(d: u8) -> IsoDate {
        let date = match d {
            1 => date!(2023 - 04 - 01),
            2 => date!(2023 - 04 - 02),
            _ => date!(2023 - 04 - 03),
        };
        IsoDate::from_date(date)
    }

    #[test]
    fn rejects_distribution_not_summing_to_hundred() {
        let err = SentimentDistribution::new(60, 25, 13).expect_err("must fail");
        assert_eq!(err, ValidationError::DistributionSum { total: 98 });
    }

    #[test]
    fn rejects_out_of_order_timeline() {
        let prediction = Prediction {
            direction: Trend::Up,
            confidence: 50.0,
        };
        let timeline = vec![
            PricePoint {
                date: day(2),
                price: 10.0,
            },
            PricePoint {
                date: day(1),
                price: 11.0,
            },
        ];
        let err = StockSummary::new(11.0, 1.0, 10.0, prediction, timeline).expect_err("must fail");
        assert_eq!(err, ValidationError::TimelineNotChronological { index: 1 });
    }

    #[test]
    fn rejects_duplicate_timeline_dates() {
        let err = validate_chronological([day(1), day(3), day(3)].into_iter())
            .expect_err("must fail");
        assert_eq!(err, ValidationError::TimelineNotChronological { index: 2 });
    }

    #[test]
    fn rejects_non_positive_price() {
        let prediction = Prediction {
            direction: Trend::Down,
            confidence: 10.0,
        };
        let err = StockSummary::new(0.0, 0.0, 0.0, prediction, Vec::new()).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonPositiveValue {
                field: "currentPrice"
            }
        ));
    }

    #[test]
    fn rejects_correlation_outside_unit_interval() {
        let err = CorrelationRow::new("Last Week", 7.0, 1.0, 1.2, 80.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "correlation",
                ..
            }
        ));
    }

    #[test]
    fn rejects_comparison_row_above_score_scale() {
        let id = Ticker::parse("NFLX").expect("valid ticker");
        let err = ComparisonRow::new(id, "Netflix", 10.5, Trend::Up, 0.4).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "sentiment",
                ..
            }
        ));
    }

    #[test]
    fn rejects_nan_sentiment() {
        let err = Tweet::new("a", "", "text", f64::NAN, 0, 0, 0, "1h ago").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonFiniteValue { field: "sentiment" }
        ));
    }

    #[test]
    fn serializes_summary_fields_in_camel_case() {
        let summary = SentimentSummary::new(
            OverallSentiment {
                score: 7.0,
                label: String::from("Positive"),
                trend: Trend::Up,
                change: 1.0,
            },
            10,
            TrendChange {
                trend: Trend::Down,
                change: -2.0,
            },
            SentimentDistribution::new(50, 30, 20).expect("valid"),
            vec![SentimentPoint {
                date: day(1),
                score: 7.0,
            }],
        )
        .expect("valid summary");

        let json = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(json["tweetVolume"], 10);
        assert_eq!(json["volumeTrend"]["trend"], "down");
        assert_eq!(json["timeline"][0]["date"], "2023-04-01");
    }

    #[test]
    fn volume_bars_report_peak() {
        assert_eq!(VolumeBars::new(vec![3, 9, 4]).peak(), Some(9));
        assert_eq!(VolumeBars::default().peak(), None);
    }
}
