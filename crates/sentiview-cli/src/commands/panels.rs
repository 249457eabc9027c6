use serde::Serialize;

use sentiview_core::{NumberFormatter, SentimentSummary, SentimentTier, StockSummary, Tweet};

use crate::cli::TweetsArgs;
use crate::error::CliError;

use super::{CommandResult, Context};

/// Presentation fields computed for a score.
#[derive(Debug, Serialize)]
struct Badge {
    class: &'static str,
    label: &'static str,
    color: &'static str,
}

impl Badge {
    fn for_score(score: f64) -> Self {
        let tier = SentimentTier::classify(score);
        Self {
            class: tier.as_str(),
            label: tier.label(),
            color: tier.color(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SentimentPanel<'a> {
    summary: &'a SentimentSummary,
    badge: Badge,
    formatted_volume: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StockPanel<'a> {
    summary: &'a StockSummary,
    formatted_price: String,
    formatted_change: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TweetCard<'a> {
    #[serde(flatten)]
    tweet: &'a Tweet,
    badge: Badge,
    formatted_likes: String,
    formatted_retweets: String,
    formatted_replies: String,
}

#[derive(Debug, Serialize)]
struct VolumeChart<'a> {
    bars: &'a [u64],
    peak: Option<u64>,
    /// Bar heights as a percentage of the peak.
    heights: Vec<f64>,
}

pub fn sentiment(context: &Context) -> Result<CommandResult, CliError> {
    let summary = context.store.sentiment();
    let panel = SentimentPanel {
        summary,
        badge: Badge::for_score(summary.overall.score),
        formatted_volume: context.formatter().format_count(summary.tweet_volume),
    };

    Ok(CommandResult::ok(serde_json::to_value(panel)?))
}

pub fn stock(context: &Context) -> Result<CommandResult, CliError> {
    let summary = context.store.stock();
    let formatter = context.formatter();

    let panel = StockPanel {
        summary,
        formatted_price: formatter.format(summary.current_price),
        formatted_change: format!(
            "{} ({}%)",
            signed(&formatter, summary.change),
            signed(&formatter, summary.change_percent)
        ),
    };

    Ok(CommandResult::ok(serde_json::to_value(panel)?))
}

/// Formats `value` with an explicit `+` for gains.
fn signed(formatter: &NumberFormatter, value: f64) -> String {
    let formatted = formatter.format(value);
    if value > 0.0 {
        format!("+{formatted}")
    } else {
        formatted
    }
}

pub fn tweets(args: &TweetsArgs, context: &Context) -> Result<CommandResult, CliError> {
    let formatter = context.formatter();
    let limit = args.limit.unwrap_or(usize::MAX);

    let cards: Vec<TweetCard<'_>> = context
        .store
        .top_tweets()
        .iter()
        .take(limit)
        .map(|tweet| TweetCard {
            tweet,
            badge: Badge::for_score(tweet.sentiment),
            formatted_likes: formatter.format_count(tweet.likes),
            formatted_retweets: formatter.format_count(tweet.retweets),
            formatted_replies: formatter.format_count(tweet.replies),
        })
        .collect();

    let result = CommandResult::ok(serde_json::to_value(&cards)?);
    if args.limit == Some(0) {
        return Ok(result.with_warning("--limit 0 returns no tweets"));
    }
    Ok(result)
}

pub fn volume(context: &Context) -> Result<CommandResult, CliError> {
    let bars = context.store.volume_bars();
    let peak = bars.peak();
    let heights = bars
        .as_slice()
        .iter()
        .map(|&bar| match peak {
            Some(peak) if peak > 0 => (bar as f64 / peak as f64 * 1000.0).round() / 10.0,
            _ => 0.0,
        })
        .collect();

    let chart = VolumeChart {
        bars: bars.as_slice(),
        peak,
        heights,
    };
    Ok(CommandResult::ok(serde_json::to_value(chart)?))
}

#[cfg(test)]
mod tests {
    use sentiview_core::{DashboardConfig, FixtureStore, Locale};

    use super::*;

    #[test]
    fn sentiment_panel_carries_badge_and_volume() {
        let result = sentiment(&Context::default()).expect("sentiment");
        assert_eq!(result.data["badge"]["class"], "positive");
        assert_eq!(result.data["badge"]["color"], "#10b981");
        assert_eq!(result.data["formattedVolume"], "24,863");
        assert_eq!(result.data["summary"]["distribution"]["positive"], 62);
    }

    #[test]
    fn stock_panel_formats_for_locale() {
        let context = Context {
            config: DashboardConfig::default().with_locale(Locale::DeDe),
            ..Context::default()
        };
        let result = stock(&context).expect("stock");
        assert_eq!(result.data["formattedPrice"], "178,72");
        assert_eq!(result.data["formattedChange"], "+0,92 (+0,52%)");
    }

    #[test]
    fn stock_change_and_percent_carry_their_own_sign() {
        let mut parts = FixtureStore::builtin().into_parts();
        parts.stock.change = 0.0;
        parts.stock.change_percent = -0.25;
        let context = Context {
            store: FixtureStore::new(parts).expect("valid store"),
            ..Context::default()
        };

        let result = stock(&context).expect("stock");
        assert_eq!(result.data["formattedChange"], "0 (-0.25%)");
    }

    #[test]
    fn signed_prefixes_only_gains() {
        let formatter = NumberFormatter::default();
        assert_eq!(signed(&formatter, 0.52), "+0.52");
        assert_eq!(signed(&formatter, -1.5), "-1.5");
        assert_eq!(signed(&formatter, 0.0), "0");
    }

    #[test]
    fn tweets_respect_limit() {
        let args = TweetsArgs { limit: Some(2) };
        let result = tweets(&args, &Context::default()).expect("tweets");
        let cards = result.data.as_array().expect("array");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0]["author"], "techanalyst");
        assert_eq!(cards[0]["badge"]["label"], "Positive");
        assert_eq!(cards[0]["formattedLikes"], "1,243");
    }

    #[test]
    fn volume_heights_are_relative_to_peak() {
        let result = volume(&Context::default()).expect("volume");
        assert_eq!(result.data["peak"], 90);
        assert_eq!(result.data["heights"][0], 50.0);
        assert_eq!(result.data["heights"][6], 100.0);
    }
}
