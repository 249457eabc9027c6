//! Threshold classifiers that turn scores into UI categories.
//!
//! Lower bounds are inclusive. Inputs are never rejected: out-of-range values
//! land in the outermost tier, NaN and negative infinity in the lowest tier,
//! positive infinity in the highest.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Scores at or above this are positive.
pub const POSITIVE_SENTIMENT_THRESHOLD: f64 = 7.0;
/// Scores at or above this (and below positive) are neutral.
pub const NEUTRAL_SENTIMENT_THRESHOLD: f64 = 5.0;
/// Correlations at or above this are strong.
pub const STRONG_CORRELATION_THRESHOLD: f64 = 0.7;
/// Correlations at or above this (and below strong) are moderate.
pub const MODERATE_CORRELATION_THRESHOLD: f64 = 0.5;

/// Sentiment category of a 0-10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTier {
    Positive,
    Neutral,
    Negative,
}

impl SentimentTier {
    pub fn classify(score: f64) -> Self {
        if score >= POSITIVE_SENTIMENT_THRESHOLD {
            Self::Positive
        } else if score >= NEUTRAL_SENTIMENT_THRESHOLD {
            Self::Neutral
        } else {
            Self::Negative
        }
    }

    /// CSS class name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }

    /// Hex color token (green, amber, red).
    pub const fn color(self) -> &'static str {
        match self {
            Self::Positive => "#10b981",
            Self::Neutral => "#f59e0b",
            Self::Negative => "#ef4444",
        }
    }
}

impl Display for SentimentTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength of a sentiment/price correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
}

impl CorrelationStrength {
    pub fn classify(correlation: f64) -> Self {
        if correlation >= STRONG_CORRELATION_THRESHOLD {
            Self::Strong
        } else if correlation >= MODERATE_CORRELATION_THRESHOLD {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }
}

impl Display for CorrelationStrength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn sentiment_color(score: f64) -> &'static str {
    SentimentTier::classify(score).color()
}

pub fn sentiment_class(score: f64) -> &'static str {
    SentimentTier::classify(score).as_str()
}

pub fn correlation_class(correlation: f64) -> &'static str {
    CorrelationStrength::classify(correlation).as_str()
}

pub fn correlation_label(correlation: f64) -> &'static str {
    CorrelationStrength::classify(correlation).label()
}
