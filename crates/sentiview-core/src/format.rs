use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_FRACTION_DIGITS: usize = 3;

/// Locales the number formatter knows separators for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "en-IN")]
    EnIn,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "de-CH")]
    DeCh,
    #[serde(rename = "fr-FR")]
    FrFr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EnIn => "en-IN",
            Self::DeDe => "de-DE",
            Self::DeCh => "de-CH",
            Self::FrFr => "fr-FR",
        }
    }

    const fn group_separator(self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb | Self::EnIn => ",",
            Self::DeDe => ".",
            Self::DeCh => "\u{2019}",
            Self::FrFr => "\u{202f}",
        }
    }

    const fn decimal_separator(self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb | Self::EnIn | Self::DeCh => ".",
            Self::DeDe | Self::FrFr => ",",
        }
    }

    const fn grouping(self) -> Grouping {
        match self {
            Self::EnIn => Grouping::Indian,
            _ => Grouping::Thousands,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "en-in" => Ok(Self::EnIn),
            "de" | "de-de" => Ok(Self::DeDe),
            "de-ch" => Ok(Self::DeCh),
            "fr" | "fr-fr" => Ok(Self::FrFr),
            _ => Err(ValidationError::UnsupportedLocale {
                value: value.trim().to_owned(),
            }),
        }
    }
}

/// Renders numbers the way a default browser number format does for a locale:
/// grouped integer digits, up to three fraction digits, no trailing zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormatter {
    locale: Locale,
}

impl NumberFormatter {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return String::from("NaN");
        }
        if value.is_infinite() {
            return String::from(if value > 0.0 { "∞" } else { "-∞" });
        }

        let rendered = round_half_expand(value.abs());
        let (integer, fraction) = rendered
            .split_once('.')
            .unwrap_or((rendered.as_str(), ""));
        let fraction = fraction.trim_end_matches('0');

        let mut output = String::with_capacity(rendered.len() + 8);
        if value.is_sign_negative() {
            output.push('-');
        }
        output.push_str(&self.group(integer));
        if !fraction.is_empty() {
            output.push_str(self.locale.decimal_separator());
            output.push_str(fraction);
        }
        output
    }

    /// Exact formatting for counts too large to round-trip through `f64`.
    pub fn format_count(&self, value: u64) -> String {
        self.group(&value.to_string())
    }

    fn group(&self, digits: &str) -> String {
        let separator = self.locale.group_separator();
        let mut groups = Vec::new();
        let mut end = digits.len();
        let mut size = 3;

        while end > size {
            groups.push(&digits[end - size..end]);
            end -= size;
            if self.locale.grouping() == Grouping::Indian {
                size = 2;
            }
        }
        groups.push(&digits[..end]);
        groups.reverse();
        groups.join(separator)
    }
}

/// Fixed-point rendering of a finite, non-negative value with ties rounded
/// away from zero.
///
/// `{:.3}` rounds exact decimal ties to even. A double sits exactly halfway
/// between two thousandths only when it is an odd multiple of 1/16, which
/// prints exactly with four digits ending in `5`; those are bumped up by hand.
fn round_half_expand(value: f64) -> String {
    let is_tie = (value * 16.0).fract() == 0.0 && (value * 8.0).fract() != 0.0;
    if !is_tie {
        return format!("{:.*}", MAX_FRACTION_DIGITS, value);
    }

    let mut digits = format!("{:.*}", MAX_FRACTION_DIGITS + 1, value).into_bytes();
    digits.pop();
    for index in (0..digits.len()).rev() {
        match digits[index] {
            b'.' => continue,
            b'9' => digits[index] = b'0',
            digit => {
                digits[index] = digit + 1;
                return String::from_utf8_lossy(&digits).into_owned();
            }
        }
    }
    digits.insert(0, b'1');
    String::from_utf8_lossy(&digits).into_owned()
}

/// Formats `value` with the default `en-US` conventions.
pub fn format_number(value: f64) -> String {
    NumberFormatter::default().format(value)
}
