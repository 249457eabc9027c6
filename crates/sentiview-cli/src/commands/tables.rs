use serde::Serialize;

use sentiview_core::{
    resolve_logo_path, ComparisonRow, CorrelationRow, CorrelationStrength, SentimentTier,
};

use crate::error::CliError;

use super::{CommandResult, Context};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CorrelationLine<'a> {
    #[serde(flatten)]
    row: &'a CorrelationRow,
    strength: &'static str,
    strength_label: &'static str,
    sentiment_class: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonLine<'a> {
    #[serde(flatten)]
    row: &'a ComparisonRow,
    company: &'a str,
    logo: String,
    sentiment_class: &'static str,
    sentiment_color: &'static str,
}

pub fn correlation(context: &Context) -> Result<CommandResult, CliError> {
    let lines: Vec<CorrelationLine<'_>> = context
        .store
        .correlation()
        .iter()
        .map(|row| {
            let strength = CorrelationStrength::classify(row.correlation);
            CorrelationLine {
                row,
                strength: strength.as_str(),
                strength_label: strength.label(),
                sentiment_class: SentimentTier::classify(row.sentiment).as_str(),
            }
        })
        .collect();

    Ok(CommandResult::ok(serde_json::to_value(lines)?))
}

pub fn comparison(context: &Context) -> Result<CommandResult, CliError> {
    let lines: Vec<ComparisonLine<'_>> = context
        .store
        .comparison()
        .iter()
        .map(|row| {
            let tier = SentimentTier::classify(row.sentiment);
            ComparisonLine {
                row,
                company: context.store.company_name(row.id.as_str()),
                logo: resolve_logo_path(row.id.as_str()),
                sentiment_class: tier.as_str(),
                sentiment_color: tier.color(),
            }
        })
        .collect();

    Ok(CommandResult::ok(serde_json::to_value(lines)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_rows_carry_strength() {
        let result = correlation(&Context::default()).expect("correlation");
        assert_eq!(result.data[0]["label"], "Last Week");
        assert_eq!(result.data[0]["strength"], "strong");
        assert_eq!(result.data[2]["strengthLabel"], "Moderate");
        assert_eq!(result.data[2]["stockChange"], -1.23);
    }

    #[test]
    fn comparison_rows_resolve_names_and_logos() {
        let result = comparison(&Context::default()).expect("comparison");
        assert_eq!(result.data[0]["company"], "Apple Inc.");
        assert_eq!(result.data[0]["logo"], "/logos/aapl.png");
        assert_eq!(result.data[2]["sentimentClass"], "positive");
        assert_eq!(result.data[4]["company"], "META");
        assert_eq!(result.data[4]["sentimentClass"], "neutral");
    }
}
