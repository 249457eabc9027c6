use serde::Serialize;

use sentiview_core::{CorrelationStrength, SentimentTier};

use crate::cli::{ClassifyArgs, ClassifyCommand};
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct Classification {
    kind: &'static str,
    input: f64,
    class: &'static str,
    label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
}

pub fn run(args: &ClassifyArgs) -> Result<CommandResult, CliError> {
    let (input, classification) = match args.command {
        ClassifyCommand::Sentiment { score } => {
            let tier = SentimentTier::classify(score);
            (
                score,
                Classification {
                    kind: "sentiment",
                    input: score,
                    class: tier.as_str(),
                    label: tier.label(),
                    color: Some(tier.color()),
                },
            )
        }
        ClassifyCommand::Correlation { value } => {
            let strength = CorrelationStrength::classify(value);
            (
                value,
                Classification {
                    kind: "correlation",
                    input: value,
                    class: strength.as_str(),
                    label: strength.label(),
                    color: None,
                },
            )
        }
    };

    let result = CommandResult::ok(serde_json::to_value(classification)?);
    if input.is_finite() {
        Ok(result)
    } else {
        Ok(result.with_warning(format!(
            "input {input} is not a finite number; classified by plain comparison"
        )))
    }
}
