use serde::Serialize;

use sentiview_core::Locale;

use crate::cli::FormatArgs;
use crate::error::CliError;

use super::{CommandResult, Context};

#[derive(Debug, Serialize)]
struct FormattedNumber {
    value: f64,
    locale: Locale,
    formatted: String,
}

pub fn run(args: &FormatArgs, context: &Context) -> Result<CommandResult, CliError> {
    let formatter = context.formatter();
    let data = serde_json::to_value(FormattedNumber {
        value: args.value,
        locale: formatter.locale(),
        formatted: formatter.format(args.value),
    })?;

    Ok(CommandResult::ok(data))
}
