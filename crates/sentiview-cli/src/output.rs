use std::io::{self, Write};

use sentiview_core::{Envelope, FixtureSource};
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, envelope, format, pretty)?;
    out.flush()?;
    Ok(())
}

pub fn render_to<W: Write>(
    out: &mut W,
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => {
            let payload = serde_json::to_string(envelope)?;
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => render_table(out, envelope)?,
    }

    Ok(())
}

fn render_table<W: Write>(out: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    writeln!(out, "request_id  : {}", envelope.meta.request_id)?;
    writeln!(out, "schema      : {}", envelope.meta.schema_version)?;
    writeln!(out, "locale      : {}", envelope.meta.locale)?;
    match &envelope.meta.fixtures {
        FixtureSource::Builtin => writeln!(out, "fixtures    : builtin")?,
        FixtureSource::File { path } => writeln!(out, "fixtures    : {path}")?,
    }
    writeln!(out, "generated_at: {}", envelope.meta.generated_at)?;

    if !envelope.meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    writeln!(out, "data:")?;
    match &envelope.data {
        Value::Array(rows) if rows.iter().all(Value::is_object) && !rows.is_empty() => {
            render_rows(out, rows)?;
        }
        other => {
            let pretty_data = serde_json::to_string_pretty(other)?;
            for line in pretty_data.lines() {
                writeln!(out, "  {line}")?;
            }
        }
    }

    if !envelope.errors.is_empty() {
        writeln!(out, "errors:")?;
        for error in &envelope.errors {
            writeln!(out, "  - {}: {}", error.code, error.message)?;
        }
    }

    Ok(())
}

/// Column-aligned rows keyed by the first object's fields.
fn render_rows<W: Write>(out: &mut W, rows: &[Value]) -> Result<(), CliError> {
    let Some(Value::Object(first)) = rows.first() else {
        return Ok(());
    };
    let columns: Vec<&str> = first.keys().map(String::as_str).collect();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| cell_text(row.get(*column)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            cells
                .iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| format!("{column:<width$}"))
        .collect();
    writeln!(out, "  {}", header.join("  ").trim_end())?;

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        writeln!(out, "  {}", line.join("  ").trim_end())?;
    }

    Ok(())
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::from("-"),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use sentiview_core::{DashboardConfig, EnvelopeError, EnvelopeMeta};
    use serde_json::json;

    use super::*;

    fn envelope_with(data: Value, errors: Vec<EnvelopeError>) -> Envelope<Value> {
        let meta = EnvelopeMeta::new(
            "request-12345",
            &DashboardConfig::default(),
            FixtureSource::Builtin,
        )
        .expect("valid meta");
        Envelope::new(meta, data, errors).expect("valid envelope")
    }

    fn envelope(data: Value) -> Envelope<Value> {
        envelope_with(data, Vec::new())
    }

    fn rendered(envelope: &Envelope<Value>, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        render_to(&mut buffer, envelope, format, false).expect("render");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn json_output_is_a_single_line() {
        let output = rendered(&envelope(json!({ "name": "Apple Inc." })), OutputFormat::Json);
        assert_eq!(output.lines().count(), 1);
        let parsed: Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(parsed["data"]["name"], "Apple Inc.");
    }

    #[test]
    fn table_output_aligns_row_columns() {
        let data = json!([
            { "id": "AAPL", "name": "Apple Inc." },
            { "id": "GOOGL", "name": "Alphabet Inc." }
        ]);
        let output = rendered(&envelope(data), OutputFormat::Table);

        assert!(output.contains("  id     name"));
        assert!(output.contains("  AAPL   Apple Inc."));
        assert!(output.contains("  GOOGL  Alphabet Inc."));
    }

    #[test]
    fn table_output_lists_warnings_and_errors() {
        let error = EnvelopeError::new("not_found", "no match").expect("valid error");
        let mut envelope = envelope_with(json!({ "id": "META" }), vec![error]);
        envelope.meta.push_warning("company 'META' is not registered");

        let output = rendered(&envelope, OutputFormat::Table);
        assert!(output.contains("warnings:\n  - company 'META' is not registered"));
        assert!(output.contains("errors:\n  - not_found: no match"));
        assert!(output.contains("\"id\": \"META\""));
        assert!(output.contains("locale      : en-US"));
        assert!(output.contains("fixtures    : builtin"));
    }
}
