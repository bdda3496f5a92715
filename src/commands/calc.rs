use crate::OutputFormat;
use crate::duration::{DurationReport, compute_duration, render};
use crate::error::CalcError;
use anyhow::{Context, Result};

/// One-shot calculation. Prints the result and reports whether it succeeded.
pub fn calc(start: &str, end: &str, format: OutputFormat) -> Result<bool> {
    let result = compute_duration(start, end);
    println!("{}", format_result(&result, format)?);
    Ok(result.is_ok())
}

pub fn format_result(
    result: &Result<DurationReport, CalcError>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render(result)),
        OutputFormat::Json => {
            let value = match result {
                Ok(report) => serde_json::to_value(report).context("Failed to serialize report")?,
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            };
            serde_json::to_string_pretty(&value).context("Failed to serialize output")
        }
    }
}
