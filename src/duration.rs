//! Elapsed time between two timestamps, reported as a magnitude.

use crate::error::{CalcError, Endpoint};
use crate::timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 86_400;

/// Prefix of every successful result.
pub const MESSAGE_PREFIX: &str = "The duration is: ";

/// A non-negative number of seconds split into days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub total_seconds: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Breakdown {
    pub fn from_seconds(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            days: total_seconds / SECS_PER_DAY,
            hours: (total_seconds / SECS_PER_HOUR) % 24,
            minutes: (total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total_seconds % SECS_PER_MINUTE,
        }
    }

    /// Non-zero components, largest unit first. Never empty: a zero
    /// duration yields `"0 seconds"`.
    pub fn components(&self) -> Vec<String> {
        let mut parts: Vec<String> = [
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
        ]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| pluralize(value, unit))
        .collect();

        if self.seconds > 0 || parts.is_empty() {
            parts.push(pluralize(self.seconds, "second"));
        }
        parts
    }

    pub fn describe(&self) -> String {
        self.components().join(", ")
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn pluralize(value: u64, unit: &str) -> String {
    if value == 1 {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

/// Successful calculation: the ordered endpoints and their difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationReport {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(flatten)]
    pub breakdown: Breakdown,
    pub message: String,
}

impl fmt::Display for DurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Parse both timestamps and measure the time between them.
///
/// The endpoints are swapped when `start_text` is later than `end_text`, so
/// the result is the same whichever order they are given in.
pub fn compute_duration(start_text: &str, end_text: &str) -> Result<DurationReport, CalcError> {
    let mut start = timestamp::parse(start_text, Endpoint::Start)?;
    let mut end = timestamp::parse(end_text, Endpoint::End)?;

    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let elapsed = end.signed_duration_since(start).num_seconds();
    let total_seconds =
        u64::try_from(elapsed).map_err(|e| CalcError::Unexpected(e.to_string()))?;
    let breakdown = Breakdown::from_seconds(total_seconds);

    tracing::debug!(%start, %end, total_seconds, "computed duration");

    Ok(DurationReport {
        start,
        end,
        breakdown,
        message: format!("{}{}", MESSAGE_PREFIX, breakdown),
    })
}

/// Flatten a calculation result into the single line shown to users.
pub fn render(result: &Result<DurationReport, CalcError>) -> String {
    match result {
        Ok(report) => report.message.clone(),
        Err(e) => e.to_string(),
    }
}

/// `compute_duration` followed by `render`.
pub fn calculate(start_text: &str, end_text: &str) -> String {
    render(&compute_duration(start_text, end_text))
}
