//! Parsing of the `M/D/YY, H:MM:SS AM|PM` timestamp format.
//!
//! Two-digit years resolve into the window starting at [`PIVOT_YEAR`]:
//! `69`..=`99` become 1969..=1999 and `00`..=`68` become 2000..=2068.
//! chrono's own `%y` window starts at 1970, so `69` is shifted back a
//! century after parsing. Values carry no timezone.
//!
//! chrono's parser is looser than the format: it lets a space in the pattern
//! match nothing, skips leading whitespace and reads `%y` from one digit.
//! Input is therefore checked against [`SHAPE`] first; chrono only resolves
//! field values.

use crate::error::{CalcError, Endpoint};
use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// chrono pattern for the accepted input format.
pub const FORMAT: &str = "%m/%d/%y, %I:%M:%S %p";

/// The same format as shown to users.
pub const FORMAT_HINT: &str = "MM/DD/YY, HH:MM:SS AM/PM";

/// First year of the 100-year window two-digit years resolve into.
pub const PIVOT_YEAR: i32 = 1969;

/// Accepted layout. Separating whitespace may repeat but not be omitted.
pub const SHAPE: &str =
    r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{2},\s+[0-9]{1,2}:[0-9]{2}:[0-9]{2}\s+[AaPp][Mm]$";

static SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SHAPE).expect("timestamp shape pattern is valid"));

/// Parse one timestamp. `endpoint` only labels the error.
pub fn parse(text: &str, endpoint: Endpoint) -> Result<NaiveDateTime, CalcError> {
    if !SHAPE_RE.is_match(text) {
        tracing::debug!(%endpoint, input = text, "timestamp did not match format");
        return Err(CalcError::FormatMismatch {
            endpoint,
            input: text.to_string(),
            reason: "input does not have the expected layout".to_string(),
        });
    }

    let out_of_range = |reason: String| {
        tracing::debug!(%endpoint, input = text, %reason, "timestamp field out of range");
        CalcError::OutOfRange {
            endpoint,
            input: text.to_string(),
            reason,
        }
    };

    let parsed =
        NaiveDateTime::parse_from_str(text, FORMAT).map_err(|e| out_of_range(e.to_string()))?;

    // chrono encodes second 60 as a leap second in the nanosecond field.
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(out_of_range("second must be in 0..59".to_string()));
    }

    apply_year_window(parsed)
}

/// Move a parsed timestamp into `PIVOT_YEAR..PIVOT_YEAR + 100`.
fn apply_year_window(ts: NaiveDateTime) -> Result<NaiveDateTime, CalcError> {
    let year = ts.year();
    if year < PIVOT_YEAR + 100 {
        return Ok(ts);
    }
    ts.with_year(year - 100).ok_or_else(|| {
        CalcError::Unexpected(format!("year {} has no counterpart in {}", year, year - 100))
    })
}
