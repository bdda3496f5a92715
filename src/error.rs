use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which of the two input strings a parse failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Errors produced by a single duration calculation.
///
/// The `Display` text of each variant is the exact message shown to users,
/// so downstream consumers matching on output keep working.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(
        "Error parsing dates. Please ensure the format is 'MM/DD/YY, HH:MM:SS AM/PM'. \
         Error: time data '{input}' does not match format '%m/%d/%y, %I:%M:%S %p'"
    )]
    FormatMismatch {
        endpoint: Endpoint,
        input: String,
        reason: String,
    },

    #[error(
        "Error parsing dates. Please ensure the format is 'MM/DD/YY, HH:MM:SS AM/PM'. \
         Error: time data '{input}' is out of range: {reason}"
    )]
    OutOfRange {
        endpoint: Endpoint,
        input: String,
        reason: String,
    },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl CalcError {
    /// The endpoint whose text failed to parse, if this is a format error.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            CalcError::FormatMismatch { endpoint, .. }
            | CalcError::OutOfRange { endpoint, .. } => Some(*endpoint),
            CalcError::Unexpected(_) => None,
        }
    }
}
