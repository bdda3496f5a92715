pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod timestamp;

pub use duration::{Breakdown, DurationReport, calculate, compute_duration, render};
pub use error::{CalcError, Endpoint};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, ValueEnum, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
