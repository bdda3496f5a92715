pub mod calc;
pub mod config;
pub mod interactive;
