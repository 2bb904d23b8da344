//! Core types and configuration for problem-tracker
//!
//! Domain types shared across all other crates.

mod config;
mod constants;
pub mod env_config;
mod problem;
mod schedule;

pub use config::*;
pub use constants::*;
pub use problem::*;
pub use schedule::*;
