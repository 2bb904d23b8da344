//! Service layer for problem-tracker
//!
//! The explicitly constructed application context shared by the HTTP handlers
//! and the weekly export scheduler.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod problem_service;
mod scheduler;

pub use error::ServiceError;
pub use problem_service::ProblemService;
pub use scheduler::{run_export_job, start_weekly_export};
