//! Spreadsheet report export for problem-tracker.
//!
//! Writes every problem to one worksheet and floats each record's photo over
//! its Image column.

mod error;
mod exporter;
pub mod layout;

pub use error::ExportError;
pub use exporter::{ExportSummary, ReportExporter};
