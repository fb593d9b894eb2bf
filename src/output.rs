//! Output formatters (human and JSONL)

pub mod checker_status;
pub mod run_report;

pub use checker_status::{CheckerStatus, CheckerStatusHumanFormatter, CheckerStatusJsonlFormatter};
pub use run_report::{RunReportHumanFormatter, RunReportJsonlFormatter};
