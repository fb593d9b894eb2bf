#![forbid(unsafe_code)]

//! Run report formatters
//!
//! Formatters for the result of a `checkrun run`: one line per checker plus
//! a final PASSED/FAILED summary. Supports plain text, colored terminal
//! output, and JSONL.

use crate::engine::executor::{CheckerOutcome, CheckerReport, RunResult};
use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};

fn outcome_marker(outcome: &CheckerOutcome) -> &'static str {
    match outcome {
        CheckerOutcome::Passed => "✓",
        CheckerOutcome::Findings { .. } => "✗",
        CheckerOutcome::Skipped(_) => "-",
    }
}

fn outcome_text(report: &CheckerReport) -> String {
    match report.outcome {
        CheckerOutcome::Passed => format!("passed ({} files)", report.files),
        CheckerOutcome::Findings { exit_code } => {
            format!("findings (exit status {exit_code})")
        }
        CheckerOutcome::Skipped(cause) => format!("skipped: {}", cause.as_str()),
    }
}

/// Human-readable formatter for run results
pub struct RunReportHumanFormatter;

impl RunReportHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RunReportHumanFormatter
    }

    /// Format a run result for human consumption, without color
    pub fn format(&self, result: &RunResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Checked {} files with {} checkers:\n",
            result.files_discovered,
            result.reports.len()
        ));
        output.push('\n');

        for report in &result.reports {
            output.push_str(&format!(
                "  {} {}: {}\n",
                outcome_marker(&report.outcome),
                report.id.as_str(),
                outcome_text(report)
            ));
        }

        output.push('\n');
        if result.passed {
            output.push_str("Check PASSED: all checkers passed\n");
        } else {
            output.push_str(&format!(
                "Check FAILED: {} checker(s) reported findings\n",
                result.failures()
            ));
        }

        output
    }

    /// Write the report to a color-capable stream
    pub fn write_colored(
        &self,
        result: &RunResult,
        out: &mut impl WriteColor,
    ) -> std::io::Result<()> {
        writeln!(
            out,
            "Checked {} files with {} checkers:",
            result.files_discovered,
            result.reports.len()
        )?;
        writeln!(out)?;

        for report in &result.reports {
            let color = match report.outcome {
                CheckerOutcome::Passed => Some(Color::Green),
                CheckerOutcome::Findings { .. } => Some(Color::Red),
                CheckerOutcome::Skipped(_) => None,
            };

            write!(out, "  ")?;
            if let Some(color) = color {
                out.set_color(ColorSpec::new().set_fg(Some(color)))?;
            }
            write!(out, "{}", outcome_marker(&report.outcome))?;
            out.reset()?;
            writeln!(out, " {}: {}", report.id.as_str(), outcome_text(report))?;
        }

        writeln!(out)?;
        if result.passed {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "Check PASSED")?;
            out.reset()?;
            writeln!(out, ": all checkers passed")?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "Check FAILED")?;
            out.reset()?;
            writeln!(
                out,
                ": {} checker(s) reported findings",
                result.failures()
            )?;
        }

        Ok(())
    }
}

impl Default for RunReportHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for a checker report
#[derive(Debug, Serialize)]
struct JsonlCheckerReport<'a> {
    checker: &'a str,
    category: &'a str,
    files: usize,
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip_reason: Option<&'a str>,
}

/// JSONL formatter for run results
pub struct RunReportJsonlFormatter;

impl RunReportJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RunReportJsonlFormatter
    }

    /// Format a run result as JSONL, one object per checker
    pub fn format(&self, result: &RunResult) -> String {
        let mut output = String::new();

        for report in &result.reports {
            let (status, exit_code, skip_reason) = match report.outcome {
                CheckerOutcome::Passed => ("passed", None, None),
                CheckerOutcome::Findings { exit_code } => ("findings", Some(exit_code), None),
                CheckerOutcome::Skipped(cause) => ("skipped", None, Some(cause.as_str())),
            };

            let line = JsonlCheckerReport {
                checker: report.id.as_str(),
                category: report.category.as_str(),
                files: report.files,
                status,
                exit_code,
                skip_reason,
            };

            if let Ok(json) = serde_json::to_string(&line) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }
}

impl Default for RunReportJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
