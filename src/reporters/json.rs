//! JSON reporter
//!
//! Outputs the full report as pretty-printed JSON with the camelCase
//! field names the submission service expects. Useful for machine
//! consumption, piping to jq, or further processing.

use crate::models::{AnalysisReport, SubmissionReport};
use anyhow::Result;

/// Render an evaluation report as JSON
pub fn render(report: &SubmissionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render a static-analysis report as JSON
pub fn render_analysis(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
