//! `devscore analyze` - static metrics only, no network

use crate::cli::resolve_language;
use crate::models::AnalysisReport;
use crate::reporters::{self, OutputFormat};
use crate::{analyzers, scoring};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

pub fn run(file: &Path, language: Option<&str>, format: &str) -> Result<()> {
    let language = resolve_language(file, language)?;
    let code = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    debug!(%language, bytes = code.len(), "analyzing submission");
    let metrics = analyzers::analyze(&code, language);
    let report = AnalysisReport {
        language,
        static_penalty: scoring::static_penalty(&metrics),
        metrics,
    };

    let format: OutputFormat = format.parse()?;
    println!("{}", reporters::render_analysis(&report, format)?);
    Ok(())
}
