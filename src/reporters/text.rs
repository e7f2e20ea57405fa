//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, StaticMetrics, SubmissionReport};
use anyhow::Result;
use std::fmt::Write;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "\x1b[32m", // Green
        "B" => "\x1b[92m", // Light green
        "C" => "\x1b[33m", // Yellow
        "D" => "\x1b[91m", // Light red
        "F" => "\x1b[31m", // Red
        _ => "\x1b[0m",
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";

fn push_metric(out: &mut String, label: &str, value: u32, flagged: bool) {
    let color = if flagged { YELLOW } else { DIM };
    let _ = writeln!(out, "  {color}{label:<24}{value}{RESET}");
}

fn push_metrics(out: &mut String, metrics: &StaticMetrics) {
    out.push_str(&format!("{BOLD}STATIC ANALYSIS{RESET}\n"));
    push_metric(out, "Nested loops", metrics.nested_loops, metrics.nested_loops >= 3);
    push_metric(out, "Debug statements", metrics.console_logs, metrics.console_logs > 5);
    push_metric(out, "Long functions", metrics.long_functions, metrics.long_functions > 0);
    if metrics.security_risks > 0 {
        let _ = writeln!(
            out,
            "  {RED}{:<24}{}{RESET}",
            "Security risks", metrics.security_risks
        );
    } else {
        push_metric(out, "Security risks", 0, false);
    }
    push_metric(out, "Poor naming", metrics.poor_naming, metrics.poor_naming > 3);
    push_metric(
        out,
        "Missing error handling",
        metrics.missing_error_handling,
        metrics.missing_error_handling > 0,
    );
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("{BOLD}{heading}{RESET}\n"));
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
    out.push('\n');
}

/// Render a full evaluation report as formatted terminal output
pub fn render(report: &SubmissionReport) -> Result<String> {
    let mut out = String::new();
    let grade_c = grade_color(&report.grade);

    out.push_str(&format!("\n{BOLD}DevScore Evaluation{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "DevScore: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}  Language: {}\n\n",
        report.dev_score, report.grade, report.language
    ));

    out.push_str(&format!("{BOLD}SCORES{RESET}\n"));
    let s = &report.scores;
    let _ = writeln!(out, "  Code quality     {:>3}", s.code_quality);
    let _ = writeln!(out, "  Time complexity  {:>3}", s.time_complexity);
    let _ = writeln!(out, "  Space complexity {:>3}", s.space_complexity);
    let _ = writeln!(out, "  Security         {:>3}", s.security);
    let _ = writeln!(out, "  Readability      {:>3}", s.readability);
    let _ = writeln!(
        out,
        "  {DIM}base {:.1}  penalty {} (raw {}){RESET}\n",
        report.base_score, report.applied_penalty, report.static_penalty
    );

    push_metrics(&mut out, &report.metrics);
    out.push('\n');

    push_list(&mut out, "STRENGTHS", &report.feedback.strengths);
    push_list(&mut out, "WEAKNESSES", &report.feedback.weaknesses);
    push_list(&mut out, "SUGGESTIONS", &report.feedback.suggestions);
    push_list(
        &mut out,
        "INTERVIEW QUESTIONS",
        &report.feedback.interview_questions,
    );

    if !report.feedback.detailed_analysis.is_empty() {
        out.push_str(&format!("{BOLD}ANALYSIS{RESET}\n"));
        let _ = writeln!(out, "  {}", report.feedback.detailed_analysis);
    }

    Ok(out)
}

/// Render a static-analysis-only report as formatted terminal output
pub fn render_analysis(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}DevScore Static Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    let _ = writeln!(out, "Language: {}\n", report.language);

    push_metrics(&mut out, &report.metrics);
    let _ = writeln!(
        out,
        "\n  Static penalty: {BOLD}{}{RESET} (doubles to {} of max 10 at scoring)",
        report.static_penalty,
        (report.static_penalty * 2).min(10)
    );

    Ok(out)
}
