//! DevScore aggregation
//!
//! Deterministic, pure numeric composition of the final score. No I/O,
//! no randomness, no state; both functions are total over their inputs.
//!
//! # Scoring Formula
//!
//! ```text
//! base    = 0.30·codeQuality + 0.20·timeComplexity + 0.20·security
//!         + 0.20·readability + 0.10·spaceComplexity
//! applied = min(staticPenalty × 2, 10)
//! score   = clamp(round(base − applied), 0, 100)
//! ```
//!
//! # Static Penalty Table (additive, independently triggered, max 10)
//!
//! - nestedLoops ≥ 3          → +2
//! - consoleLogs > 5          → +1
//! - longFunctions > 0        → +2
//! - securityRisks > 0        → +3
//! - poorNaming > 3           → +1
//! - missingErrorHandling > 0 → +1
//!
//! The raw penalty is doubled in effect then capped at 10 points of the
//! 100-point scale; the cap happens here, not in the penalty table.
//! Intermediate values keep full f64 precision; rounding applies to the
//! final value only.

use crate::models::{QualitativeScores, StaticMetrics};

const W_CODE_QUALITY: f64 = 0.30;
const W_TIME_COMPLEXITY: f64 = 0.20;
const W_SECURITY: f64 = 0.20;
const W_READABILITY: f64 = 0.20;
const W_SPACE_COMPLEXITY: f64 = 0.10;

/// Ceiling on the penalty actually deducted from the base score
const APPLIED_PENALTY_CAP: u32 = 10;

/// Full breakdown of one score computation, kept for audit and display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Weighted qualitative base, full precision
    pub base: f64,
    /// Raw additive penalty from the table above
    pub raw_penalty: u32,
    /// Doubled-then-capped penalty actually deducted
    pub applied_penalty: u32,
    /// Final composite score in [0, 100]
    pub dev_score: u8,
}

/// Convert static metrics into the raw additive penalty (0-10)
pub fn static_penalty(metrics: &StaticMetrics) -> u32 {
    let mut penalty = 0;

    if metrics.nested_loops >= 3 {
        penalty += 2;
    }
    if metrics.console_logs > 5 {
        penalty += 1;
    }
    if metrics.long_functions > 0 {
        penalty += 2;
    }
    if metrics.security_risks > 0 {
        penalty += 3;
    }
    if metrics.poor_naming > 3 {
        penalty += 1;
    }
    if metrics.missing_error_handling > 0 {
        penalty += 1;
    }

    penalty
}

/// Combine qualitative scores and the raw static penalty into the final
/// DevScore. Qualitative inputs are trusted to be in [0, 100]; the final
/// clamp guarantees the output range regardless.
pub fn dev_score(scores: &QualitativeScores, raw_penalty: u32) -> ScoreBreakdown {
    let base = f64::from(scores.code_quality) * W_CODE_QUALITY
        + f64::from(scores.time_complexity) * W_TIME_COMPLEXITY
        + f64::from(scores.security) * W_SECURITY
        + f64::from(scores.readability) * W_READABILITY
        + f64::from(scores.space_complexity) * W_SPACE_COMPLEXITY;

    let applied_penalty = (raw_penalty * 2).min(APPLIED_PENALTY_CAP);
    let final_score = (base - f64::from(applied_penalty))
        .round()
        .clamp(0.0, 100.0);

    ScoreBreakdown {
        base,
        raw_penalty,
        applied_penalty,
        dev_score: final_score as u8,
    }
}
