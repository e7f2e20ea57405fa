//! Base analyzer trait and shared lexical helpers
//!
//! The analyzers are heuristic by contract: line-oriented regex probes with
//! coarse brace/indentation balancing. Comments and string literals are
//! scanned as plain text, so false positives are expected and tolerated.
//! Nothing in here can fail; malformed input degrades to zero counts.

use crate::models::StaticMetrics;
use regex::Regex;
use std::sync::OnceLock;

/// Nesting depths below this are not reported (shallow nesting is fine)
pub(crate) const MIN_REPORTED_NESTING: u32 = 3;

/// Function bodies spanning more than this many source lines are flagged
pub(crate) const LONG_FUNCTION_LINES: u32 = 50;

/// Generic identifiers that count as a naming violation when overused
const GENERIC_NAMES: &[&str] = &["temp", "tmp", "data", "val", "foo", "bar", "test"];

/// A single security probe: one named dangerous pattern.
///
/// Probes are counted DISTINCTLY: a probe that matches contributes exactly
/// one risk no matter how many times its pattern occurs.
pub(crate) struct SecurityProbe {
    pub name: &'static str,
    pub pattern: Regex,
}

impl SecurityProbe {
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            // Patterns are hardcoded constants; a bad one is a bug, not input
            pattern: Regex::new(pattern).expect("valid probe regex"),
        }
    }
}

/// Trait for all per-family static analyzers
///
/// Implementations must be pure and total: zero side effects, no panics,
/// identical output for identical input, defined for any string including
/// empty text and binary garbage.
pub trait Analyzer: Send + Sync {
    /// Unique identifier for this analyzer
    fn name(&self) -> &'static str;

    /// Human-readable description of the rule set
    fn description(&self) -> &'static str;

    /// Inspect raw source text and produce the metric record
    fn analyze(&self, code: &str) -> StaticMetrics;
}

/// Column of the first non-whitespace character, `None` for blank lines
pub(crate) fn indent_of(line: &str) -> Option<usize> {
    line.chars().position(|c| !c.is_whitespace())
}

/// Opening minus closing braces on one line
pub(crate) fn brace_delta(line: &str) -> i32 {
    let opens = line.chars().filter(|&c| c == '{').count() as i32;
    let closes = line.chars().filter(|&c| c == '}').count() as i32;
    opens - closes
}

/// Max loop-nesting depth for brace-delimited languages.
///
/// A line matching the loop-open pattern increments the counter; a line
/// containing `}` decrements it once (floored at 0). This under-counts
/// when multiple closing braces share a line; that imprecision is part of
/// the contract. Depths below [`MIN_REPORTED_NESTING`] report as 0.
pub(crate) fn brace_loop_nesting(code: &str, loop_open: &Regex) -> u32 {
    let mut max_nesting = 0u32;
    let mut current = 0u32;

    for line in code.lines() {
        if loop_open.is_match(line) {
            current += 1;
            max_nesting = max_nesting.max(current);
        }
        if line.contains('}') {
            current = current.saturating_sub(1);
        }
    }

    if max_nesting >= MIN_REPORTED_NESTING {
        max_nesting
    } else {
        0
    }
}

/// Count function bodies longer than [`LONG_FUNCTION_LINES`] in
/// brace-delimited source.
///
/// A permissive signature pattern opens a span; brace balance returning to
/// zero closes it. A new signature line re-anchors tracking without closing
/// the previous span. A span still open at end-of-input is still evaluated
/// against the threshold.
pub(crate) fn long_brace_functions(code: &str, signature: &Regex) -> u32 {
    let mut count = 0u32;
    let mut in_function = false;
    let mut function_lines = 0u32;
    let mut brace_depth = 0i32;

    for line in code.lines() {
        if signature.is_match(line) {
            in_function = true;
            function_lines = 1;
            brace_depth = brace_delta(line);
        } else if in_function {
            function_lines += 1;
            brace_depth += brace_delta(line);

            if brace_depth == 0 {
                if function_lines > LONG_FUNCTION_LINES {
                    count += 1;
                }
                in_function = false;
            }
        }
    }

    if in_function && function_lines > LONG_FUNCTION_LINES {
        count += 1;
    }

    count
}

/// Count DISTINCT probes that match at least once
pub(crate) fn count_distinct_probes(code: &str, probes: &[SecurityProbe]) -> u32 {
    probes
        .iter()
        .filter(|probe| probe.pattern.is_match(code))
        .count() as u32
}

static SINGLE_CHAR_DECL: OnceLock<Regex> = OnceLock::new();

fn single_char_decl() -> &'static Regex {
    SINGLE_CHAR_DECL
        .get_or_init(|| Regex::new(r"\b(const|let|var)\s+([a-z])\s*=").expect("valid regex"))
}

static GENERIC_NAME_PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();

fn generic_name_patterns() -> &'static Vec<(&'static str, Regex)> {
    GENERIC_NAME_PATTERNS.get_or_init(|| {
        GENERIC_NAMES
            .iter()
            .map(|name| {
                (
                    *name,
                    Regex::new(&format!(r"\b{name}\b")).expect("valid regex"),
                )
            })
            .collect()
    })
}

/// Naming-quality violations, shared by all three families:
///
/// (a) single-character declaration sites whose bound name is not one of
///     the conventional loop counters `i`, `j`, `k`;
/// (b) each generic identifier (temp, tmp, data, ...) occurring more than
///     twice anywhere in the text, whole-word match only.
pub(crate) fn poor_naming(code: &str) -> u32 {
    let mut issues = 0u32;

    for capture in single_char_decl().captures_iter(code) {
        let var = &capture[2];
        if !matches!(var, "i" | "j" | "k") {
            issues += 1;
        }
    }

    for (_, pattern) in generic_name_patterns() {
        if pattern.find_iter(code).count() > 2 {
            issues += 1;
        }
    }

    issues
}

/// Presence check for the error-handling metric: risky operations exist
/// but the file has no try block or no catch/except block. Not a pairing
/// check; a try block anywhere satisfies the condition.
pub(crate) fn error_handling_flag(risky_ops: usize, try_blocks: usize, catch_blocks: usize) -> u32 {
    if risky_ops > 0 && (try_blocks == 0 || catch_blocks == 0) {
        1
    } else {
        0
    }
}
