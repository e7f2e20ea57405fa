//! C++ analyzer
//!
//! Brace-delimited rule set. The security probes target the legacy C
//! string functions with no bounds checking rather than credential
//! patterns; submitted C++ snippets rarely embed secrets but regularly
//! reach for `strcpy` and friends.

use crate::analyzers::base::{
    brace_loop_nesting, count_distinct_probes, error_handling_flag, long_brace_functions,
    poor_naming, Analyzer, SecurityProbe,
};
use crate::models::StaticMetrics;
use regex::Regex;
use std::sync::OnceLock;

static LOOP_OPEN: OnceLock<Regex> = OnceLock::new();
static FUNCTION_SIGNATURE: OnceLock<Regex> = OnceLock::new();
static COUT_CALL: OnceLock<Regex> = OnceLock::new();
static TRY_BLOCK: OnceLock<Regex> = OnceLock::new();
static CATCH_BLOCK: OnceLock<Regex> = OnceLock::new();
static FILE_OP: OnceLock<Regex> = OnceLock::new();
static SECURITY_PROBES: OnceLock<Vec<SecurityProbe>> = OnceLock::new();

fn loop_open() -> &'static Regex {
    LOOP_OPEN.get_or_init(|| Regex::new(r"(for|while)\s*\([^)]*\)").expect("valid regex"))
}

/// `type name(args) {` — permissive enough to catch free functions and
/// methods without parsing declarations.
fn function_signature() -> &'static Regex {
    FUNCTION_SIGNATURE
        .get_or_init(|| Regex::new(r"\w+\s+\w+\s*\([^)]*\)\s*\{").expect("valid regex"))
}

fn cout_call() -> &'static Regex {
    COUT_CALL.get_or_init(|| Regex::new(r"cout\s*<<").expect("valid regex"))
}

fn try_block() -> &'static Regex {
    TRY_BLOCK.get_or_init(|| Regex::new(r"try\s*\{").expect("valid regex"))
}

fn catch_block() -> &'static Regex {
    CATCH_BLOCK.get_or_init(|| Regex::new(r"catch\s*\(").expect("valid regex"))
}

fn file_op() -> &'static Regex {
    FILE_OP.get_or_init(|| Regex::new(r"fopen|ifstream|ofstream").expect("valid regex"))
}

fn security_probes() -> &'static Vec<SecurityProbe> {
    SECURITY_PROBES.get_or_init(|| {
        vec![
            SecurityProbe::new("gets call", r"gets\s*\("),
            SecurityProbe::new("strcpy call", r"strcpy\s*\("),
            SecurityProbe::new("strcat call", r"strcat\s*\("),
            SecurityProbe::new("sprintf call", r"sprintf\s*\("),
        ]
    })
}

pub struct CppAnalyzer;

impl Analyzer for CppAnalyzer {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn description(&self) -> &'static str {
        "Lexical analysis for C++ submissions"
    }

    fn analyze(&self, code: &str) -> StaticMetrics {
        let try_blocks = try_block().find_iter(code).count();
        let catch_blocks = catch_block().find_iter(code).count();
        let file_ops = file_op().find_iter(code).count();

        StaticMetrics {
            nested_loops: brace_loop_nesting(code, loop_open()),
            console_logs: cout_call().find_iter(code).count() as u32,
            long_functions: long_brace_functions(code, function_signature()),
            security_risks: count_distinct_probes(code, security_probes()),
            poor_naming: poor_naming(code),
            missing_error_handling: error_handling_flag(file_ops, try_blocks, catch_blocks),
        }
    }
}
