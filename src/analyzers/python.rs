//! Python analyzer
//!
//! Indentation-delimited rule set. Nesting and function spans are resolved
//! by comparing leading-whitespace columns instead of brace balance.

use crate::analyzers::base::{
    count_distinct_probes, error_handling_flag, indent_of, poor_naming, Analyzer, SecurityProbe,
    LONG_FUNCTION_LINES, MIN_REPORTED_NESTING,
};
use crate::models::StaticMetrics;
use regex::Regex;
use std::sync::OnceLock;

static LOOP_LINE: OnceLock<Regex> = OnceLock::new();
static PRINT_CALL: OnceLock<Regex> = OnceLock::new();
static DEF_LINE: OnceLock<Regex> = OnceLock::new();
static FILE_OPEN: OnceLock<Regex> = OnceLock::new();
static SECURITY_PROBES: OnceLock<Vec<SecurityProbe>> = OnceLock::new();

fn loop_line() -> &'static Regex {
    LOOP_LINE.get_or_init(|| Regex::new(r"^\s*(for|while)\s+").expect("valid regex"))
}

fn print_call() -> &'static Regex {
    PRINT_CALL.get_or_init(|| Regex::new(r"print\s*\(").expect("valid regex"))
}

fn def_line() -> &'static Regex {
    DEF_LINE.get_or_init(|| Regex::new(r"^\s*def\s+\w+\s*\(").expect("valid regex"))
}

fn file_open() -> &'static Regex {
    FILE_OPEN.get_or_init(|| Regex::new(r"open\s*\(").expect("valid regex"))
}

fn security_probes() -> &'static Vec<SecurityProbe> {
    SECURITY_PROBES.get_or_init(|| {
        vec![
            SecurityProbe::new("hardcoded password", r#"(?i)password\s*=\s*["'][^"']+["']"#),
            SecurityProbe::new("hardcoded API key", r#"(?i)api[_-]?key\s*=\s*["'][^"']+["']"#),
            SecurityProbe::new("hardcoded secret", r#"(?i)secret\s*=\s*["'][^"']+["']"#),
            SecurityProbe::new("eval call", r"eval\s*\("),
            SecurityProbe::new("exec call", r"exec\s*\("),
            SecurityProbe::new("unsafe pickle deserialization", r"pickle\.loads"),
        ]
    })
}

/// Indentation column as a signed value; blank lines report -1 and
/// terminate forward scans, same as `line.search(/\S/)` in the original
/// heuristic this mirrors.
fn indent_col(line: &str) -> i64 {
    indent_of(line).map(|c| c as i64).unwrap_or(-1)
}

/// Max loop-nesting depth by forward indentation scan.
///
/// For each loop line, scan forward while indentation stays strictly
/// deeper; every deeper loop line raises the nesting count. Blank lines
/// end the scan. Depths below [`MIN_REPORTED_NESTING`] report as 0.
fn indent_loop_nesting(code: &str) -> u32 {
    let lines: Vec<&str> = code.lines().collect();
    let mut max_nesting = 0u32;

    for (i, line) in lines.iter().enumerate() {
        if !loop_line().is_match(line) {
            continue;
        }
        let indent = indent_col(line);
        let mut nesting = 1u32;

        for next in &lines[i + 1..] {
            let next_indent = indent_col(next);
            if next_indent <= indent {
                break;
            }
            if loop_line().is_match(next) {
                nesting += 1;
                max_nesting = max_nesting.max(nesting);
            }
        }
    }

    if max_nesting >= MIN_REPORTED_NESTING {
        max_nesting
    } else {
        0
    }
}

/// Count `def` bodies longer than [`LONG_FUNCTION_LINES`].
///
/// A function begins at a `def` line and ends at the first non-blank line
/// whose indentation is at or left of the `def` column. A nested `def`
/// re-anchors tracking after evaluating the enclosing span; a span still
/// open at end-of-input is still evaluated.
fn long_def_functions(code: &str) -> u32 {
    let mut count = 0u32;
    let mut in_function = false;
    let mut start_indent = 0i64;
    let mut function_lines = 0u32;

    for line in code.lines() {
        if def_line().is_match(line) {
            if in_function && function_lines > LONG_FUNCTION_LINES {
                count += 1;
            }
            in_function = true;
            start_indent = indent_col(line);
            function_lines = 1;
        } else if in_function {
            let current_indent = indent_col(line);
            if !line.trim().is_empty() && current_indent <= start_indent {
                if function_lines > LONG_FUNCTION_LINES {
                    count += 1;
                }
                in_function = false;
            } else {
                function_lines += 1;
            }
        }
    }

    if in_function && function_lines > LONG_FUNCTION_LINES {
        count += 1;
    }

    count
}

pub struct PythonAnalyzer;

impl Analyzer for PythonAnalyzer {
    fn name(&self) -> &'static str {
        "python"
    }

    fn description(&self) -> &'static str {
        "Lexical analysis for Python submissions"
    }

    fn analyze(&self, code: &str) -> StaticMetrics {
        let try_blocks = code.matches("try:").count();
        let except_blocks = code.matches("except").count();
        let file_ops = file_open().find_iter(code).count();

        StaticMetrics {
            nested_loops: indent_loop_nesting(code),
            console_logs: print_call().find_iter(code).count() as u32,
            long_functions: long_def_functions(code),
            security_risks: count_distinct_probes(code, security_probes()),
            poor_naming: poor_naming(code),
            missing_error_handling: error_handling_flag(file_ops, try_blocks, except_blocks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(code: &str) -> StaticMetrics {
        PythonAnalyzer.analyze(code)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(analyze(""), StaticMetrics::default());
    }

    #[test]
    fn test_triple_nested_loops() {
        let code = "\
for i in range(n):
    for j in range(n):
        while pending:
            step()
";
        assert_eq!(analyze(code).nested_loops, 3);
    }

    #[test]
    fn test_double_nesting_not_reported() {
        let code = "\
for i in range(n):
    for j in range(n):
        step()
";
        assert_eq!(analyze(code).nested_loops, 0);
    }

    #[test]
    fn test_sibling_loops_do_not_nest() {
        let code = "\
for i in range(n):
    step()
for j in range(n):
    step()
for k in range(n):
    step()
";
        assert_eq!(analyze(code).nested_loops, 0);
    }

    #[test]
    fn test_print_count() {
        let code = "print('a')\nprint ('b')\nlogging.info('c')\n";
        assert_eq!(analyze(code).console_logs, 2);
    }

    #[test]
    fn test_long_def_detected() {
        let mut code = String::from("def process(items):\n");
        for i in 0..60 {
            code.push_str(&format!("    handle(items[{i}])\n"));
        }
        code.push_str("done()\n");
        assert_eq!(analyze(&code).long_functions, 1);
    }

    #[test]
    fn test_long_def_at_eof() {
        let mut code = String::from("def process(items):\n");
        for i in 0..60 {
            code.push_str(&format!("    handle(items[{i}])\n"));
        }
        assert_eq!(analyze(&code).long_functions, 1);
    }

    #[test]
    fn test_short_def_not_counted() {
        let code = "def f(x):\n    return x + 1\n";
        assert_eq!(analyze(code).long_functions, 0);
    }

    #[test]
    fn test_consecutive_defs_reanchor() {
        let mut code = String::new();
        for f in 0..2 {
            code.push_str(&format!("def f{f}(x):\n"));
            for i in 0..60 {
                code.push_str(&format!("    y = x + {i}\n"));
            }
        }
        assert_eq!(analyze(&code).long_functions, 2);
    }

    #[test]
    fn test_exec_and_pickle_probes() {
        let code = "exec(payload)\nobj = pickle.loads(blob)\n";
        assert_eq!(analyze(code).security_risks, 2);
    }

    #[test]
    fn test_credential_probes() {
        let code = "password = \"hunter2\"\napi_key = 'sk-123'\n";
        assert_eq!(analyze(code).security_risks, 2);
    }

    #[test]
    fn test_open_without_try_except() {
        let code = "f = open('data.txt')\n";
        assert_eq!(analyze(code).missing_error_handling, 1);
    }

    #[test]
    fn test_open_with_try_except() {
        let code = "try:\n    f = open('data.txt')\nexcept OSError:\n    pass\n";
        assert_eq!(analyze(code).missing_error_handling, 0);
    }

    #[test]
    fn test_no_file_ops_no_flag() {
        let code = "x = compute()\n";
        assert_eq!(analyze(code).missing_error_handling, 0);
    }
}
