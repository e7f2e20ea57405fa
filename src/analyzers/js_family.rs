//! JavaScript/TypeScript analyzer
//!
//! Lexical rule set for the C-brace scripting family. TypeScript shares
//! every probe with JavaScript; type annotations are just text to these
//! heuristics.

use crate::analyzers::base::{
    brace_loop_nesting, count_distinct_probes, error_handling_flag, long_brace_functions,
    poor_naming, Analyzer, SecurityProbe,
};
use crate::models::StaticMetrics;
use regex::Regex;
use std::sync::OnceLock;

static LOOP_OPEN: OnceLock<Regex> = OnceLock::new();
static FUNCTION_SIGNATURE: OnceLock<Regex> = OnceLock::new();
static TRY_BLOCK: OnceLock<Regex> = OnceLock::new();
static CATCH_BLOCK: OnceLock<Regex> = OnceLock::new();
static ASYNC_OP: OnceLock<Regex> = OnceLock::new();
static SECURITY_PROBES: OnceLock<Vec<SecurityProbe>> = OnceLock::new();

fn loop_open() -> &'static Regex {
    LOOP_OPEN.get_or_init(|| Regex::new(r"(for|while)\s*\([^)]*\)").expect("valid regex"))
}

/// Permissive on purpose: named functions, arrow assignments, and bare
/// `name(args) {` method shapes all anchor a span. Control-flow lines like
/// `if (x) {` match too; the brace balance still closes them correctly.
fn function_signature() -> &'static Regex {
    FUNCTION_SIGNATURE.get_or_init(|| {
        Regex::new(
            r"function\s+\w+\s*\([^)]*\)\s*\{|const\s+\w+\s*=\s*\([^)]*\)\s*=>\s*\{|\w+\s*\([^)]*\)\s*\{",
        )
        .expect("valid regex")
    })
}

fn try_block() -> &'static Regex {
    TRY_BLOCK.get_or_init(|| Regex::new(r"try\s*\{").expect("valid regex"))
}

fn catch_block() -> &'static Regex {
    CATCH_BLOCK.get_or_init(|| Regex::new(r"catch\s*\(").expect("valid regex"))
}

fn async_op() -> &'static Regex {
    ASYNC_OP.get_or_init(|| Regex::new(r"await|\.then\(").expect("valid regex"))
}

fn security_probes() -> &'static Vec<SecurityProbe> {
    SECURITY_PROBES.get_or_init(|| {
        vec![
            SecurityProbe::new("hardcoded password", r#"(?i)password\s*=\s*["'][^"']+["']"#),
            SecurityProbe::new("hardcoded API key", r#"(?i)api[_-]?key\s*=\s*["'][^"']+["']"#),
            SecurityProbe::new("hardcoded secret", r#"(?i)secret\s*=\s*["'][^"']+["']"#),
            SecurityProbe::new("hardcoded token", r#"(?i)token\s*=\s*["'][^"']+["']"#),
            SecurityProbe::new("eval call", r"eval\s*\("),
            SecurityProbe::new("concatenated SQL query", r"SELECT.*FROM.*WHERE.*\+"),
        ]
    })
}

pub struct JsFamilyAnalyzer;

impl Analyzer for JsFamilyAnalyzer {
    fn name(&self) -> &'static str {
        "js-family"
    }

    fn description(&self) -> &'static str {
        "Lexical analysis for JavaScript and TypeScript submissions"
    }

    fn analyze(&self, code: &str) -> StaticMetrics {
        let try_blocks = try_block().find_iter(code).count();
        let catch_blocks = catch_block().find_iter(code).count();
        let async_ops = async_op().find_iter(code).count();

        StaticMetrics {
            nested_loops: brace_loop_nesting(code, loop_open()),
            console_logs: code.matches("console.log").count() as u32,
            long_functions: long_brace_functions(code, function_signature()),
            security_risks: count_distinct_probes(code, security_probes()),
            poor_naming: poor_naming(code),
            missing_error_handling: error_handling_flag(async_ops, try_blocks, catch_blocks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(code: &str) -> StaticMetrics {
        JsFamilyAnalyzer.analyze(code)
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert_eq!(analyze(""), StaticMetrics::default());
        assert_eq!(analyze("\u{0}\u{1}\u{2}ÿþ garbage \u{7f}"), StaticMetrics::default());
    }

    #[test]
    fn test_idempotent() {
        let code = "for (;;) { console.log(x); }";
        assert_eq!(analyze(code), analyze(code));
    }

    #[test]
    fn test_console_log_count() {
        let code = "console.log('a');\nconsole.log('b');\nconsole.error('c');\n";
        assert_eq!(analyze(code).console_logs, 2);
    }

    #[test]
    fn test_triple_nested_loop() {
        let code = "\
for (let i = 0; i < n; i++) {
  for (let j = 0; j < n; j++) {
    while (pending()) {
      step();
    }
  }
}
";
        assert_eq!(analyze(code).nested_loops, 3);
    }

    #[test]
    fn test_double_nested_loop_not_reported() {
        let code = "\
for (let i = 0; i < n; i++) {
  for (let j = 0; j < n; j++) {
    step();
  }
}
";
        assert_eq!(analyze(code).nested_loops, 0);
    }

    #[test]
    fn test_password_and_eval_are_two_risks() {
        let code = "const password = \"abc123\";\neval(userInput);\n";
        assert_eq!(analyze(code).security_risks, 2);
    }

    #[test]
    fn test_all_credential_probes_distinct() {
        let code = concat!(
            "password = 'a'\n",
            "api_key = 'b'\n",
            "secret = 'c'\n",
            "token = 'd'\n",
        );
        assert_eq!(analyze(code).security_risks, 4);
    }

    #[test]
    fn test_sql_concatenation_probe() {
        let code = "db.run(\"SELECT * FROM users WHERE name = '\" + name + \"'\");";
        assert_eq!(analyze(code).security_risks, 1);
    }

    #[test]
    fn test_repeated_eval_counts_once() {
        let code = "eval(a); eval(b); eval(c);";
        assert_eq!(analyze(code).security_risks, 1);
    }

    #[test]
    fn test_long_function_detected() {
        let mut code = String::from("function process(items) {\n");
        for i in 0..60 {
            code.push_str(&format!("  handle(items[{i}]);\n"));
        }
        code.push_str("}\n");
        assert_eq!(analyze(&code).long_functions, 1);
    }

    #[test]
    fn test_arrow_function_signature() {
        let mut code = String::from("const process = (items) => {\n");
        for i in 0..60 {
            code.push_str(&format!("  handle(items[{i}]);\n"));
        }
        code.push_str("}\n");
        assert_eq!(analyze(&code).long_functions, 1);
    }

    #[test]
    fn test_await_without_try_catch() {
        let code = "const res = await fetch(url);\n";
        assert_eq!(analyze(code).missing_error_handling, 1);
    }

    #[test]
    fn test_promise_chain_without_handler() {
        let code = "fetch(url).then(handle);\n";
        assert_eq!(analyze(code).missing_error_handling, 1);
    }

    #[test]
    fn test_await_with_try_catch() {
        let code = "try {\n  const res = await fetch(url);\n} catch (e) {\n  report(e);\n}\n";
        assert_eq!(analyze(code).missing_error_handling, 0);
    }

    #[test]
    fn test_try_without_catch_still_flagged() {
        // Presence check requires both constructs somewhere in the file
        let code = "try {\n  await go();\n} finally {\n  done();\n}\n";
        assert_eq!(analyze(code).missing_error_handling, 1);
    }

    #[test]
    fn test_no_async_no_flag() {
        let code = "function f() { return 1; }\n";
        assert_eq!(analyze(code).missing_error_handling, 0);
    }

    #[test]
    fn test_poor_naming() {
        let code = "let x = 1;\nlet i = 0;\nvar data = [];\nuse(data);\nmore(data);\n";
        // `x` is a violation, `i` is exempt, `data` appears three times
        assert_eq!(analyze(code).poor_naming, 2);
    }
}
