//! Core data models for DevScore
//!
//! These models are used throughout the codebase for representing
//! submission languages, static metrics, qualitative scores, and the
//! final evaluation report.
//!
//! Wire-facing types use camelCase serde names so reports match the
//! submission service's JSON contract.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Source languages accepted from the submission service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Python,
    Cpp,
    Java,
}

impl Language {
    /// Map to the lexical rule set used for static analysis.
    ///
    /// Java has no dedicated analyzer; it returns `None` and callers fall
    /// back to all-zero metrics rather than erroring.
    pub fn family(self) -> Option<LanguageFamily> {
        match self {
            Language::Javascript | Language::Typescript => Some(LanguageFamily::JsFamily),
            Language::Python => Some(LanguageFamily::Python),
            Language::Cpp => Some(LanguageFamily::Cpp),
            Language::Java => None,
        }
    }

    /// Infer the language from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::Javascript),
            "ts" | "tsx" => Some(Language::Typescript),
            "py" => Some(Language::Python),
            "cpp" | "cc" | "cxx" | "c++" | "h" | "hpp" | "hh" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::Javascript),
            "typescript" | "ts" => Ok(Language::Typescript),
            "python" | "py" => Ok(Language::Python),
            "cpp" | "c++" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            _ => Err(anyhow::anyhow!(
                "Unknown language '{}'. Valid languages: javascript, typescript, python, cpp, java",
                s
            )),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Javascript => write!(f, "javascript"),
            Language::Typescript => write!(f, "typescript"),
            Language::Python => write!(f, "python"),
            Language::Cpp => write!(f, "cpp"),
            Language::Java => write!(f, "java"),
        }
    }
}

/// One of the three lexical rule sets behind the analyzers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageFamily {
    /// C-brace-style scripting languages (JavaScript, TypeScript)
    JsFamily,
    /// Indentation-delimited (Python)
    Python,
    /// C++
    Cpp,
}

/// Structural/lexical issue counts for one submission.
///
/// Computed once at evaluation time and never mutated afterward. Every
/// field is a plain count; absence of a pattern yields 0, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticMetrics {
    /// Deepest loop-nesting depth found, reported only when >= 3
    #[serde(default)]
    pub nested_loops: u32,
    /// Count of debug-print/output statements
    #[serde(default)]
    pub console_logs: u32,
    /// Count of function bodies exceeding 50 source lines
    #[serde(default)]
    pub long_functions: u32,
    /// Count of distinct dangerous-pattern probes that matched
    #[serde(default)]
    pub security_risks: u32,
    /// Count of naming-quality violations
    #[serde(default)]
    pub poor_naming: u32,
    /// 1 if risky operations exist without try/catch-equivalent, else 0
    #[serde(default)]
    pub missing_error_handling: u32,
}

/// Five 0-100 dimension scores produced by the qualitative evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitativeScores {
    pub code_quality: u8,
    pub time_complexity: u8,
    pub space_complexity: u8,
    pub security: u8,
    pub readability: u8,
}

impl QualitativeScores {
    /// Neutral defaults used when the evaluator fails or returns junk
    pub fn neutral() -> Self {
        Self {
            code_quality: 50,
            time_complexity: 50,
            space_complexity: 50,
            security: 50,
            readability: 50,
        }
    }
}

/// Structured feedback from the qualitative evaluator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub interview_questions: Vec<String>,
    #[serde(default)]
    pub detailed_analysis: String,
}

/// Full payload returned by the qualitative evaluator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub scores: QualitativeScores,
    pub feedback: Feedback,
}

impl Evaluation {
    /// Fixed fallback when the evaluator is unreachable or unparseable.
    ///
    /// The numeric pipeline still runs on these defaults so a DevScore is
    /// always producible.
    pub fn neutral() -> Self {
        Self {
            scores: QualitativeScores::neutral(),
            feedback: Feedback {
                strengths: vec!["Code submitted successfully".to_string()],
                weaknesses: vec!["Unable to complete full evaluation".to_string()],
                suggestions: vec!["Please try again or contact support".to_string()],
                interview_questions: vec![
                    "What was your approach to solving this problem?".to_string()
                ],
                detailed_analysis: "Evaluation service encountered an issue. \
                                    Please try submitting again."
                    .to_string(),
            },
        }
    }
}

/// Static-analysis-only report (no LLM involved)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub language: Language,
    pub metrics: StaticMetrics,
    pub static_penalty: u32,
}

/// Complete evaluation report for one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub language: Language,
    pub metrics: StaticMetrics,
    pub scores: QualitativeScores,
    pub feedback: Feedback,
    /// Weighted qualitative base before penalty, full precision
    pub base_score: f64,
    /// Raw additive penalty from the static metrics (0-10)
    pub static_penalty: u32,
    /// Penalty actually deducted: doubled then capped at 10
    pub applied_penalty: u32,
    /// Final composite score in [0, 100]
    pub dev_score: u8,
    pub grade: String,
}

impl SubmissionReport {
    /// Calculate letter grade from a DevScore
    pub fn grade_from_score(score: u8) -> String {
        match score {
            s if s >= 90 => "A".to_string(),
            s if s >= 80 => "B".to_string(),
            s if s >= 70 => "C".to_string(),
            s if s >= 60 => "D".to_string(),
            _ => "F".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("javascript".parse::<Language>().unwrap(), Language::Javascript);
        assert_eq!("TS".parse::<Language>().unwrap(), Language::Typescript);
        assert_eq!("c++".parse::<Language>().unwrap(), Language::Cpp);
        assert!("ruby".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_from_extension() {
        assert_eq!(Language::from_extension("tsx"), Some(Language::Typescript));
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("cxx"), Some(Language::Cpp));
        assert_eq!(Language::from_extension("rb"), None);
    }

    #[test]
    fn test_family_mapping() {
        assert_eq!(Language::Javascript.family(), Some(LanguageFamily::JsFamily));
        assert_eq!(Language::Typescript.family(), Some(LanguageFamily::JsFamily));
        assert_eq!(Language::Python.family(), Some(LanguageFamily::Python));
        assert_eq!(Language::Cpp.family(), Some(LanguageFamily::Cpp));
        // Java has no analyzer; callers get the all-zero fallback
        assert_eq!(Language::Java.family(), None);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(SubmissionReport::grade_from_score(100), "A");
        assert_eq!(SubmissionReport::grade_from_score(90), "A");
        assert_eq!(SubmissionReport::grade_from_score(89), "B");
        assert_eq!(SubmissionReport::grade_from_score(70), "C");
        assert_eq!(SubmissionReport::grade_from_score(60), "D");
        assert_eq!(SubmissionReport::grade_from_score(59), "F");
        assert_eq!(SubmissionReport::grade_from_score(0), "F");
    }

    #[test]
    fn test_metrics_serde_camel_case() {
        let metrics = StaticMetrics {
            nested_loops: 3,
            console_logs: 7,
            ..Default::default()
        };
        let json = serde_json::to_value(metrics).unwrap();
        assert_eq!(json["nestedLoops"], 3);
        assert_eq!(json["consoleLogs"], 7);
        assert_eq!(json["missingErrorHandling"], 0);
    }

    #[test]
    fn test_neutral_evaluation() {
        let eval = Evaluation::neutral();
        assert_eq!(eval.scores.code_quality, 50);
        assert_eq!(eval.scores.readability, 50);
        assert_eq!(eval.feedback.strengths.len(), 1);
        assert!(!eval.feedback.detailed_analysis.is_empty());
    }
}
