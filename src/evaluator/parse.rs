//! Repair-tolerant parsing of free-form model output
//!
//! Models are told to return bare JSON but routinely wrap it in markdown
//! code fences anyway. Strip the fences, then parse strictly; anything
//! else is a [`EvalError::ParseError`] and the caller falls back to the
//! neutral evaluation.

use crate::evaluator::{EvalError, EvalResult};
use crate::models::Evaluation;

fn strip_code_fences(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.starts_with("```") {
        trimmed.replace("```json", "").replace("```", "")
    } else {
        trimmed.to_string()
    }
}

/// Parse a model response into a typed evaluation.
///
/// Both `scores` and `feedback` must be present; individual feedback
/// fields may be omitted and default to empty.
pub fn parse_evaluation(content: &str) -> EvalResult<Evaluation> {
    let cleaned = strip_code_fences(content);
    serde_json::from_str(cleaned.trim()).map_err(|e| EvalError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "scores": {
            "codeQuality": 80,
            "timeComplexity": 70,
            "spaceComplexity": 60,
            "security": 90,
            "readability": 85
        },
        "feedback": {
            "strengths": ["clear structure"],
            "weaknesses": ["no tests"],
            "suggestions": ["add tests"],
            "interviewQuestions": ["why this data structure?"],
            "detailedAnalysis": "Solid overall."
        }
    }"#;

    #[test]
    fn test_parse_bare_json() {
        let eval = parse_evaluation(VALID).unwrap();
        assert_eq!(eval.scores.code_quality, 80);
        assert_eq!(eval.scores.space_complexity, 60);
        assert_eq!(eval.feedback.strengths, vec!["clear structure"]);
    }

    #[test]
    fn test_parse_json_fenced() {
        let fenced = format!("```json\n{VALID}\n```");
        let eval = parse_evaluation(&fenced).unwrap();
        assert_eq!(eval.scores.security, 90);
    }

    #[test]
    fn test_parse_plain_fenced() {
        let fenced = format!("```\n{VALID}\n```");
        let eval = parse_evaluation(&fenced).unwrap();
        assert_eq!(eval.scores.readability, 85);
    }

    #[test]
    fn test_parse_with_surrounding_whitespace() {
        let padded = format!("\n\n  {VALID}  \n");
        assert!(parse_evaluation(&padded).is_ok());
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let err = parse_evaluation("I'm sorry, I can't evaluate that.").unwrap_err();
        assert!(matches!(err, EvalError::ParseError(_)));
    }

    #[test]
    fn test_missing_scores_is_parse_error() {
        let err = parse_evaluation(r#"{"feedback": {}}"#).unwrap_err();
        assert!(matches!(err, EvalError::ParseError(_)));
    }

    #[test]
    fn test_missing_feedback_is_parse_error() {
        let payload = r#"{"scores": {"codeQuality": 1, "timeComplexity": 1,
            "spaceComplexity": 1, "security": 1, "readability": 1}}"#;
        let err = parse_evaluation(payload).unwrap_err();
        assert!(matches!(err, EvalError::ParseError(_)));
    }

    #[test]
    fn test_partial_feedback_fields_default() {
        let payload = r#"{
            "scores": {"codeQuality": 10, "timeComplexity": 20,
                       "spaceComplexity": 30, "security": 40, "readability": 50},
            "feedback": {"strengths": ["ok"]}
        }"#;
        let eval = parse_evaluation(payload).unwrap();
        assert_eq!(eval.feedback.strengths, vec!["ok"]);
        assert!(eval.feedback.weaknesses.is_empty());
        assert!(eval.feedback.detailed_analysis.is_empty());
    }
}
