//! Evaluation prompt construction
//!
//! One prompt serves every backend. The static analysis results are
//! embedded as JSON so the model can corroborate (or contest) the lexical
//! findings, and the response schema is spelled out verbatim because the
//! parser expects exactly that shape.

use crate::models::{Language, StaticMetrics};

fn mode_instructions(interview_mode: bool) -> &'static str {
    if interview_mode {
        "INTERVIEW MODE ENABLED:\n\
         - Provide tougher, more critical evaluation\n\
         - Include 3-5 challenging follow-up questions\n\
         - Ask about optimization opportunities\n\
         - Challenge edge cases\n\
         - Include behavioral questions about coding approach"
    } else {
        "- Provide balanced, constructive feedback\n\
         - Focus on learning and improvement\n\
         - Include 2-3 relevant follow-up questions"
    }
}

/// Build the full evaluation prompt for one submission
pub fn build_evaluation_prompt(
    code: &str,
    language: Language,
    interview_mode: bool,
    metrics: &StaticMetrics,
) -> String {
    let static_analysis = serde_json::to_string_pretty(metrics).unwrap_or_default();
    let question_count = if interview_mode { "3-5" } else { "2-3" };

    format!(
        "You are an expert code reviewer and technical interviewer. Evaluate the following {language} code.

{mode}

CODE TO EVALUATE:
```{language}
{code}
```

STATIC ANALYSIS RESULTS:
{static_analysis}

Provide a comprehensive evaluation in VALID JSON format with this exact structure:

{{
  \"scores\": {{
    \"codeQuality\": <number 0-100>,
    \"timeComplexity\": <number 0-100>,
    \"spaceComplexity\": <number 0-100>,
    \"security\": <number 0-100>,
    \"readability\": <number 0-100>
  }},
  \"feedback\": {{
    \"strengths\": [<array of 2-4 strength points>],
    \"weaknesses\": [<array of 2-4 weakness points>],
    \"suggestions\": [<array of 3-5 actionable improvements>],
    \"interviewQuestions\": [<array of {question_count} follow-up questions>],
    \"detailedAnalysis\": \"<comprehensive 2-3 paragraph analysis covering: algorithm choice, code structure, potential bugs, performance considerations, and security implications>\"
  }}
}}

SCORING GUIDELINES:
- Code Quality (0-100): Overall structure, design patterns, best practices
- Time Complexity (0-100): Algorithm efficiency, unnecessary operations
- Space Complexity (0-100): Memory usage, data structure choices
- Security (0-100): Vulnerabilities, input validation, secure practices
- Readability (0-100): Naming, comments, code organization

Return ONLY valid JSON, no markdown code blocks or additional text.",
        mode = mode_instructions(interview_mode),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_code_and_language() {
        let prompt = build_evaluation_prompt(
            "print('hi')",
            Language::Python,
            false,
            &StaticMetrics::default(),
        );
        assert!(prompt.contains("```python\nprint('hi')\n```"));
        assert!(prompt.contains("\"codeQuality\""));
        assert!(prompt.contains("\"nestedLoops\": 0"));
    }

    #[test]
    fn test_interview_mode_toggles_instructions() {
        let relaxed =
            build_evaluation_prompt("x", Language::Javascript, false, &StaticMetrics::default());
        let tough =
            build_evaluation_prompt("x", Language::Javascript, true, &StaticMetrics::default());

        assert!(relaxed.contains("balanced, constructive feedback"));
        assert!(relaxed.contains("2-3 follow-up questions"));
        assert!(tough.contains("INTERVIEW MODE ENABLED"));
        assert!(tough.contains("3-5 follow-up questions"));
    }
}
