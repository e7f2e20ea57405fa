//! LLM-backed qualitative evaluation
//!
//! This module owns everything about the external evaluator: the HTTP
//! client with multiple LLM backends (Gemini, Anthropic, OpenAI, Ollama),
//! the evaluation prompt, and the repair-tolerant response parsing. Uses
//! BYOK (bring your own key) - API keys come from environment variables or
//! the user config file.
//!
//! The scoring core never sees any of this: it consumes a typed
//! [`Evaluation`](crate::models::Evaluation) and the pipeline substitutes
//! [`Evaluation::neutral`](crate::models::Evaluation::neutral) whenever
//! this module fails.
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY`: Required for the Gemini backend (default)
//! - `ANTHROPIC_API_KEY`: Required for the Anthropic backend
//! - `OPENAI_API_KEY`: Required for the OpenAI backend

mod client;
mod parse;
mod prompts;

pub use client::{AiClient, AiConfig, LlmBackend, Message, Role};
pub use parse::parse_evaluation;
pub use prompts::build_evaluation_prompt;

use crate::models::{Evaluation, Language, StaticMetrics};
use thiserror::Error;

/// Errors that can occur while obtaining a qualitative evaluation
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Missing API key: {env_var} not set. Get your key at {signup_url}")]
    MissingApiKey { env_var: String, signup_url: String },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse evaluator response: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

pub type EvalResult<T> = Result<T, EvalError>;

/// The qualitative-evaluation collaborator, injected into the pipeline.
///
/// Implementations must be safe to call from parallel workers. Tests
/// substitute fakes; production uses [`LlmEvaluator`].
pub trait Evaluate: Send + Sync {
    fn evaluate(
        &self,
        code: &str,
        language: Language,
        interview_mode: bool,
        metrics: &StaticMetrics,
    ) -> EvalResult<Evaluation>;
}

/// Evaluator that skips the network entirely and returns neutral defaults.
/// Used for offline runs and as the zero-configuration fallback.
pub struct NeutralEvaluator;

impl Evaluate for NeutralEvaluator {
    fn evaluate(
        &self,
        _code: &str,
        _language: Language,
        _interview_mode: bool,
        _metrics: &StaticMetrics,
    ) -> EvalResult<Evaluation> {
        Ok(Evaluation::neutral())
    }
}

/// System prompt shared by every backend
const SYSTEM_PROMPT: &str =
    "You are an expert code reviewer and technical interviewer. You respond with valid JSON only.";

/// Production evaluator: builds the prompt, calls the configured LLM
/// backend, and parses the response.
pub struct LlmEvaluator {
    client: AiClient,
}

impl LlmEvaluator {
    pub fn new(client: AiClient) -> Self {
        Self { client }
    }

    /// Construct from environment variables for the given backend
    pub fn from_env(backend: LlmBackend) -> EvalResult<Self> {
        Ok(Self::new(AiClient::from_env(backend)?))
    }

    pub fn backend(&self) -> LlmBackend {
        self.client.backend()
    }
}

impl Evaluate for LlmEvaluator {
    fn evaluate(
        &self,
        code: &str,
        language: Language,
        interview_mode: bool,
        metrics: &StaticMetrics,
    ) -> EvalResult<Evaluation> {
        let prompt = build_evaluation_prompt(code, language, interview_mode, metrics);
        let response = self
            .client
            .generate(vec![Message::user(prompt)], Some(SYSTEM_PROMPT))?;
        parse_evaluation(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_evaluator_always_succeeds() {
        let result = NeutralEvaluator
            .evaluate("", Language::Java, false, &StaticMetrics::default())
            .unwrap();
        assert_eq!(result, Evaluation::neutral());
    }
}
