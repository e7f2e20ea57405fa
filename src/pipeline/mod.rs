//! Submission evaluation pipeline
//!
//! Orchestrates one evaluation: static analysis, the injected qualitative
//! evaluator, then score aggregation. The static and qualitative analyses
//! are independent; an evaluator failure never propagates — the pipeline
//! substitutes neutral defaults and the numeric stage always completes.
//!
//! Both stages are pure and stateless, so batches run fully parallel via
//! rayon with no coordination.

use crate::analyzers;
use crate::evaluator::{Evaluate, NeutralEvaluator};
use crate::models::{Evaluation, Language, SubmissionReport};
use crate::scoring;
use rayon::prelude::*;
use tracing::{debug, warn};

/// One unit of work for batch evaluation
#[derive(Debug, Clone)]
pub struct Submission {
    pub code: String,
    pub language: Language,
    pub interview_mode: bool,
}

/// Evaluation pipeline with an injected qualitative evaluator
pub struct Pipeline {
    evaluator: Box<dyn Evaluate>,
}

impl Pipeline {
    pub fn new(evaluator: Box<dyn Evaluate>) -> Self {
        Self { evaluator }
    }

    /// Pipeline that never touches the network; qualitative scores are the
    /// fixed neutral defaults
    pub fn offline() -> Self {
        Self::new(Box::new(NeutralEvaluator))
    }

    /// Evaluate a single submission end to end.
    ///
    /// Total: produces a valid report for any input text. Evaluator
    /// failures degrade to [`Evaluation::neutral`].
    pub fn evaluate(&self, code: &str, language: Language, interview_mode: bool) -> SubmissionReport {
        let metrics = analyzers::analyze(code, language);
        debug!(?language, ?metrics, "static analysis complete");

        let evaluation = match self
            .evaluator
            .evaluate(code, language, interview_mode, &metrics)
        {
            Ok(evaluation) => evaluation,
            Err(err) => {
                warn!("qualitative evaluation failed, using neutral defaults: {err}");
                Evaluation::neutral()
            }
        };

        let raw_penalty = scoring::static_penalty(&metrics);
        let breakdown = scoring::dev_score(&evaluation.scores, raw_penalty);

        SubmissionReport {
            language,
            metrics,
            scores: evaluation.scores,
            feedback: evaluation.feedback,
            base_score: breakdown.base,
            static_penalty: breakdown.raw_penalty,
            applied_penalty: breakdown.applied_penalty,
            dev_score: breakdown.dev_score,
            grade: SubmissionReport::grade_from_score(breakdown.dev_score),
        }
    }

    /// Evaluate a batch in parallel, preserving input order
    pub fn evaluate_batch(&self, submissions: &[Submission]) -> Vec<SubmissionReport> {
        submissions
            .par_iter()
            .map(|s| self.evaluate(&s.code, s.language, s.interview_mode))
            .collect()
    }
}
