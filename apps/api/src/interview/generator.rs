//! Question/feedback generator — the only side effect of the wizard besides rendering.
//!
//! Default: `LlmGenerator` (OpenAI via `LlmClient`).
//! `AppState` holds an `Arc<dyn QuestionGenerator>` so tests can script responses.

use async_trait::async_trait;
use tracing::info;

use crate::interview::prompts::{
    build_feedback_prompt, build_questions_prompt, feedback_system, QUESTIONS_SYSTEM,
};
use crate::interview::questions::QuestionMix;
use crate::llm_client::{LlmClient, LlmError};

/// Produces raw, unstructured text for questions and feedback.
/// Callers own parsing; implementations only make the call.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Line-delimited questions for the job description.
    async fn generate_questions(
        &self,
        job_description: &str,
        mix: &QuestionMix,
    ) -> Result<String, LlmError>;

    /// Free-text feedback on one answer.
    async fn generate_feedback(&self, question: &str, answer: &str) -> Result<String, LlmError>;
}

pub struct LlmGenerator(pub LlmClient);

#[async_trait]
impl QuestionGenerator for LlmGenerator {
    async fn generate_questions(
        &self,
        job_description: &str,
        mix: &QuestionMix,
    ) -> Result<String, LlmError> {
        info!("Requesting {} questions ({:?})", mix.total(), mix);
        let prompt = build_questions_prompt(job_description, mix);
        self.0.call_text(&prompt, QUESTIONS_SYSTEM).await
    }

    async fn generate_feedback(&self, question: &str, answer: &str) -> Result<String, LlmError> {
        let prompt = build_feedback_prompt(question, answer);
        self.0.call_text(&prompt, feedback_system()).await
    }
}
