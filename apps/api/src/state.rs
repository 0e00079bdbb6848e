use std::sync::Arc;

use crate::interview::generator::QuestionGenerator;
use crate::interview::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable generator. Default: LlmGenerator over the OpenAI client.
    pub generator: Arc<dyn QuestionGenerator>,
}
