// Interview coaching wizard.
// Name → count → type → job description → answer loop → summary.
// All LLM calls go through llm_client via the QuestionGenerator seam.

pub mod generator;
pub mod handlers;
pub mod machine;
pub mod prompts;
pub mod questions;
pub mod session;
pub mod store;
pub mod view;
