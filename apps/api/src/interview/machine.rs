//! Wizard transitions: applies one user action to a session and returns the next one.
//!
//! `transition` never mutates its input. On any error the caller keeps the old
//! session, so a failed generator call leaves the wizard on the same stage.

use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::interview::generator::QuestionGenerator;
use crate::interview::questions::{parse_questions, QuestionMix};
use crate::interview::session::{QaRecord, QuestionCount, QuestionType, Session, Stage};

/// A single user action.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SubmitName { name: String },
    ChooseCount { count: QuestionCount },
    ChooseType { question_type: QuestionType },
    SubmitJobDescription { job_description: String },
    SubmitAnswer { answer: String },
    Retry,
    /// "Next Question", or "Finish Interview" on the last question.
    Advance,
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::SubmitName { .. } => "submit_name",
            Event::ChooseCount { .. } => "choose_count",
            Event::ChooseType { .. } => "choose_type",
            Event::SubmitJobDescription { .. } => "submit_job_description",
            Event::SubmitAnswer { .. } => "submit_answer",
            Event::Retry => "retry",
            Event::Advance => "advance",
        }
    }
}

/// Applies `event` to `session` and returns the next session.
///
/// A blank name or job description returns the session unchanged. Events the current stage
/// does not accept are a `Conflict`. Generator failures are `Llm` errors.
pub async fn transition(
    session: &Session,
    event: Event,
    generator: &dyn QuestionGenerator,
) -> Result<Session, AppError> {
    let kind = event.kind();
    let mut next = session.clone();

    match (session.stage, event) {
        (Stage::CollectName, Event::SubmitName { name }) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                debug!(session_id = %session.id, "Ignoring blank name");
                return Ok(next);
            }
            next.name = title_case(trimmed);
            next.stage = Stage::CollectCount;
        }

        (Stage::CollectCount, Event::ChooseCount { count }) => {
            next.question_count = Some(count);
            next.stage = Stage::CollectType;
        }

        (Stage::CollectType, Event::ChooseType { question_type }) => {
            next.question_type = Some(question_type);
            next.stage = Stage::CollectJobDescription;
        }

        (Stage::CollectJobDescription, Event::SubmitJobDescription { job_description }) => {
            let trimmed = job_description.trim();
            if trimmed.is_empty() {
                debug!(session_id = %session.id, "Ignoring blank job description");
                return Ok(next);
            }
            let (kind, count) = session
                .question_type
                .zip(session.question_count)
                .ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "session {} reached job description without count and type",
                        session.id
                    ))
                })?;
            let mix = QuestionMix::new(kind, count.get());

            let raw = generator
                .generate_questions(trimmed, &mix)
                .await
                .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

            let questions = parse_questions(&raw);
            if questions.is_empty() {
                warn!(session_id = %session.id, "Generator returned no usable questions");
                return Err(AppError::Llm(
                    "Question generation returned no usable questions".to_string(),
                ));
            }
            if questions.len() as u32 != mix.total() {
                warn!(
                    session_id = %session.id,
                    "Requested {} questions, generator returned {}",
                    mix.total(),
                    questions.len()
                );
            }
            info!(session_id = %session.id, "Prepared {} questions", questions.len());

            next.job_description = trimmed.to_string();
            next.questions = questions;
            next.question_index = 0;
            next.stage = Stage::AnswerLoop;
        }

        (Stage::AnswerLoop, Event::SubmitAnswer { answer }) => {
            if session.feedback.is_some() {
                return Err(AppError::Conflict(
                    "Feedback already given for this question; retry or advance".to_string(),
                ));
            }
            let question = current_question(session)?;

            let feedback = generator
                .generate_feedback(question, &answer)
                .await
                .map_err(|e| AppError::Llm(format!("Feedback generation failed: {e}")))?;
            let feedback = feedback.trim().to_string();
            if feedback.is_empty() {
                return Err(AppError::Llm("Feedback generation returned nothing".to_string()));
            }

            next.qa_summary.push(QaRecord {
                question: question.to_string(),
                answer: answer.clone(),
                feedback: feedback.clone(),
            });
            next.user_answer = answer;
            next.feedback = Some(feedback);
        }

        (Stage::AnswerLoop, Event::Retry) => {
            require_feedback(session)?;
            // Drop the record for the attempt being discarded.
            next.qa_summary.pop();
            next.feedback = None;
            next.user_answer.clear();
        }

        (Stage::AnswerLoop, Event::Advance) => {
            require_feedback(session)?;
            next.feedback = None;
            next.user_answer.clear();
            if session.question_index + 1 < session.questions.len() {
                next.question_index += 1;
            } else {
                info!(
                    session_id = %session.id,
                    "Interview complete after {} answers",
                    next.qa_summary.len()
                );
                next.interview_complete = true;
                next.stage = Stage::Summary;
            }
        }

        (stage, _) => {
            return Err(AppError::Conflict(format!(
                "'{kind}' is not accepted at stage '{stage}'"
            )));
        }
    }

    next.updated_at = Utc::now();
    debug!(session_id = %session.id, "{kind}: {} -> {}", session.stage, next.stage);
    Ok(next)
}

fn current_question(session: &Session) -> Result<&str, AppError> {
    session.current_question().ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "session {} has no question at index {}",
            session.id,
            session.question_index
        ))
    })
}

fn require_feedback(session: &Session) -> Result<(), AppError> {
    if session.feedback.is_none() {
        return Err(AppError::Conflict(
            "Submit an answer before retrying or advancing".to_string(),
        ));
    }
    Ok(())
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
