//! Renders a session into the screen the client should show for its current stage.
//!
//! The view is a plain description of inputs, choices and actions; any front end
//! can draw it. Each `event` field names the `Event` type the client should send.

use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::interview::session::{QaRecord, QuestionCount, QuestionType, Session, Stage};
use crate::llm_client::prompts::COACH_NAME;

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub stage: Stage,
    pub coach_message: String,
    pub screen: Screen,
    pub interview_complete: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Screen {
    TextInput {
        event: &'static str,
        field: &'static str,
        label: &'static str,
        placeholder: &'static str,
        multiline: bool,
        submit_label: &'static str,
    },
    Choice {
        event: &'static str,
        field: &'static str,
        options: Vec<ChoiceOption>,
    },
    Question {
        question_number: usize,
        total: usize,
        question: String,
        answer: Option<String>,
        feedback: Option<String>,
        actions: Vec<Action>,
    },
    Summary {
        entries: Vec<QaRecord>,
    },
}

#[derive(Debug, Serialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub event: &'static str,
    pub label: &'static str,
}

pub fn render(session: &Session) -> SessionView {
    let (coach_message, screen) = match session.stage {
        Stage::CollectName => (
            format!(
                "Hi, I'm {COACH_NAME}, your personal interview coach. \
                 Let's get you ready. What's your name?"
            ),
            Screen::TextInput {
                event: "submit_name",
                field: "name",
                label: "Your name:",
                placeholder: "Enter your name...",
                multiline: false,
                submit_label: "Next",
            },
        ),
        Stage::CollectCount => (
            format!(
                "Great to meet you, {}! How many questions would you like to practice today?",
                session.name
            ),
            Screen::Choice {
                event: "choose_count",
                field: "count",
                options: QuestionCount::ALL
                    .iter()
                    .map(|c| ChoiceOption {
                        label: c.label(),
                        value: json!(c.get()),
                    })
                    .collect(),
            },
        ),
        Stage::CollectType => (
            "Would you like to start with behavioral questions, technical ones, or a mix of both?"
                .to_string(),
            Screen::Choice {
                event: "choose_type",
                field: "question_type",
                options: QuestionType::ALL
                    .iter()
                    .map(|t| ChoiceOption {
                        label: t.label().to_string(),
                        value: json!(t.as_str()),
                    })
                    .collect(),
            },
        ),
        Stage::CollectJobDescription => (
            format!(
                "Awesome, {}! Please paste the job description below, and I'll pull up your questions.",
                session.name
            ),
            Screen::TextInput {
                event: "submit_job_description",
                field: "job_description",
                label: "Paste the job description:",
                placeholder: "Paste or write the job description here...",
                multiline: true,
                submit_label: "Next",
            },
        ),
        Stage::AnswerLoop => answer_loop_view(session),
        Stage::Summary => (
            format!(
                "That's a wrap, {}! Here's everything we covered today.",
                session.name
            ),
            Screen::Summary {
                entries: session.qa_summary.clone(),
            },
        ),
    };

    SessionView {
        session_id: session.id,
        stage: session.stage,
        coach_message,
        screen,
        interview_complete: session.interview_complete,
    }
}

fn answer_loop_view(session: &Session) -> (String, Screen) {
    let question = session.current_question().unwrap_or_default().to_string();

    let (coach_message, actions) = match &session.feedback {
        Some(feedback) => (feedback.clone(), feedback_actions(session)),
        None => (
            format!("Here's your next interview question:\n\n{question}"),
            vec![Action {
                event: "submit_answer",
                label: "Submit Answer",
            }],
        ),
    };

    let screen = Screen::Question {
        question_number: session.question_index + 1,
        total: session.questions.len(),
        question,
        answer: session
            .feedback
            .as_ref()
            .map(|_| session.user_answer.clone()),
        feedback: session.feedback.clone(),
        actions,
    };
    (coach_message, screen)
}

/// Retry and Next/Finish are offered together once feedback exists.
fn feedback_actions(session: &Session) -> Vec<Action> {
    let advance_label = if session.is_last_question() {
        "Finish Interview"
    } else {
        "Next Question"
    };
    vec![
        Action {
            event: "retry",
            label: "Retry This Question",
        },
        Action {
            event: "advance",
            label: advance_label,
        },
    ]
}

/// Markdown rendering of the summary, one block per record in append order.
pub fn render_summary_markdown(records: &[QaRecord]) -> String {
    let mut out = String::from("## Interview Summary\n\n");
    for (i, qa) in records.iter().enumerate() {
        out.push_str(&format!("**Q{}:** {}\n\n", i + 1, qa.question));
        out.push_str(&format!("**Your Answer:** {}\n\n", qa.answer));
        out.push_str(&format!("**{COACH_NAME}'s Feedback:** {}\n\n", qa.feedback));
        out.push_str("---\n\n");
    }
    out
}
