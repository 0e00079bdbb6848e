//! Session record and the closed choice types the wizard collects.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the six sequential wizard stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    CollectName,
    CollectCount,
    CollectType,
    CollectJobDescription,
    AnswerLoop,
    Summary,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::CollectName => "collect_name",
            Stage::CollectCount => "collect_count",
            Stage::CollectType => "collect_type",
            Stage::CollectJobDescription => "collect_job_description",
            Stage::AnswerLoop => "answer_loop",
            Stage::Summary => "summary",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many questions the candidate wants to practice. Only 6, 12 and 20 exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum QuestionCount {
    Six,
    Twelve,
    Twenty,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 3] = [QuestionCount::Six, QuestionCount::Twelve, QuestionCount::Twenty];

    pub fn get(self) -> u32 {
        match self {
            QuestionCount::Six => 6,
            QuestionCount::Twelve => 12,
            QuestionCount::Twenty => 20,
        }
    }

    pub fn label(self) -> String {
        format!("{} Questions", self.get())
    }
}

impl TryFrom<u32> for QuestionCount {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(QuestionCount::Six),
            12 => Ok(QuestionCount::Twelve),
            20 => Ok(QuestionCount::Twenty),
            other => Err(format!("question count must be 6, 12 or 20, got {other}")),
        }
    }
}

impl From<QuestionCount> for u32 {
    fn from(count: QuestionCount) -> Self {
        count.get()
    }
}

/// Category of questions to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Behavioral,
    Technical,
    Both,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [QuestionType::Behavioral, QuestionType::Technical, QuestionType::Both];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Behavioral => "behavioral",
            QuestionType::Technical => "technical",
            QuestionType::Both => "both",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Behavioral => "Behavioral",
            QuestionType::Technical => "Technical",
            QuestionType::Both => "Both",
        }
    }
}

/// One answered question, as it appears in the final summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
    pub feedback: String,
}

/// All wizard state for one user session.
///
/// Fields fill in stage order; `questions` is non-empty from `AnswerLoop` on and
/// `question_index` always points inside it.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub stage: Stage,
    pub name: String,
    pub question_count: Option<QuestionCount>,
    pub question_type: Option<QuestionType>,
    pub job_description: String,
    pub questions: Vec<String>,
    pub question_index: usize,
    pub user_answer: String,
    pub feedback: Option<String>,
    pub qa_summary: Vec<QaRecord>,
    pub interview_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            stage: Stage::CollectName,
            name: String::new(),
            question_count: None,
            question_type: None,
            job_description: String::new(),
            questions: Vec::new(),
            question_index: 0,
            user_answer: String::new(),
            feedback: None,
            qa_summary: Vec::new(),
            interview_complete: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The question currently on screen, if the answer loop has started.
    pub fn current_question(&self) -> Option<&str> {
        if self.stage != Stage::AnswerLoop {
            return None;
        }
        self.questions.get(self.question_index).map(String::as_str)
    }

    pub fn is_last_question(&self) -> bool {
        self.question_index + 1 >= self.questions.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_collecting_name() {
        let session = Session::new();
        assert_eq!(session.stage, Stage::CollectName);
        assert!(session.name.is_empty());
        assert!(session.question_count.is_none());
        assert!(session.questions.is_empty());
        assert_eq!(session.question_index, 0);
        assert!(session.feedback.is_none());
        assert!(!session.interview_complete);
    }

    #[test]
    fn test_question_count_accepts_only_closed_set() {
        for (raw, expected) in [(6, QuestionCount::Six), (12, QuestionCount::Twelve), (20, QuestionCount::Twenty)] {
            let parsed: QuestionCount = serde_json::from_str(&raw.to_string()).unwrap();
            assert_eq!(parsed, expected);
            assert_eq!(parsed.get(), raw);
        }
        for raw in ["0", "7", "13", "21", "-6"] {
            assert!(serde_json::from_str::<QuestionCount>(raw).is_err(), "{raw} accepted");
        }
    }

    #[test]
    fn test_question_count_serializes_as_number() {
        assert_eq!(serde_json::to_string(&QuestionCount::Twelve).unwrap(), "12");
        assert_eq!(QuestionCount::Twelve.label(), "12 Questions");
    }

    #[test]
    fn test_question_type_serde_snake_case() {
        let parsed: QuestionType = serde_json::from_str(r#""both""#).unwrap();
        assert_eq!(parsed, QuestionType::Both);
        assert!(serde_json::from_str::<QuestionType>(r#""situational""#).is_err());
    }

    #[test]
    fn test_current_question_only_in_answer_loop() {
        let mut session = Session::new();
        session.questions = vec!["Q1".to_string(), "Q2".to_string()];
        assert!(session.current_question().is_none());

        session.stage = Stage::AnswerLoop;
        assert_eq!(session.current_question(), Some("Q1"));
        assert!(!session.is_last_question());

        session.question_index = 1;
        assert_eq!(session.current_question(), Some("Q2"));
        assert!(session.is_last_question());
    }
}
