// All LLM prompt constants for the interview module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::interview::questions::QuestionMix;
use crate::llm_client::prompts::{COACH_PERSONA, PLAIN_LIST_INSTRUCTION};

/// System prompt for question generation.
pub const QUESTIONS_SYSTEM: &str = "You're an expert interviewer preparing a candidate \
    for a real interview. You write realistic questions grounded in the job description.";

/// Single-category prompt. Replace: {count}, {kind}, {list_instruction}, {job_description}
pub const SINGLE_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Based on the job description below, write {count} {kind} interview questions.

{list_instruction}

Job Description:
{job_description}

Questions:"#;

/// Mixed prompt. Replace: {behavioral}, {technical}, {list_instruction}, {job_description}
pub const MIXED_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Based on the job description below, write {behavioral} behavioral and {technical} technical interview questions that progressively increase in difficulty.

{list_instruction}

Job Description:
{job_description}

Questions:"#;

/// Feedback prompt. Replace: {question}, {answer}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Give clear, constructive, and encouraging feedback on this answer.

Question: {question}
Answer: {answer}

Feedback:"#;

pub fn feedback_system() -> &'static str {
    COACH_PERSONA
}

pub fn build_questions_prompt(job_description: &str, mix: &QuestionMix) -> String {
    match *mix {
        QuestionMix::Single { kind, count } => {
            let count = count.to_string();
            fill_template(
                SINGLE_QUESTIONS_PROMPT_TEMPLATE,
                &[
                    ("count", count.as_str()),
                    ("kind", kind.as_str()),
                    ("list_instruction", PLAIN_LIST_INSTRUCTION),
                    ("job_description", job_description),
                ],
            )
        }
        QuestionMix::Split {
            behavioral,
            technical,
        } => {
            let behavioral = behavioral.to_string();
            let technical = technical.to_string();
            fill_template(
                MIXED_QUESTIONS_PROMPT_TEMPLATE,
                &[
                    ("behavioral", behavioral.as_str()),
                    ("technical", technical.as_str()),
                    ("list_instruction", PLAIN_LIST_INSTRUCTION),
                    ("job_description", job_description),
                ],
            )
        }
    }
}

pub fn build_feedback_prompt(question: &str, answer: &str) -> String {
    fill_template(
        FEEDBACK_PROMPT_TEMPLATE,
        &[("question", question), ("answer", answer)],
    )
}

/// Replaces `{key}` placeholders in one left-to-right pass.
/// Substituted values are never scanned again, so user text may contain braces.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values
            .iter()
            .find(|&&(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match hit {
            Some(&(key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::session::QuestionType;

    #[test]
    fn test_single_prompt_embeds_count_and_kind() {
        let mix = QuestionMix::new(QuestionType::Behavioral, 6);
        let prompt = build_questions_prompt("Senior Rust Engineer", &mix);
        assert!(prompt.contains("write 6 behavioral interview questions"));
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_mixed_prompt_embeds_split() {
        let mix = QuestionMix::new(QuestionType::Both, 7);
        let prompt = build_questions_prompt("Platform team", &mix);
        assert!(prompt.contains("write 3 behavioral and 4 technical"));
    }

    #[test]
    fn test_job_description_braces_survive() {
        let mix = QuestionMix::new(QuestionType::Technical, 6);
        let prompt = build_questions_prompt("Knows {count} and {kind}", &mix);
        assert!(prompt.contains("Knows {count} and {kind}"));
    }

    #[test]
    fn test_feedback_prompt_embeds_question_and_answer() {
        let prompt = build_feedback_prompt("Why Rust?", "Memory safety.");
        assert!(prompt.contains("Question: Why Rust?"));
        assert!(prompt.contains("Answer: Memory safety."));
    }

    #[test]
    fn test_question_braces_survive_feedback_prompt() {
        let prompt = build_feedback_prompt("Explain {answer} in templates", "It is a placeholder.");
        assert!(prompt.contains("Question: Explain {answer} in templates"));
        assert!(prompt.contains("Answer: It is a placeholder."));
        assert_eq!(prompt.matches("It is a placeholder.").count(), 1);
    }

    #[test]
    fn test_answer_braces_survive_feedback_prompt() {
        let prompt = build_feedback_prompt("Why Rust?", "I wrote {question} by mistake");
        assert!(prompt.contains("Answer: I wrote {question} by mistake"));
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        let filled = fill_template("{a} and {b} and {", &[("a", "x")]);
        assert_eq!(filled, "x and {b} and {");
    }
}
