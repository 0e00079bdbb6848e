//! Question planning and parsing of the generator's line-delimited output.

use crate::interview::session::QuestionType;

/// How many questions of which kind to ask the generator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionMix {
    Single { kind: QuestionType, count: u32 },
    /// `behavioral = n / 2`, `technical = n - n / 2`.
    Split { behavioral: u32, technical: u32 },
}

impl QuestionMix {
    pub fn new(kind: QuestionType, count: u32) -> Self {
        match kind {
            QuestionType::Both => {
                let (behavioral, technical) = split_count(count);
                QuestionMix::Split {
                    behavioral,
                    technical,
                }
            }
            kind => QuestionMix::Single { kind, count },
        }
    }

    pub fn total(&self) -> u32 {
        match *self {
            QuestionMix::Single { count, .. } => count,
            QuestionMix::Split {
                behavioral,
                technical,
            } => behavioral + technical,
        }
    }
}

/// Splits `n` into (behavioral, technical) halves; the odd one goes to technical.
pub fn split_count(n: u32) -> (u32, u32) {
    let behavioral = n / 2;
    (behavioral, n - behavioral)
}

/// Turns raw generator text into a list of questions.
///
/// Each line is trimmed and loses its leading list marker: a run of `-` and spaces,
/// a `*` or `•`, or an enumerator like `3.` / `3)`. Lines left empty are dropped.
pub fn parse_questions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| strip_list_marker(line.trim()).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    if line.starts_with('-') {
        return line.trim_start_matches(|c: char| c == '-' || c == ' ');
    }
    for bullet in ['*', '•'] {
        if let Some(rest) = line.strip_prefix(bullet) {
            return rest;
        }
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return line;
    }
    let rest = &line[digits..];
    match rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
        Some(after) if after.is_empty() || after.starts_with(char::is_whitespace) => after,
        _ => line,
    }
}
