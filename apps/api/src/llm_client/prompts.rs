// Shared prompt constants.
// Each module that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Name the coach introduces itself with.
pub const COACH_NAME: &str = "Maddie";

/// Base persona every coach prompt starts from.
pub const COACH_PERSONA: &str = "You are Maddie, a friendly but professional AI interview coach. \
    You speak directly to the candidate. \
    Keep your tone clear, constructive, and encouraging.";

/// Instruction that keeps list output line-delimited and free of extra chatter.
pub const PLAIN_LIST_INSTRUCTION: &str = "\
    Return one question per line. \
    Do NOT add headings, introductions, or closing remarks. \
    Do NOT number the questions or group them under labels.";
