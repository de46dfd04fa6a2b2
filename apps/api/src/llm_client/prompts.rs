// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Keeps generated content supportive and non-diagnostic.
pub const CARE_INSTRUCTION: &str = "\
    CRITICAL: This is a self-assessment, not a diagnosis. Never name a clinical condition \
    as a conclusion. Use warm, non-judgmental language. If answers suggest acute distress, \
    encourage contacting a mental health professional or a crisis line.";
