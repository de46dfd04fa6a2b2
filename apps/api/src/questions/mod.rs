// Question sources: the fixed bank and the LLM-personalized set.
// All LLM calls go through llm_client. The bank is always the fallback.

pub mod bank;
pub mod generator;
pub mod handlers;
pub mod prompts;
