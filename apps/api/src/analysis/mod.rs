// Narrative analysis: optional model-written feedback layered over the
// deterministic result. All LLM calls go through llm_client.

pub mod handlers;
pub mod narrative;
pub mod prompts;
pub mod report;
