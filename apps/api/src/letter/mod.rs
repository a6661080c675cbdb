// Letter drafting: form intake, voice calibration, and the summarize → draft prompt chain.
// All LLM calls go through llm_client::TextGenerator; no direct API calls here.

pub mod handlers;
pub mod intake;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod template;
pub mod voice;
