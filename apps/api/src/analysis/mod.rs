// Resume analysis: one action, one page image, one model call.
// All model calls go through llm_client; nothing here calls Gemini directly.

pub mod actions;
pub mod analyzer;
pub mod handlers;
pub mod markdown;
pub mod prompts;
