mod analysis_service;
mod chat_service;
mod prompt_builder;

pub use analysis_service::{AnalysisError, AnalysisService, strip_code_fences};
pub use chat_service::{ChatError, ChatService};
pub use prompt_builder::{analysis_prompt, chat_prompt};
