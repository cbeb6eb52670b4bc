mod settings;

pub use settings::{HttpSettings, LlmSettings, ServerSettings, Settings};
