mod analyze;
mod chat;
mod error;
mod health;

pub use analyze::{PDF_FILE_FIELD, analyze_handler};
pub use chat::{ChatRequest, ChatResponse, chat_handler};
pub use error::ErrorResponse;
pub use health::health_handler;
