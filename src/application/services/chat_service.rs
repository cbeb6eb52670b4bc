use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};

use super::prompt_builder::chat_prompt;

/// Stateless question answering over a previously extracted document text.
/// Each call is independent; no history is kept.
pub struct ChatService<L>
where
    L: LlmClient,
{
    llm_client: Option<Arc<L>>,
}

impl<L> ChatService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Option<Arc<L>>) -> Self {
        Self { llm_client }
    }

    pub async fn ask(&self, question: &str, document_text: &str) -> Result<String, ChatError> {
        let llm_client = self.llm_client.as_ref().ok_or(ChatError::NotConfigured)?;

        let prompt = chat_prompt(document_text, question);

        // Chat answers are free text and pass through unmodified.
        llm_client
            .complete(&prompt)
            .await
            .map_err(ChatError::Completion)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("the analysis model is not configured")]
    NotConfigured,
    #[error("failed to get a response from the model")]
    Completion(LlmClientError),
}
