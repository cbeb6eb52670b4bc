use std::sync::Arc;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::{AnalysisService, ChatService};
use crate::presentation::config::Settings;

pub struct AppState<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    pub analysis_service: Arc<AnalysisService<E, L>>,
    pub chat_service: Arc<ChatService<L>>,
    pub settings: Settings,
}

impl<E, L> Clone for AppState<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            chat_service: Arc::clone(&self.chat_service),
            settings: self.settings.clone(),
        }
    }
}
