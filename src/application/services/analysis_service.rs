use std::sync::Arc;

use crate::application::ports::{
    LlmClient, LlmClientError, TextExtractor, TextExtractorError,
};
use crate::domain::{AnalysisReport, Document};

use super::prompt_builder::analysis_prompt;

/// Linear analyze pipeline: validate upload, extract text, build the prompt,
/// call the model, strip code fences, parse the strict report shape. Any
/// step short-circuits with a categorized error.
pub struct AnalysisService<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    extractor: Arc<E>,
    llm_client: Option<Arc<L>>,
}

impl<E, L> AnalysisService<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    pub fn new(extractor: Arc<E>, llm_client: Option<Arc<L>>) -> Self {
        Self {
            extractor,
            llm_client,
        }
    }

    pub async fn analyze(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<AnalysisReport, AnalysisError> {
        let llm_client = self
            .llm_client
            .as_ref()
            .ok_or(AnalysisError::NotConfigured)?;

        if !document.has_pdf_filename() {
            return Err(AnalysisError::InvalidUpload(
                "Invalid file. Please upload a PDF.".to_string(),
            ));
        }

        let document_text = self.extractor.extract_text(data, document).await?;

        let prompt = analysis_prompt(&document_text);

        let raw = llm_client
            .complete(&prompt)
            .await
            .map_err(AnalysisError::Completion)?;

        let cleaned = strip_code_fences(&raw);

        tracing::debug!(model_response = %cleaned, "Cleaned model response");

        serde_json::from_str(&cleaned).map_err(|e| {
            tracing::error!(error = %e, model_response = %cleaned, "Model response failed shape validation");
            AnalysisError::MalformedResponse(e)
        })
    }
}

/// Best-effort normalization of model output before parsing: remove every
/// literal ```` ```json ```` and ```` ``` ```` substring, then trim the
/// ends. Blunt textual strip, idempotent; no structural markdown parse and
/// no repair of malformed JSON.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("the analysis model is not configured")]
    NotConfigured,
    #[error("{0}")]
    InvalidUpload(String),
    #[error("could not extract text from the PDF")]
    Extraction(#[from] TextExtractorError),
    #[error("failed to analyze the document with the model")]
    Completion(LlmClientError),
    #[error("model returned a malformed analysis")]
    MalformedResponse(#[source] serde_json::Error),
}
