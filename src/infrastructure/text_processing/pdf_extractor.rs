use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::Document;

/// Extracts the concatenated plain text of all pages, in page order. Any
/// parse failure aborts the whole extraction; there is no per-page recovery.
#[derive(Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            bytes = data.len(),
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractorError> {
        let bytes = data.to_vec();

        // pdf-extract is synchronous and can panic on malformed input; the
        // join error from the blocking task covers that case.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))?
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        if text.trim().is_empty() {
            return Err(TextExtractorError::NoTextFound(document.filename.clone()));
        }

        tracing::info!(chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
