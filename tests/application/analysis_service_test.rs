use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lexiscan::application::ports::{
    LlmClient, LlmClientError, TextExtractor, TextExtractorError,
};
use lexiscan::application::services::{AnalysisError, AnalysisService, strip_code_fences};
use lexiscan::domain::{Document, RiskBenefitKind};

struct CountingExtractor {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl TextExtractor for CountingExtractor {
    async fn extract_text(
        &self,
        _data: &[u8],
        _document: &Document,
    ) -> Result<String, TextExtractorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("extracted document text".to_string())
    }
}

struct FixedLlmClient {
    response: String,
}

#[async_trait::async_trait]
impl LlmClient for FixedLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(self.response.clone())
    }
}

const REPORT: &str = r#"{
    "summary": "s",
    "risks_benefits": [
        {"type": "risk", "text": "r1"},
        {"type": "risk", "text": "r2"},
        {"type": "benefit", "text": "b1"},
        {"type": "benefit", "text": "b2"}
    ],
    "key_clauses": [
        {"term": "t1", "definition": "d1"},
        {"term": "t2", "definition": "d2"},
        {"term": "t3", "definition": "d3"}
    ]
}"#;

fn service_with_response(response: &str) -> AnalysisService<CountingExtractor, FixedLlmClient> {
    AnalysisService::new(
        Arc::new(CountingExtractor {
            calls: AtomicUsize::new(0),
        }),
        Some(Arc::new(FixedLlmClient {
            response: response.to_string(),
        })),
    )
}

#[tokio::test]
async fn given_plain_json_response_when_analyzing_then_returns_report() {
    let service = service_with_response(REPORT);
    let document = Document::new("lease.pdf".to_string(), 10);

    let report = service.analyze(b"%PDF", &document).await.unwrap();

    assert_eq!(report.summary, "s");
    assert_eq!(report.risks_benefits.len(), 4);
    assert_eq!(report.risks_benefits[0].kind, RiskBenefitKind::Risk);
    assert_eq!(report.key_clauses.len(), 3);
}

#[tokio::test]
async fn given_fenced_json_response_when_analyzing_then_returns_report() {
    let fenced = format!("```json\n{REPORT}\n```");
    let service = service_with_response(&fenced);
    let document = Document::new("lease.pdf".to_string(), 10);

    let report = service.analyze(b"%PDF", &document).await.unwrap();

    assert_eq!(report.summary, "s");
}

#[tokio::test]
async fn given_non_json_response_when_analyzing_then_returns_malformed_error() {
    let service = service_with_response("Here is your analysis: it looks fine.");
    let document = Document::new("lease.pdf".to_string(), 10);

    let result = service.analyze(b"%PDF", &document).await;

    assert!(matches!(result, Err(AnalysisError::MalformedResponse(_))));
}

#[tokio::test]
async fn given_extra_key_in_response_when_analyzing_then_returns_malformed_error() {
    let with_extra = r#"{"summary": "s", "risks_benefits": [], "key_clauses": [], "notes": "x"}"#;
    let service = service_with_response(with_extra);
    let document = Document::new("lease.pdf".to_string(), 10);

    let result = service.analyze(b"%PDF", &document).await;

    assert!(matches!(result, Err(AnalysisError::MalformedResponse(_))));
}

#[tokio::test]
async fn given_non_pdf_filename_when_analyzing_then_extractor_is_never_called() {
    let extractor = Arc::new(CountingExtractor {
        calls: AtomicUsize::new(0),
    });
    let service = AnalysisService::new(
        Arc::clone(&extractor),
        Some(Arc::new(FixedLlmClient {
            response: REPORT.to_string(),
        })),
    );
    let document = Document::new("notes.docx".to_string(), 10);

    let result = service.analyze(b"bytes", &document).await;

    assert!(matches!(result, Err(AnalysisError::InvalidUpload(_))));
    assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_uppercase_pdf_extension_when_analyzing_then_upload_is_accepted() {
    let service = service_with_response(REPORT);
    let document = Document::new("LEASE.PDF".to_string(), 10);

    let result = service.analyze(b"%PDF", &document).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_no_llm_client_when_analyzing_then_fails_before_extraction() {
    let extractor = Arc::new(CountingExtractor {
        calls: AtomicUsize::new(0),
    });
    let service: AnalysisService<CountingExtractor, FixedLlmClient> =
        AnalysisService::new(Arc::clone(&extractor), None);
    let document = Document::new("lease.pdf".to_string(), 10);

    let result = service.analyze(b"%PDF", &document).await;

    assert!(matches!(result, Err(AnalysisError::NotConfigured)));
    assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn given_fenced_output_when_stripping_then_inner_json_parses() {
    let raw = "```json\n{\"summary\":\"s\",\"risks_benefits\":[],\"key_clauses\":[]}\n```";

    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(&cleaned).unwrap();
    assert_eq!(value["summary"], "s");
}

#[test]
fn given_any_output_when_stripping_twice_then_result_is_unchanged() {
    let raw = "  ```json\n{\"a\": 1}\n```  ";

    let once = strip_code_fences(raw);
    let twice = strip_code_fences(&once);

    assert_eq!(once, twice);
}

#[test]
fn given_fences_in_the_middle_when_stripping_then_all_are_removed() {
    let raw = "prefix ```json body ``` suffix";

    let cleaned = strip_code_fences(raw);

    assert!(!cleaned.contains("```"));
    assert!(cleaned.contains("prefix"));
    assert!(cleaned.contains("suffix"));
}
