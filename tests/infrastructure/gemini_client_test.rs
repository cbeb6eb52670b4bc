use lexiscan::application::ports::{LlmClient, LlmClientError};
use lexiscan::infrastructure::llm::GeminiClient;

#[tokio::test]
async fn given_unreachable_endpoint_when_completing_then_returns_api_error() {
    // Port 9 (discard) is not listening; the request fails at connect time.
    let client = GeminiClient::with_base_url(
        "test-key".to_string(),
        "gemini-2.5-flash".to_string(),
        "http://127.0.0.1:9",
    );

    let result = client.complete("test prompt").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}
