use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use lexiscan::application::services::{AnalysisService, ChatService};
use lexiscan::infrastructure::llm::GeminiClient;
use lexiscan::infrastructure::observability::{TracingConfig, init_tracing};
use lexiscan::infrastructure::text_processing::PdfTextExtractor;
use lexiscan::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let extractor = Arc::new(PdfTextExtractor::new());

    // The model handle is built exactly once; without a credential it stays
    // absent and every analyze/chat request reports "not configured".
    let llm_client = settings
        .llm
        .api_key
        .clone()
        .map(|key| Arc::new(GeminiClient::new(key, settings.llm.model.clone())));

    if llm_client.is_none() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; /analyze and /chat will fail until it is configured"
        );
    }

    let analysis_service = Arc::new(AnalysisService::new(
        Arc::clone(&extractor),
        llm_client.clone(),
    ));
    let chat_service = Arc::new(ChatService::new(llm_client));

    let state = AppState {
        analysis_service,
        chat_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
