const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Process configuration, read once from the environment at startup and
/// carried read-only in the application state.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// Absent or empty credential disables the model: every analyze/chat
    /// request then fails fast with the not-configured error.
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Legacy clients of this API expect HTTP 200 even on failure, signaled
    /// only by the `error` body field. Off by default in favor of
    /// differentiated 4xx/5xx codes.
    pub uniform_error_status: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            llm: LlmSettings {
                api_key: std::env::var("GEMINI_API_KEY")
                    .ok()
                    .filter(|k| !k.trim().is_empty()),
                model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            },
            http: HttpSettings {
                uniform_error_status: std::env::var("UNIFORM_ERROR_STATUS")
                    .map(|v| v.to_lowercase() == "true" || v == "1")
                    .unwrap_or(false),
            },
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            uniform_error_status: false,
        }
    }
}
