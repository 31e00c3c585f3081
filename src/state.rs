use crate::{
    clients::{openai::OpenAiClient, CompletionBackend, CompletionClient},
    config::Settings,
    http::cors::CorsPolicy,
};

/// Everything a function instance needs, built once in `main` and shared by
/// every invocation.
pub struct AppState<C> {
    pub backend: CompletionBackend<C>,
    pub cors: CorsPolicy,
}

impl<C: CompletionClient> AppState<C> {
    pub fn new(backend: CompletionBackend<C>, cors: CorsPolicy) -> Self {
        Self { backend, cors }
    }
}

/// State of a deployed function: the real OpenAI client when a key is set.
pub type OpenAiState = AppState<OpenAiClient>;

impl OpenAiState {
    pub fn from_settings(settings: &Settings) -> Self {
        let backend = OpenAiClient::from_settings(settings).into();
        Self::new(backend, CorsPolicy::new(settings.allowed_origins.clone()))
    }

    pub fn from_env() -> Self {
        Self::from_settings(&Settings::from_env())
    }
}
