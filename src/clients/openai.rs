use async_trait::async_trait;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use openai::Credentials;
use tracing::{debug, warn};

use super::{CompletionClient, CompletionError, CompletionRequest};
use crate::config::Settings;

pub struct OpenAiClient {
    creds: Credentials,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self { creds: Credentials::new(api_key, base_url), model }
    }

    /// `None` when no credential is configured.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let Some(api_key) = settings.openai_api_key.clone() else {
            warn!("OPENAI_API_KEY is not set. AI features will not work.");
            return None;
        };
        Some(Self::new(api_key, settings.openai_base_url.clone(), settings.openai_model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn message(role: ChatCompletionMessageRole, content: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Some(content),
        name: None,
        function_call: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<Option<String>, CompletionError> {
        let CompletionRequest { prompt, temperature, max_tokens } = request;
        debug!(
            model = %self.model,
            system.len = prompt.system.len(),
            user.len = prompt.user.len(),
            user.preview = %prompt.user.chars().take(80).collect::<String>(),
            "sending chat completion"
        );

        let messages = vec![
            message(ChatCompletionMessageRole::System, prompt.system),
            message(ChatCompletionMessageRole::User, prompt.user),
        ];

        let completion = ChatCompletion::builder(&self.model, messages)
            .temperature(temperature)
            .max_tokens(max_tokens)
            .credentials(self.creds.clone())
            .create()
            .await
            .map_err(|e| CompletionError(e.to_string()))?;

        Ok(completion.choices.first().and_then(|c| c.message.content.clone()))
    }
}
