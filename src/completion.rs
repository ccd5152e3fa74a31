use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;

use crate::config::Config;
use crate::error::UpstreamError;

pub const MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.2;

/// One system/user exchange with fixed sampling settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// Hosted chat-completion API. Returns the text of the first choice.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError>;
}

pub struct OpenAiCompletion {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletion {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(UpstreamError::CompletionClient)?;
        let openai_config = OpenAIConfig::new().with_api_key(config.openai_api_key.clone());
        Ok(Self {
            client: Client::with_config(openai_config).with_http_client(http),
            model: config.openai_model.clone(),
        })
    }
}

#[async_trait]
impl CompletionBackend for OpenAiCompletion {
    #[allow(deprecated)]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError> {
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(request.system.as_str())
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(request.user.as_str())
                    .build()?
                    .into(),
            ])
            .max_tokens(request.max_tokens)
            .temperature(request.temperature)
            .build()?;

        let response = self.client.chat().create(chat_request).await?;
        tracing::debug!(model = %self.model, choices = response.choices.len(), "completion received");

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(UpstreamError::EmptyCompletion)
    }
}
