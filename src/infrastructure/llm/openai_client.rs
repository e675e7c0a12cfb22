use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionEngine, CompletionEngineError};
use crate::infrastructure::observability::sanitize_excerpt;
use crate::presentation::config::LlmSettings;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat-completions adapter for OpenAI-compatible providers. The extraction
/// instruction travels as the system message, the document text as the user
/// message, and the provider is asked for a JSON-object response.
pub struct OpenAiCompletionEngine {
    client: Client,
    provider: String,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format: &'static str,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiCompletionEngine {
    fn build_messages(&self, instruction: &str, document_text: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: instruction.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: document_text.to_string(),
            },
        ]
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.provider == "azure" {
            request.header("api-key", &self.api_key)
        } else {
            request.header("Authorization", format!("Bearer {}", self.api_key))
        }
    }
}

#[async_trait]
impl CompletionEngine for OpenAiCompletionEngine {
    async fn complete(
        &self,
        instruction: &str,
        document_text: &str,
    ) -> Result<String, CompletionEngineError> {
        tracing::debug!(
            instruction = %sanitize_excerpt(instruction),
            document_chars = document_text.len(),
            "Requesting structured completion"
        );

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: self.build_messages(instruction, document_text),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: ResponseFormat {
                format: "json_object",
            },
        };

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| CompletionEngineError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionEngineError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionEngineError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionEngineError::InvalidResponse(e.to_string()))?;

        completion_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionEngineError::InvalidResponse("empty choices".to_string()))
    }
}

pub fn create_completion_engine(
    settings: &LlmSettings,
) -> Result<OpenAiCompletionEngine, CompletionEngineError> {
    let base_url = match settings.provider.as_str() {
        "openai" => "https://api.openai.com/v1".to_string(),
        "lmstudio" => settings
            .base_url
            .clone()
            .ok_or_else(|| {
                CompletionEngineError::InvalidResponse(
                    "base_url required for lmstudio provider".to_string(),
                )
            })?
            .trim_end_matches('/')
            .to_string(),
        "azure" => {
            let endpoint = settings.azure_endpoint.as_ref().ok_or_else(|| {
                CompletionEngineError::InvalidResponse(
                    "azure_endpoint required for azure provider".to_string(),
                )
            })?;
            format!(
                "{}/openai/deployments/{}",
                endpoint.trim_end_matches('/'),
                settings.chat_model
            )
        }
        _ => {
            return Err(CompletionEngineError::InvalidResponse(format!(
                "unknown provider: {}",
                settings.provider
            )));
        }
    };

    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| CompletionEngineError::ApiRequestFailed(e.to_string()))?;

    Ok(OpenAiCompletionEngine {
        client,
        provider: settings.provider.clone(),
        base_url,
        api_key: settings.api_key.clone(),
        model: settings.chat_model.clone(),
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    })
}
