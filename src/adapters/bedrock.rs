use crate::domain::model::{Generation, GenerationFault, ModelKind, Outcome, VideoArtifact};
use crate::domain::ports::GenerationClient;
use crate::utils::error::{Result, TarotError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

#[derive(Debug, Clone)]
pub struct BedrockOptions {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub video_duration_seconds: u32,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
    pub timeout: Option<Duration>,
}

impl BedrockOptions {
    pub fn for_region(region: &str) -> Self {
        Self {
            endpoint: format!("https://bedrock-runtime.{}.amazonaws.com", region),
            api_key: None,
            max_tokens: 700,
            temperature: 0.7,
            video_duration_seconds: 9,
            retry_attempts: 1,
            retry_delay: Duration::from_millis(500),
            timeout: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ClaudeMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ClaudeRequest<'a> {
    anthropic_version: &'static str,
    messages: Vec<ClaudeMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct RayRequest<'a> {
    input_text: &'a str,
    duration_seconds: u32,
}

/// 依模型種類組出請求 body
pub fn build_request_body(
    prompt: &str,
    kind: ModelKind,
    options: &BedrockOptions,
) -> Result<serde_json::Value> {
    let body = match kind {
        ModelKind::Text => serde_json::to_value(ClaudeRequest {
            anthropic_version: ANTHROPIC_VERSION,
            messages: vec![ClaudeMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        })?,
        ModelKind::Video => serde_json::to_value(RayRequest {
            input_text: prompt,
            duration_seconds: options.video_duration_seconds,
        })?,
    };
    Ok(body)
}

/// Flattens the `content` field of a text response. Segments may be bare
/// strings or `{"type": "text", "text": ...}` objects.
pub fn normalize_text_response(
    envelope: &serde_json::Value,
) -> std::result::Result<String, GenerationFault> {
    match envelope.get("content") {
        Some(serde_json::Value::Array(segments)) => {
            let parts: Vec<&str> = segments
                .iter()
                .filter_map(|segment| match segment {
                    serde_json::Value::String(text) => Some(text.as_str()),
                    other => other.get("text").and_then(|t| t.as_str()),
                })
                .collect();
            Ok(parts.join("\n").trim().to_string())
        }
        Some(serde_json::Value::String(text)) => Ok(text.trim().to_string()),
        _ => Err(GenerationFault::UnexpectedFormat),
    }
}

pub struct BedrockClient {
    client: Client,
    options: BedrockOptions,
}

impl BedrockClient {
    pub fn new(options: BedrockOptions) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            options,
        })
    }

    pub fn options(&self) -> &BedrockOptions {
        &self.options
    }

    fn invoke_url(&self, model_id: &str) -> String {
        format!(
            "{}/model/{}/invoke",
            self.options.endpoint.trim_end_matches('/'),
            model_id
        )
    }

    async fn send_once(&self, url: &str, body: &serde_json::Value) -> Result<serde_json::Value> {
        let mut request = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body);
        if let Some(api_key) = &self.options.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Bedrock response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TarotError::RemoteServiceError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    async fn send_with_retry(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let attempts = self.options.retry_attempts + 1;
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.send_once(url, body).await {
                Ok(envelope) => return Ok(envelope),
                Err(e) if e.is_retryable() && attempt < attempts => {
                    tracing::warn!(
                        "Bedrock request failed ({}), retrying ({}/{})",
                        e,
                        attempt,
                        attempts - 1
                    );
                    sleep(self.options.retry_delay).await;
                }
                Err(e) => {
                    tracing::error!("Bedrock request failed after {} attempt(s): {}", attempt, e);
                    return Err(e);
                }
            }
        }
    }
}

#[async_trait]
impl GenerationClient for BedrockClient {
    async fn invoke(&self, prompt: &str, model_id: &str) -> Result<Outcome> {
        let Some(kind) = ModelKind::from_model_id(model_id) else {
            tracing::warn!("Unsupported model id: {}", model_id);
            return Ok(Err(GenerationFault::UnsupportedModel(model_id.to_string())));
        };

        let body = build_request_body(prompt, kind, &self.options)?;
        let url = self.invoke_url(model_id);
        tracing::debug!("Invoking {:?} model at {}", kind, url);

        let envelope = self.send_with_retry(&url, &body).await?;

        Ok(match kind {
            ModelKind::Text => normalize_text_response(&envelope).map(Generation::Text),
            ModelKind::Video => Ok(Generation::Video(VideoArtifact::from_response(envelope))),
        })
    }
}
