use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

/// Connection settings for the chat-completions oracle endpoint. Injected
/// explicitly; decisioning code never reads credentials from process state.
#[derive(Debug, Clone)]
pub struct OracleSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// The oracle answers with a single token; keep the completion short.
    pub max_tokens: u32,
    /// Zero temperature for maximally deterministic sampling.
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4".to_string(),
            max_tokens: 5,
            temperature: 0.0,
            timeout_secs: 30,
        }
    }
}

/// Error raised while consulting the oracle. Callers recover locally; none
/// of these ever propagate past the resolver.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("oracle credentials missing")]
    MissingCredentials,
    #[error("oracle transport failed: {0}")]
    Transport(String),
    #[error("oracle runtime unavailable: {0}")]
    Runtime(String),
    #[error("oracle returned a malformed payload: {0}")]
    MalformedResponse(String),
}

/// Black-box decision oracle consulted at most once per pre-approval pass.
pub trait DecisionOracle: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, OracleError>;
}

impl<T: DecisionOracle + ?Sized> DecisionOracle for std::sync::Arc<T> {
    fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        (**self).complete(prompt)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Thin wrapper around the chat-completions HTTP API allowing synchronous
/// workflows to consult the oracle without exposing async details.
pub struct OpenAiDecisionClient {
    settings: OracleSettings,
    http: reqwest::Client,
    runtime: Runtime,
}

impl OpenAiDecisionClient {
    pub fn new(settings: OracleSettings, runtime: Runtime) -> Result<Self, OracleError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| OracleError::Transport(err.to_string()))?;

        Ok(Self {
            settings,
            http,
            runtime,
        })
    }

    pub fn with_runtime(settings: OracleSettings) -> Result<Self, OracleError> {
        let runtime = Runtime::new().map_err(|err| OracleError::Runtime(err.to_string()))?;
        Self::new(settings, runtime)
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

impl std::fmt::Debug for OpenAiDecisionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiDecisionClient").finish_non_exhaustive()
    }
}

impl DecisionOracle for OpenAiDecisionClient {
    fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(OracleError::MissingCredentials)?;

        let body = ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let url = self.completions_url();
        let result: Result<ChatCompletionResponse, reqwest::Error> =
            self.runtime.block_on(async {
                let response = self
                    .http
                    .post(&url)
                    .bearer_auth(api_key)
                    .json(&body)
                    .send()
                    .await?;
                let response = response.error_for_status()?;
                response.json::<ChatCompletionResponse>().await
            });

        let payload = result.map_err(|err| OracleError::Transport(err.to_string()))?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                OracleError::MalformedResponse("completion carried no message content".to_string())
            })
    }
}
