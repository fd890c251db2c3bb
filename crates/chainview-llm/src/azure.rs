// SPDX-License-Identifier: Apache-2.0

use crate::provider::{CompletionProvider, CompletionRequest, ProviderError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_VERSION: &str = "2023-05-15";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Azure OpenAI connection settings. Unset or blank values mean the model
/// path is off, which is an expected deployment state, not an error; callers
/// must consult [`AzureOpenAiConfig::is_configured`] before building a
/// client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureOpenAiConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub deployment: Option<String>,
    pub api_version: String,
    pub timeout: Option<Duration>,
}

impl Default for AzureOpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            deployment: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

fn env_nonblank(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AzureOpenAiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            endpoint: env_nonblank("AZURE_OPENAI_ENDPOINT"),
            api_key: env_nonblank("AZURE_OPENAI_API_KEY"),
            deployment: env_nonblank("AZURE_OPENAI_DEPLOYMENT_NAME"),
            api_version: env_nonblank("AZURE_OPENAI_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// True only when every credential needed for a live call is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some() && self.api_key.is_some() && self.deployment.is_some()
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Chat-completion client against an Azure OpenAI deployment.
#[derive(Debug)]
pub struct AzureOpenAiClient {
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
    client: Client,
}

impl AzureOpenAiClient {
    /// Build a client from a configured config. Fails when the config is
    /// incomplete or the HTTP client cannot be constructed.
    pub fn new(config: &AzureOpenAiConfig) -> Result<Self, ProviderError> {
        let (Some(endpoint), Some(api_key), Some(deployment)) = (
            config.endpoint.clone(),
            config.api_key.clone(),
            config.deployment.clone(),
        ) else {
            return Err(ProviderError(
                "azure openai config is incomplete; endpoint, api key, and deployment are required"
                    .to_string(),
            ));
        };
        let client = Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| ProviderError(format!("http client build failed: {e}")))?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            deployment,
            api_version: config.api_version.clone(),
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }
}

impl CompletionProvider for AzureOpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let body = ChatCompletionBody {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            top_p: request.top_p,
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| ProviderError(format!("completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            let snippet: String = detail.chars().take(200).collect();
            return Err(ProviderError(format!(
                "completion endpoint returned {status}: {snippet}"
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| ProviderError(format!("completion response decode failed: {e}")))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ProviderError("completion response contained no choices".to_string()))?;
        debug!(provider = self.name(), chars = content.len(), "completion received");
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "azure-openai"
    }
}
