use anyhow::Result;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use docrag_core::config::{required_env, ServiceCredentials, Settings};
use docrag_core::traits::ChatModel;
use docrag_core::types::ChatRequest;
use docrag_core::Error;

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: [Message<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Azure OpenAI chat deployment answering one system + user exchange.
pub struct AzureChatModel {
    http: Client,
    credentials: ServiceCredentials,
    deployment: String,
}

impl AzureChatModel {
    pub fn new(credentials: ServiceCredentials, deployment: impl Into<String>) -> Self {
        Self { http: Client::new(), credentials, deployment: deployment.into() }
    }

    /// Credentials from `AZURE_OPENAI_*`, deployment from `AZURE_OPENAI_CHAT_DEPLOYMENT`.
    pub fn from_env(settings: &Settings) -> Result<Self> {
        let credentials = ServiceCredentials::openai_from_env(&settings.azure)?;
        Ok(Self::new(credentials, required_env("AZURE_OPENAI_CHAT_DEPLOYMENT")?))
    }

    fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.credentials.base_url(),
            self.deployment,
            self.credentials.api_version
        )
    }
}

impl ChatModel for AzureChatModel {
    fn complete(&self, request: &ChatRequest) -> Result<String> {
        let body = CompletionRequest {
            messages: [
                Message { role: "system", content: &request.system },
                Message { role: "user", content: &request.user },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };
        debug!(deployment = %self.deployment, "requesting chat completion");
        let resp = self.http.post(self.url()).header("api-key", &self.credentials.api_key).json(&body).send()?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().unwrap_or_default();
            return Err(Error::Service { service: "chat", status: Some(status.as_u16()), message }.into());
        }

        let parsed: CompletionResponse = resp.json()?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                Error::Service {
                    service: "chat",
                    status: Some(status.as_u16()),
                    message: "completion carried no message content".to_string(),
                }
                .into()
            })
    }
}
