//! Azure OpenAI embeddings over blocking HTTP.

use anyhow::Result;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use docrag_core::config::{required_env, ServiceCredentials, Settings};
use docrag_core::traits::Embedder;
use docrag_core::Error;

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
}

pub struct AzureOpenAiEmbedder {
    http: Client,
    credentials: ServiceCredentials,
    deployment: String,
    dim: usize,
}

impl AzureOpenAiEmbedder {
    pub fn new(credentials: ServiceCredentials, deployment: impl Into<String>, dim: usize) -> Self {
        Self { http: Client::new(), credentials, deployment: deployment.into(), dim }
    }

    /// Credentials from `AZURE_OPENAI_*`, deployment from
    /// `AZURE_OPENAI_EMBEDDING_DEPLOYMENT`, width from `index.dimensions`.
    pub fn from_env(settings: &Settings) -> Result<Self> {
        let credentials = ServiceCredentials::openai_from_env(&settings.azure)?;
        let deployment = required_env("AZURE_OPENAI_EMBEDDING_DEPLOYMENT")?;
        Ok(Self::new(credentials, deployment, settings.index.dimensions))
    }

    fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/embeddings?api-version={}",
            self.credentials.base_url(),
            self.deployment,
            self.credentials.api_version
        )
    }
}

impl Embedder for AzureOpenAiEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed_text(&self, text: &str) -> Result<Vec<f32>> {
        debug!(deployment = %self.deployment, chars = text.chars().count(), "requesting embedding");
        let resp = self
            .http
            .post(self.url())
            .header("api-key", &self.credentials.api_key)
            .json(&json!({ "input": text }))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().unwrap_or_default();
            return Err(Error::Service { service: "embeddings", status: Some(status.as_u16()), message }.into());
        }

        let body: EmbeddingResponse = resp.json()?;
        let vector = body.data.into_iter().next().map(|item| item.embedding).ok_or_else(|| Error::Service {
            service: "embeddings",
            status: Some(status.as_u16()),
            message: "response carried no embedding".to_string(),
        })?;
        if vector.len() != self.dim {
            return Err(Error::DimensionMismatch { expected: self.dim, actual: vector.len() }.into());
        }
        Ok(vector)
    }
}
