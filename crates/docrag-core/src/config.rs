//! Configuration loader, typed settings and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` + `config.<env>.toml`
//! + `APP_*` env vars (`__` separates nested keys). Service credentials come
//! from `AZURE_*` variables and are never part of the merged configuration.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::chunking::ChunkingConfig;
use crate::error::{Error, Result};

pub struct Config {
    figment: Figment,
}

impl Config {
    /// Load from the current directory.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Merge defaults, `config.toml`, `config.<env>.toml` from `dir`, then `APP_*` env vars.
    pub fn load_from(dir: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(dir.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        Ok(Self { figment })
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Typed view of the whole configuration, validated.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub chunking: ChunkingConfig,
    pub index: IndexSettings,
    pub retrieval: RetrievalSettings,
    pub chat: ChatSettings,
    pub azure: AzureSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        self.chunking.validate()?;
        if self.index.batch_size == 0 {
            return Err(Error::InvalidConfig("index.batch_size must be positive".to_string()));
        }
        if self.index.dimensions == 0 {
            return Err(Error::InvalidConfig("index.dimensions must be positive".to_string()));
        }
        if self.retrieval.top_k == 0 {
            return Err(Error::InvalidConfig("retrieval.top_k must be positive".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub docs_dir: String,
    pub extension: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { docs_dir: "extracted".to_string(), extension: "md".to_string() }
    }
}

impl DataSettings {
    pub fn docs_path(&self) -> PathBuf {
        expand_path(&self.docs_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    pub name: String,
    pub batch_size: usize,
    pub dimensions: usize,
    pub semantic_configuration: String,
    pub vector_profile: String,
    pub hnsw_algorithm: String,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            name: "poa-documents".to_string(),
            batch_size: 100,
            dimensions: 1536,
            semantic_configuration: "my-semantic-config".to_string(),
            vector_profile: "my-vector-profile".to_string(),
            hnsw_algorithm: "my-hnsw".to_string(),
        }
    }
}

impl IndexSettings {
    /// `AZURE_SEARCH_INDEX_NAME` wins over the configured name.
    pub fn resolved_name(&self) -> String {
        env::var("AZURE_SEARCH_INDEX_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    pub top_k: usize,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self { temperature: 0.3, max_tokens: 1000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureSettings {
    pub openai_api_version: String,
    pub search_api_version: String,
}

impl Default for AzureSettings {
    fn default() -> Self {
        Self {
            openai_api_version: "2024-06-01".to_string(),
            search_api_version: "2024-07-01".to_string(),
        }
    }
}

/// Endpoint and key for one Azure service, read from the environment.
#[derive(Clone)]
pub struct ServiceCredentials {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
}

impl ServiceCredentials {
    /// `AZURE_OPENAI_ENDPOINT` and `AZURE_OPENAI_API_KEY`.
    pub fn openai_from_env(azure: &AzureSettings) -> Result<Self> {
        Ok(Self {
            endpoint: required_env("AZURE_OPENAI_ENDPOINT")?,
            api_key: required_env("AZURE_OPENAI_API_KEY")?,
            api_version: azure.openai_api_version.clone(),
        })
    }

    /// `AZURE_SEARCH_ENDPOINT` and `AZURE_SEARCH_ADMIN_KEY`.
    pub fn search_from_env(azure: &AzureSettings) -> Result<Self> {
        Ok(Self {
            endpoint: required_env("AZURE_SEARCH_ENDPOINT")?,
            api_key: required_env("AZURE_SEARCH_ADMIN_KEY")?,
            api_version: azure.search_api_version.clone(),
        })
    }

    /// Endpoint without a trailing slash, ready for path joins.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}

impl fmt::Debug for ServiceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredentials")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// Read a non-empty environment variable or fail naming it.
pub fn required_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::InvalidConfig(format!("environment variable {name} is not set"))),
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
