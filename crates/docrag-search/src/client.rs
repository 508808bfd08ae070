use anyhow::Result;
use reqwest::blocking::{Client, RequestBuilder, Response};
use tracing::info;

use docrag_core::config::{IndexSettings, ServiceCredentials, Settings};
use docrag_core::traits::SearchIndex;
use docrag_core::types::{HybridQuery, IndexedDocument, RetrievedResult, UploadStatus};
use docrag_core::Error;

use crate::schema::index_definition;

/// Handle on one Azure AI Search index.
pub struct AzureSearchIndex {
    pub(crate) http: Client,
    pub(crate) credentials: ServiceCredentials,
    pub(crate) index_name: String,
    pub(crate) settings: IndexSettings,
}

impl AzureSearchIndex {
    pub fn new(credentials: ServiceCredentials, index_name: impl Into<String>, settings: IndexSettings) -> Self {
        Self { http: Client::new(), credentials, index_name: index_name.into(), settings }
    }

    /// Credentials from `AZURE_SEARCH_*`; the index name honors `AZURE_SEARCH_INDEX_NAME`.
    pub fn from_env(settings: &Settings) -> Result<Self> {
        let credentials = ServiceCredentials::search_from_env(&settings.azure)?;
        Ok(Self::new(credentials, settings.index.resolved_name(), settings.index.clone()))
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// `{endpoint}/indexes/{name}{suffix}?api-version=...`
    pub(crate) fn url(&self, suffix: &str) -> String {
        format!(
            "{}/indexes/{}{}?api-version={}",
            self.credentials.base_url(),
            self.index_name,
            suffix,
            self.credentials.api_version
        )
    }

    pub(crate) fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("api-key", &self.credentials.api_key)
    }

    /// Create the index or update its schema in place.
    pub fn create_or_update_index(&self) -> Result<()> {
        let definition = index_definition(&self.index_name, &self.settings);
        let resp = self.authorized(self.http.put(self.url(""))).json(&definition).send()?;
        check_status("search index", resp)?;
        info!(index = %self.index_name, "search index created/updated");
        Ok(())
    }
}

/// Turn a non-success response into [`Error::Service`] carrying the body.
pub(crate) fn check_status(service: &'static str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().unwrap_or_default();
    Err(Error::Service { service, status: Some(status.as_u16()), message }.into())
}

impl SearchIndex for AzureSearchIndex {
    fn ensure_index(&self) -> Result<()> {
        self.create_or_update_index()
    }

    fn upload(&self, docs: &[IndexedDocument]) -> Result<Vec<UploadStatus>> {
        self.upload_documents(docs)
    }

    fn hybrid_search(&self, query: &HybridQuery) -> Result<Vec<RetrievedResult>> {
        self.search_hybrid(query)
    }
}
