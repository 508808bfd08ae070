use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use docrag_core::types::{IndexedDocument, UploadStatus};

use crate::client::{check_status, AzureSearchIndex};

#[derive(Debug, Serialize)]
struct UploadAction<'a> {
    #[serde(rename = "@search.action")]
    action: &'static str,
    #[serde(flatten)]
    doc: &'a IndexedDocument,
}

#[derive(Debug, Serialize)]
struct UploadBatch<'a> {
    value: Vec<UploadAction<'a>>,
}

#[derive(Debug, Deserialize)]
struct IndexingResponse {
    value: Vec<IndexingResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexingResult {
    key: String,
    status: bool,
    #[serde(default)]
    error_message: Option<String>,
    status_code: u16,
}

impl From<IndexingResult> for UploadStatus {
    fn from(r: IndexingResult) -> Self {
        UploadStatus { key: r.key, succeeded: r.status, status_code: r.status_code, error_message: r.error_message }
    }
}

impl AzureSearchIndex {
    /// Upsert one batch. The service answers 200 when every item succeeded
    /// and 207 when some failed; both carry one status per document.
    pub fn upload_documents(&self, docs: &[IndexedDocument]) -> Result<Vec<UploadStatus>> {
        if docs.is_empty() {
            return Ok(vec![]);
        }
        let body = UploadBatch { value: docs.iter().map(|doc| UploadAction { action: "upload", doc }).collect() };
        debug!(index = %self.index_name, docs = docs.len(), "uploading batch");
        let resp = self.authorized(self.http.post(self.url("/docs/index"))).json(&body).send()?;
        let resp = check_status("search upload", resp)?;
        let parsed: IndexingResponse = resp.json()?;

        let statuses: Vec<UploadStatus> = parsed.value.into_iter().map(UploadStatus::from).collect();
        for failed in statuses.iter().filter(|s| !s.succeeded) {
            warn!(key = %failed.key, status = failed.status_code, "document rejected: {}", failed.error_message.as_deref().unwrap_or("no message"));
        }
        Ok(statuses)
    }
}
