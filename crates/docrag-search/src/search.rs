use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use docrag_core::types::{HybridQuery, RetrievedResult};

use crate::client::{check_status, AzureSearchIndex};
use crate::schema::VECTOR_FIELD;

const SELECT_FIELDS: &str = "content,source_file,chunk_index";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    search: &'a str,
    vector_queries: Vec<VectorQuery<'a>>,
    top: usize,
    query_type: &'static str,
    semantic_configuration: &'a str,
    select: &'static str,
}

#[derive(Debug, Serialize)]
struct VectorQuery<'a> {
    kind: &'static str,
    vector: &'a [f32],
    k: usize,
    fields: &'static str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    value: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "@search.score", default)]
    score: Option<f64>,
    #[serde(default)]
    content: String,
    #[serde(default)]
    source_file: String,
    #[serde(default)]
    chunk_index: Option<usize>,
}

impl AzureSearchIndex {
    /// Keyword text, nearest-neighbour vector and semantic re-ranking in one
    /// request. Results keep the service's order.
    pub fn search_hybrid(&self, query: &HybridQuery) -> Result<Vec<RetrievedResult>> {
        let body = SearchRequest {
            search: &query.text,
            vector_queries: vec![VectorQuery { kind: "vector", vector: &query.vector, k: query.top_k, fields: VECTOR_FIELD }],
            top: query.top_k,
            query_type: "semantic",
            semantic_configuration: &self.settings.semantic_configuration,
            select: SELECT_FIELDS,
        };
        let resp = self.authorized(self.http.post(self.url("/docs/search"))).json(&body).send()?;
        let resp = check_status("search query", resp)?;
        let parsed: SearchResponse = resp.json()?;
        debug!(index = %self.index_name, hits = parsed.value.len(), "hybrid search returned");

        Ok(parsed
            .value
            .into_iter()
            .map(|hit| RetrievedResult {
                content: hit.content,
                source: hit.source_file,
                score: hit.score.unwrap_or(0.0),
                chunk_index: hit.chunk_index,
            })
            .collect())
    }
}
