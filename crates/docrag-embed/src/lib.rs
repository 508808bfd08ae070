use anyhow::Result;
use tracing::info;

use docrag_core::config::Settings;
use docrag_core::traits::Embedder;

mod azure;
mod fake;

pub use azure::AzureOpenAiEmbedder;
pub use fake::FakeEmbedder;

/// Hosted embedder from `AZURE_*` credentials, or the hashing fake when
/// `APP_USE_FAKE_EMBEDDINGS` is `1`/`true`.
pub fn get_default_embedder(settings: &Settings) -> Result<Box<dyn Embedder>> {
    if use_fake_embeddings() {
        info!(dim = settings.index.dimensions, "using FakeEmbedder");
        return Ok(Box::new(FakeEmbedder::new(settings.index.dimensions)));
    }
    Ok(Box::new(AzureOpenAiEmbedder::from_env(settings)?))
}

pub fn use_fake_embeddings() -> bool {
    std::env::var("APP_USE_FAKE_EMBEDDINGS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
