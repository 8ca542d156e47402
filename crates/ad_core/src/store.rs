use async_trait::async_trait;
use serde::Deserialize;

use crate::models::{Article, ArticleInput, ArticlePatch};
use crate::Result;

/// Acknowledgement returned by the scrape trigger. The ingested articles are
/// not included; callers re-fetch the list to observe them.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles_count: Option<u64>,
}

/// Operations against the remote article store.
///
/// Page controllers hold this trait object; the HTTP client implements it.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Fetch the full collection.
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Fetch one record by identifier.
    async fn get_article(&self, id: &str) -> Result<Article>;

    /// Submit a new record and return it with its server-assigned id.
    async fn create_article(&self, input: ArticleInput) -> Result<Article>;

    /// Submit only the supplied fields; omitted fields are left untouched
    /// server-side.
    async fn update_article(&self, id: &str, patch: &ArticlePatch) -> Result<Article>;

    /// Delete by identifier. Succeeds silently.
    async fn delete_article(&self, id: &str) -> Result<()>;

    /// Fire the external ingestion process and return its acknowledgement.
    async fn trigger_scrape(&self) -> Result<ScrapeOutcome>;
}
