use ad_core::{
    Article, ArticleInput, ArticlePatch, ArticleStore, Error, Result, ScrapeOutcome, SourceType,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Production endpoint of the article extraction service.
pub const DEFAULT_BASE_URL: &str = "https://webextract.onrender.com";

/// HTTP client for the remote article store.
///
/// Every call is a fresh round trip: no retries, no timeouts, no caching.
/// Non-success responses become [`Error::Server`] carrying the raw body
/// text; failures before a response arrives become [`Error::Transport`].
pub struct ArticleClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArticleClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build a client against a non-default endpoint.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Error bodies are plain text; surface them verbatim.
        let body = response.text().await.unwrap_or_default();
        Err(Error::Server {
            status: status.as_u16(),
            body,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for ArticleClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStore for ArticleClient {
    async fn list_articles(&self) -> Result<Vec<Article>> {
        debug!("GET /articles");
        let response = self.http.get(self.endpoint("/articles")).send().await?;
        Self::read_json(response).await
    }

    async fn get_article(&self, id: &str) -> Result<Article> {
        debug!("GET /articles/{id}");
        let response = self
            .http
            .get(self.endpoint(&format!("/articles/{id}")))
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn create_article(&self, mut input: ArticleInput) -> Result<Article> {
        // Creations through this client are always manual entries. The stamp
        // happens here so callers cannot skip it.
        input.source_type = Some(SourceType::Manual);
        if input.status.as_deref().map_or(true, str::is_empty) {
            input.status = Some("original".to_string());
        }
        debug!("POST /articles");
        let response = self
            .http
            .post(self.endpoint("/articles"))
            .json(&input)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn update_article(&self, id: &str, patch: &ArticlePatch) -> Result<Article> {
        debug!("PUT /articles/{id}");
        let response = self
            .http
            .put(self.endpoint(&format!("/articles/{id}")))
            .json(patch)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn delete_article(&self, id: &str) -> Result<()> {
        debug!("DELETE /articles/{id}");
        let response = self
            .http
            .delete(self.endpoint(&format!("/articles/{id}")))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn trigger_scrape(&self) -> Result<ScrapeOutcome> {
        debug!("POST /scrape/oldest");
        let response = self
            .http
            .post(self.endpoint("/scrape/oldest"))
            .json(&serde_json::json!({ "status": "Extracted" }))
            .send()
            .await?;
        Self::read_json(response).await
    }
}
