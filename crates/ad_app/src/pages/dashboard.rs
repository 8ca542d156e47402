use std::sync::Arc;

use ad_core::{classify, sample_articles, Article, ArticleStore, Provenance};
use tracing::error;

use crate::form::{ArticleForm, SubmitResult};
use crate::notice::Notice;

/// State owner for the list page.
///
/// Holds the only mutable copy of the article collection; views render from
/// borrowed slices and mutation happens exclusively through the operations
/// below, always in response to confirmed server replies.
pub struct Dashboard {
    store: Arc<dyn ArticleStore>,
    articles: Vec<Article>,
    loading: bool,
    scraping: bool,
    error: Option<String>,
    notices: Vec<Notice>,
}

impl Dashboard {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            store,
            articles: Vec::new(),
            loading: false,
            scraping: false,
            error: None,
            notices: Vec::new(),
        }
    }

    /// Replace local state with the server's current collection. An empty or
    /// failed fetch substitutes the built-in placeholder dataset so the
    /// dashboard never renders a blank screen.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.store.list_articles().await {
            Ok(articles) if !articles.is_empty() => self.articles = articles,
            Ok(_) => self.articles = sample_articles(),
            Err(err) => {
                error!("Error fetching articles: {err}");
                self.articles = sample_articles();
                self.error = Some("Using sample data - API unavailable".to_string());
            }
        }
        self.loading = false;
    }

    /// Fire the external ingestion process, then re-fetch to observe its
    /// results; the acknowledgement itself carries no articles.
    pub async fn trigger_scrape(&mut self) {
        self.scraping = true;
        match self.store.trigger_scrape().await {
            Ok(outcome) => {
                let message = outcome
                    .message
                    .unwrap_or_else(|| "Articles have been fetched successfully".to_string());
                self.notices.push(Notice::info("Scraping Complete", message));
                self.refresh().await;
            }
            Err(err) => {
                self.notices
                    .push(Notice::error("Scraping Failed", err.to_string()));
            }
        }
        self.scraping = false;
    }

    /// Drive the form's submission through the store. Returns whether a
    /// record was created; validation failures stay on the form.
    pub async fn create(&mut self, form: &mut ArticleForm) -> bool {
        let store = self.store.clone();
        let result = form
            .submit(move |input| async move { store.create_article(input).await })
            .await;
        match result {
            SubmitResult::Submitted(_) => {
                self.notices.push(Notice::info(
                    "Article Created",
                    "Your article has been added successfully",
                ));
                self.refresh().await;
                true
            }
            SubmitResult::Failed(err) => {
                self.notices
                    .push(Notice::error("Creation Failed", err.to_string()));
                false
            }
            SubmitResult::Invalid | SubmitResult::Pending => false,
        }
    }

    /// Delete by identifier. On success the record is dropped from local
    /// state directly; the confirmed delete response is trusted over a
    /// re-fetch.
    pub async fn delete(&mut self, id: &str) -> bool {
        match self.store.delete_article(id).await {
            Ok(()) => {
                self.articles.retain(|article| article.id != id);
                self.notices.push(Notice::info(
                    "Article Deleted",
                    "The article has been removed successfully",
                ));
                true
            }
            Err(err) => {
                self.notices
                    .push(Notice::error("Delete Failed", err.to_string()));
                false
            }
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn scraped(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| classify(a) == Provenance::Scraped)
            .collect()
    }

    pub fn manual(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| classify(a) == Provenance::Manual)
            .collect()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_scraping(&self) -> bool {
        self.scraping
    }

    /// Drain accumulated notifications for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
