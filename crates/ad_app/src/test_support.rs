use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ad_core::{
    Article, ArticleInput, ArticlePatch, ArticleStore, Error, Result, ScrapeOutcome, SourceType,
};
use async_trait::async_trait;

pub fn article(id: &str, status: &str, source_type: Option<SourceType>) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {id}"),
        url: format!("https://example.com/{id}"),
        content: "Body text long enough for a short preview.".to_string(),
        published_date: Some("2025-01-02T10:00:00Z".to_string()),
        source: "test".to_string(),
        status: status.to_string(),
        source_type,
    }
}

/// Scriptable in-memory store for controller tests.
#[derive(Default)]
pub struct MockStore {
    pub articles: Mutex<Vec<Article>>,
    /// Articles the fake backend ingests on the next scrape trigger.
    pub pending_scrape: Mutex<Vec<Article>>,
    pub last_create: Mutex<Option<ArticleInput>>,
    pub last_patch: Mutex<Option<ArticlePatch>>,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub fail_list: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl MockStore {
    pub fn with_articles(articles: Vec<Article>) -> Arc<Self> {
        let store = Self::default();
        *store.articles.lock().unwrap() = articles;
        Arc::new(store)
    }
}

#[async_trait]
impl ArticleStore for MockStore {
    async fn list_articles(&self) -> Result<Vec<Article>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Error::Server {
                status: 500,
                body: "backend unavailable".to_string(),
            });
        }
        Ok(self.articles.lock().unwrap().clone())
    }

    async fn get_article(&self, id: &str) -> Result<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| Error::Server {
                status: 404,
                body: format!("Article {id} not found"),
            })
    }

    async fn create_article(&self, input: ArticleInput) -> Result<Article> {
        let serial = self.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Article {
            id: format!("created-{serial}"),
            title: input.title.clone(),
            url: input.url.clone(),
            content: input.content.clone(),
            published_date: input.published_date.clone(),
            source: input.source.clone().unwrap_or_default(),
            status: input
                .status
                .clone()
                .unwrap_or_else(|| "original".to_string()),
            source_type: Some(SourceType::Manual),
        };
        *self.last_create.lock().unwrap() = Some(input);
        self.articles.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_article(&self, id: &str, patch: &ArticlePatch) -> Result<Article> {
        *self.last_patch.lock().unwrap() = Some(patch.clone());
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::Server {
                status: 404,
                body: format!("Article {id} not found"),
            })?;
        if let Some(title) = &patch.title {
            article.title = title.clone();
        }
        if let Some(url) = &patch.url {
            article.url = url.clone();
        }
        if let Some(content) = &patch.content {
            article.content = content.clone();
        }
        if let Some(date) = &patch.published_date {
            article.published_date = date.clone();
        }
        if let Some(source) = &patch.source {
            article.source = source.clone();
        }
        if let Some(status) = &patch.status {
            article.status = status.clone();
        }
        if let Some(source_type) = patch.source_type {
            article.source_type = Some(source_type);
        }
        Ok(article.clone())
    }

    async fn delete_article(&self, id: &str) -> Result<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Error::Server {
                status: 500,
                body: "delete rejected".to_string(),
            });
        }
        self.articles.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn trigger_scrape(&self) -> Result<ScrapeOutcome> {
        let mut ingested: Vec<Article> = self.pending_scrape.lock().unwrap().drain(..).collect();
        let count = ingested.len() as u64;
        self.articles.lock().unwrap().append(&mut ingested);
        Ok(ScrapeOutcome {
            message: Some(format!("Scraped {count} new articles")),
            articles_count: Some(count),
        })
    }
}
