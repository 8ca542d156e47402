use serde::{Deserialize, Serialize};

/// A persisted article record as the remote store serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned identifier, immutable after creation.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub url: String,
    pub content: String,
    /// Date or datetime string; `None` means unknown.
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub source: String,
    /// Free-text label. `"original"` and `"Extracted"` carry meaning for
    /// classification; any string is accepted.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Scraped,
    Manual,
}

/// How an article entered the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Scraped,
    Manual,
}

/// Classify an article as scraped or manual.
///
/// The `source_type` field wins when present; older records only carry the
/// `"Extracted"` status marker. Every call site goes through here so the
/// fallback stays in one place.
pub fn classify(article: &Article) -> Provenance {
    if article.source_type == Some(SourceType::Scraped) || article.status == "Extracted" {
        Provenance::Scraped
    } else {
        Provenance::Manual
    }
}

/// Split a collection into its scraped and manual subsets, preserving
/// relative order. The subsets are disjoint and cover the whole input.
pub fn partition(articles: &[Article]) -> (Vec<&Article>, Vec<&Article>) {
    let mut scraped = Vec::new();
    let mut manual = Vec::new();
    for article in articles {
        match classify(article) {
            Provenance::Scraped => scraped.push(article),
            Provenance::Manual => manual.push(article),
        }
    }
    (scraped, manual)
}

impl Article {
    pub fn is_scraped(&self) -> bool {
        classify(self) == Provenance::Scraped
    }
}

/// The editable subset of an article, used for create submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub url: String,
    pub content: String,
    /// Serialized as explicit `null` when absent, never as `""`.
    pub published_date: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

/// A partial update. Unset fields are omitted from the payload entirely and
/// left untouched server-side; the client forwards exactly what it is given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticlePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// `Some(None)` clears the stored date; `None` leaves it untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

impl ArticleInput {
    /// A patch carrying every field of this input. The date is set
    /// explicitly so a cleared date reaches the server as `null`.
    pub fn into_patch(self) -> ArticlePatch {
        ArticlePatch {
            title: Some(self.title),
            url: Some(self.url),
            content: Some(self.content),
            published_date: Some(self.published_date),
            source: self.source,
            status: self.status,
            source_type: self.source_type,
        }
    }
}

/// Built-in placeholder dataset, substituted when the remote list is empty
/// or unreachable so the dashboard never renders a blank screen.
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            id: "sample-1".to_string(),
            title: "Introduction to Web Scraping with Python".to_string(),
            url: "https://example.com/web-scraping-python".to_string(),
            content: "Web scraping is a technique for extracting data from websites. \
                      Python offers powerful libraries like BeautifulSoup and Scrapy that \
                      make this process straightforward. In this article, we explore the \
                      fundamentals of web scraping, best practices, and ethical \
                      considerations when collecting data from the web."
                .to_string(),
            published_date: Some("2025-01-02T10:00:00Z".to_string()),
            source: "TechBlog".to_string(),
            status: "Extracted".to_string(),
            source_type: Some(SourceType::Scraped),
        },
        Article {
            id: "sample-2".to_string(),
            title: "Building RESTful APIs with FastAPI".to_string(),
            url: "https://example.com/fastapi-tutorial".to_string(),
            content: "FastAPI is a modern, fast web framework for building APIs with \
                      Python. It provides automatic documentation, type hints support, \
                      and exceptional performance. Learn how to create robust backend \
                      services with minimal code."
                .to_string(),
            published_date: Some("2025-01-01T14:30:00Z".to_string()),
            source: "DevNews".to_string(),
            status: "original".to_string(),
            source_type: Some(SourceType::Manual),
        },
    ]
}
