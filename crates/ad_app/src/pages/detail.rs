use std::sync::Arc;

use ad_core::{Article, ArticleStore};

use crate::notice::Notice;

/// State owner for the view-only article page. Editing happens on the
/// editor page.
pub struct DetailPage {
    store: Arc<dyn ArticleStore>,
    article: Option<Article>,
    loading: bool,
    deleting: bool,
    notices: Vec<Notice>,
}

impl DetailPage {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            store,
            article: None,
            loading: false,
            deleting: false,
            notices: Vec::new(),
        }
    }

    /// Fetch one record. On failure the page keeps no article and the raw
    /// error text is surfaced as a notice; the caller navigates nowhere.
    pub async fn load(&mut self, id: &str) {
        self.loading = true;
        match self.store.get_article(id).await {
            Ok(article) => self.article = Some(article),
            Err(err) => {
                self.article = None;
                self.notices.push(Notice::error("Error", err.to_string()));
            }
        }
        self.loading = false;
    }

    /// Delete the loaded record. Returns true when the caller should
    /// navigate back to the dashboard.
    pub async fn delete(&mut self) -> bool {
        let Some(id) = self.article.as_ref().map(|a| a.id.clone()) else {
            return false;
        };
        self.deleting = true;
        let deleted = match self.store.delete_article(&id).await {
            Ok(()) => {
                self.notices.push(Notice::info(
                    "Article Deleted",
                    "The article has been removed successfully",
                ));
                self.article = None;
                true
            }
            Err(err) => {
                self.notices
                    .push(Notice::error("Delete Failed", err.to_string()));
                false
            }
        };
        self.deleting = false;
        deleted
    }

    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
