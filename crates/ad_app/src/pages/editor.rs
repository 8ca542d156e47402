use std::sync::Arc;

use ad_core::{Article, ArticleStore};

use crate::form::{ArticleForm, SubmitResult};
use crate::notice::Notice;

/// State owner for the edit page: one record under edit and the form
/// holding its draft.
pub struct EditorPage {
    store: Arc<dyn ArticleStore>,
    article: Option<Article>,
    form: ArticleForm,
    loading: bool,
    notices: Vec<Notice>,
}

impl EditorPage {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            store,
            article: None,
            form: ArticleForm::new(),
            loading: false,
            notices: Vec::new(),
        }
    }

    /// Fetch the record under edit and seed the form from it. Loading a
    /// different record re-seeds the same form instance.
    pub async fn load(&mut self, id: &str) {
        self.loading = true;
        match self.store.get_article(id).await {
            Ok(article) => {
                self.form.reseed(&article);
                self.article = Some(article);
            }
            Err(err) => {
                self.article = None;
                self.notices.push(Notice::error("Error", err.to_string()));
            }
        }
        self.loading = false;
    }

    /// Submit the full draft as a partial-update payload. Returns the
    /// updated record when the save went through.
    pub async fn save(&mut self) -> Option<Article> {
        let id = self.article.as_ref().map(|a| a.id.clone())?;
        let store = self.store.clone();
        let result = self
            .form
            .submit(move |input| async move { store.update_article(&id, &input.into_patch()).await })
            .await;
        match result {
            SubmitResult::Submitted(article) => {
                self.notices.push(Notice::info(
                    "Article Updated",
                    "Your changes have been saved successfully",
                ));
                self.article = Some(article.clone());
                Some(article)
            }
            SubmitResult::Failed(err) => {
                self.notices
                    .push(Notice::error("Update Failed", err.to_string()));
                None
            }
            SubmitResult::Invalid | SubmitResult::Pending => None,
        }
    }

    pub fn form(&self) -> &ArticleForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ArticleForm {
        &mut self.form
    }

    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use crate::test_support::{article, MockStore};

    #[tokio::test]
    async fn load_seeds_the_form_with_an_editable_date() {
        let store = MockStore::with_articles(vec![article("a1", "original", None)]);
        let mut editor = EditorPage::new(store);
        editor.load("a1").await;

        assert!(editor.article().is_some());
        assert_eq!(editor.form().field(FormField::Title), "Article a1");
        assert_eq!(editor.form().field(FormField::PublishedDate), "2025-01-02");
    }

    #[tokio::test]
    async fn save_sends_the_full_draft_as_a_patch() {
        let store = MockStore::with_articles(vec![article("a1", "original", None)]);
        let mut editor = EditorPage::new(store.clone());
        editor.load("a1").await;

        editor.form_mut().set_field(FormField::Title, "Renamed");
        editor.form_mut().set_field(FormField::PublishedDate, "");
        let updated = editor.save().await.expect("save should go through");
        assert_eq!(updated.title, "Renamed");

        let patch = store.last_patch.lock().unwrap().clone().unwrap();
        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.url.as_deref(), Some("https://example.com/a1"));
        // The cleared date is sent as an explicit null, not dropped.
        assert_eq!(patch.published_date, Some(None));

        let notices = editor.take_notices();
        assert_eq!(notices[0].title, "Article Updated");
    }

    #[tokio::test]
    async fn invalid_draft_blocks_the_save() {
        let store = MockStore::with_articles(vec![article("a1", "original", None)]);
        let mut editor = EditorPage::new(store.clone());
        editor.load("a1").await;

        editor.form_mut().set_field(FormField::Title, "");
        assert!(editor.save().await.is_none());
        assert!(store.last_patch.lock().unwrap().is_none());
        assert!(editor
            .form()
            .errors()
            .contains_key(&FormField::Title));
    }

    #[tokio::test]
    async fn save_without_a_loaded_record_is_a_noop() {
        let store = MockStore::with_articles(Vec::new());
        let mut editor = EditorPage::new(store.clone());
        assert!(editor.save().await.is_none());
        assert!(store.last_patch.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn loading_a_different_record_reseeds_the_form() {
        let store = MockStore::with_articles(vec![
            article("a1", "original", None),
            article("a2", "Extracted", None),
        ]);
        let mut editor = EditorPage::new(store);
        editor.load("a1").await;
        editor.form_mut().set_field(FormField::Title, "Half-edited");

        editor.load("a2").await;
        assert_eq!(editor.form().field(FormField::Title), "Article a2");
        assert_eq!(editor.form().field(FormField::Status), "Extracted");
    }
}
