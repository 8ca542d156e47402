use std::collections::BTreeMap;
use std::future::Future;

use ad_core::{Article, ArticleInput, Error};
use chrono::DateTime;

/// Editable fields of an article draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Url,
    Content,
    PublishedDate,
    Source,
    Status,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Url => "url",
            FormField::Content => "content",
            FormField::PublishedDate => "published_date",
            FormField::Source => "source",
            FormField::Status => "status",
        }
    }
}

/// Outcome of a submit attempt.
#[derive(Debug)]
pub enum SubmitResult<T> {
    /// Validation failed; no call was made.
    Invalid,
    /// A previous submission is still in flight; no call was made.
    Pending,
    Submitted(T),
    Failed(Error),
}

/// Draft of one article's editable fields.
///
/// Seed with [`ArticleForm::new`] for create mode or
/// [`ArticleForm::for_article`] for edit mode. The same instance is re-seeded
/// via [`ArticleForm::reseed`] when the record under edit changes.
#[derive(Debug, Clone, Default)]
pub struct ArticleForm {
    title: String,
    url: String,
    content: String,
    published_date: String,
    source: String,
    status: String,
    errors: BTreeMap<FormField, String>,
    pending: bool,
}

impl ArticleForm {
    pub fn new() -> Self {
        Self {
            status: "original".to_string(),
            ..Self::default()
        }
    }

    pub fn for_article(article: &Article) -> Self {
        let mut form = Self::new();
        form.reseed(article);
        form
    }

    /// Replace the draft with the given article's values, reformatting the
    /// stored date for editing. Existing field errors are discarded.
    pub fn reseed(&mut self, article: &Article) {
        self.title = article.title.clone();
        self.url = article.url.clone();
        self.content = article.content.clone();
        self.published_date = article
            .published_date
            .as_deref()
            .map(edit_date)
            .unwrap_or_default();
        self.source = article.source.clone();
        self.status = if article.status.is_empty() {
            "original".to_string()
        } else {
            article.status.clone()
        };
        self.errors.clear();
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Url => self.url = value,
            FormField::Content => self.content = value,
            FormField::PublishedDate => self.published_date = value,
            FormField::Source => self.source = value,
            FormField::Status => self.status = value,
        }
        // Editing a field clears that field's error; the others stay.
        self.errors.remove(&field);
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Url => &self.url,
            FormField::Content => &self.content,
            FormField::PublishedDate => &self.published_date,
            FormField::Source => &self.source,
            FormField::Status => &self.status,
        }
    }

    pub fn errors(&self) -> &BTreeMap<FormField, String> {
        &self.errors
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Check the draft against the field rules. Runs on submit attempts,
    /// never on every edit.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();
        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, "Title is required".to_string());
        }
        if self.url.trim().is_empty() {
            errors.insert(FormField::Url, "URL is required".to_string());
        } else if !has_http_scheme(&self.url) {
            errors.insert(
                FormField::Url,
                "URL must start with http:// or https://".to_string(),
            );
        }
        if self.content.trim().is_empty() {
            errors.insert(FormField::Content, "Content is required".to_string());
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// The draft as a submission payload. An empty date field becomes an
    /// explicit absence, never an empty string.
    pub fn payload(&self) -> ArticleInput {
        ArticleInput {
            title: self.title.clone(),
            url: self.url.clone(),
            content: self.content.clone(),
            published_date: if self.published_date.trim().is_empty() {
                None
            } else {
                Some(self.published_date.clone())
            },
            source: Some(self.source.clone()),
            status: Some(self.status.clone()),
            source_type: None,
        }
    }

    /// Run the externally supplied submit operation, gated by validation and
    /// the pending flag. The flag stays set for the full duration of the
    /// operation and clears regardless of outcome.
    pub async fn submit<T, F, Fut>(&mut self, op: F) -> SubmitResult<T>
    where
        F: FnOnce(ArticleInput) -> Fut,
        Fut: Future<Output = ad_core::Result<T>>,
    {
        if self.pending {
            return SubmitResult::Pending;
        }
        if !self.validate() {
            return SubmitResult::Invalid;
        }
        self.pending = true;
        let result = op(self.payload()).await;
        self.pending = false;
        match result {
            Ok(value) => SubmitResult::Submitted(value),
            Err(err) => SubmitResult::Failed(err),
        }
    }
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

/// Reformat a stored date to the plain `YYYY-MM-DD` the date field edits.
fn edit_date(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.date_naive().format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
