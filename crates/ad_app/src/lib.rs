pub mod form;
pub mod notice;
pub mod pages;
pub mod views;

#[cfg(test)]
mod test_support;

pub mod prelude {
    pub use crate::form::{ArticleForm, FormField, SubmitResult};
    pub use crate::notice::{Notice, Severity};
    pub use crate::pages::{Dashboard, DetailPage, EditorPage};
    pub use crate::views::Tab;
}
