pub mod error;
pub mod models;
pub mod store;

pub use error::Error;
pub use models::{
    classify, partition, sample_articles, Article, ArticleInput, ArticlePatch, Provenance,
    SourceType,
};
pub use store::{ArticleStore, ScrapeOutcome};

pub type Result<T> = std::result::Result<T, Error>;
