mod article;
mod memory;
mod seed;
pub mod sqlite;
pub mod traits;

pub use article::{
    Article, DEFAULT_ARTICLE_BODY, DEFAULT_ARTICLE_TITLE, MAX_BODY_LEN, MAX_TITLE_LEN,
};
pub use memory::InMemoryArticleRepository;
pub use seed::seed_default_article;
pub use traits::ArticleRepository;

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration failed: {0}")]
    Migration(String),
    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}
