//! Async repository trait for articles.
//!
//! Request handlers are generic over [`ArticleRepository`], so the SQLite
//! backend and the in-memory backend can be swapped without touching them.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send`, which axum handlers and `tokio::spawn`
//! require.
//!
//! Absence is reported in the `Ok` value (`None` / `false`). Only storage
//! failures surface as `Err`, and they are passed through untranslated.

use super::{Article, PersistenceError};
use std::future::Future;

/// CRUD contract for articles.
pub trait ArticleRepository: Send + Sync {
    /// All articles in insertion order. Empty when the store is empty.
    fn list_articles(
        &self,
    ) -> impl Future<Output = Result<Vec<Article>, PersistenceError>> + Send;

    fn load_article(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Article>, PersistenceError>> + Send;

    /// Insert a new article; the store assigns the id. No validation happens
    /// here beyond what the store itself enforces.
    fn add_article(
        &self,
        title: &str,
        body: &str,
    ) -> impl Future<Output = Result<Option<Article>, PersistenceError>> + Send;

    /// Overwrite both title and body. Returns `true` iff the id existed.
    fn edit_article(
        &self,
        id: i64,
        title: &str,
        body: &str,
    ) -> impl Future<Output = Result<bool, PersistenceError>> + Send;

    /// Hard delete. Returns `true` iff the id existed.
    fn delete_article(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<bool, PersistenceError>> + Send;
}
