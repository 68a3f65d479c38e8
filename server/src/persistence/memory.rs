//! In-memory article repository.
//!
//! Used by tests and by deployments that do not want a database file. It
//! enforces the same column bounds as the SQLite schema.

use tokio::sync::RwLock;

use super::traits::ArticleRepository;
use super::{Article, PersistenceError, MAX_BODY_LEN, MAX_TITLE_LEN};

#[derive(Default)]
struct Inner {
    articles: Vec<Article>,
    last_id: i64,
}

/// [`ArticleRepository`] over a vector guarded by a `tokio::sync::RwLock`.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    inner: RwLock<Inner>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_bounds(title: &str, body: &str) -> Result<(), PersistenceError> {
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(PersistenceError::FieldTooLong {
            field: "title",
            max: MAX_TITLE_LEN,
        });
    }
    if body.chars().count() > MAX_BODY_LEN {
        return Err(PersistenceError::FieldTooLong {
            field: "body",
            max: MAX_BODY_LEN,
        });
    }
    Ok(())
}

impl ArticleRepository for InMemoryArticleRepository {
    async fn list_articles(&self) -> Result<Vec<Article>, PersistenceError> {
        Ok(self.inner.read().await.articles.clone())
    }

    async fn load_article(&self, id: i64) -> Result<Option<Article>, PersistenceError> {
        let inner = self.inner.read().await;
        Ok(inner.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn add_article(
        &self,
        title: &str,
        body: &str,
    ) -> Result<Option<Article>, PersistenceError> {
        check_bounds(title, body)?;

        let mut inner = self.inner.write().await;
        // Ids only grow, so a deleted id is never handed out again.
        inner.last_id += 1;
        let article = Article {
            id: inner.last_id,
            title: title.to_owned(),
            body: body.to_owned(),
        };
        inner.articles.push(article.clone());
        Ok(Some(article))
    }

    async fn edit_article(
        &self,
        id: i64,
        title: &str,
        body: &str,
    ) -> Result<bool, PersistenceError> {
        check_bounds(title, body)?;

        let mut inner = self.inner.write().await;
        match inner.articles.iter_mut().find(|a| a.id == id) {
            Some(article) => {
                article.title = title.to_owned();
                article.body = body.to_owned();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_article(&self, id: i64) -> Result<bool, PersistenceError> {
        let mut inner = self.inner.write().await;
        let before = inner.articles.len();
        inner.articles.retain(|a| a.id != id);
        Ok(inner.articles.len() != before)
    }
}
