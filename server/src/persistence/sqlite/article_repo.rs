//! SQLite-backed repository for articles.

use super::Database;
use crate::persistence::traits::ArticleRepository;
use crate::persistence::{Article, PersistenceError};

/// Row type for article queries, mapped via `sqlx::FromRow`.
#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
}

impl From<ArticleRow> for Article {
    fn from(r: ArticleRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            body: r.body,
        }
    }
}

/// SQLite implementation of [`ArticleRepository`].
///
/// Holds no cached rows; every call re-queries the table inside its own
/// transaction.
#[derive(Clone)]
pub struct SqliteArticleRepository {
    db: Database,
}

impl SqliteArticleRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ArticleRepository for SqliteArticleRepository {
    async fn list_articles(&self) -> Result<Vec<Article>, PersistenceError> {
        self.db
            .transaction(|conn| {
                Box::pin(async move {
                    let rows: Vec<ArticleRow> =
                        sqlx::query_as("SELECT id, title, body FROM articles ORDER BY id")
                            .fetch_all(&mut *conn)
                            .await?;
                    let articles: Vec<Article> = rows.into_iter().map(Article::from).collect();
                    Ok::<_, PersistenceError>(articles)
                })
            })
            .await
    }

    async fn load_article(&self, id: i64) -> Result<Option<Article>, PersistenceError> {
        self.db
            .transaction(move |conn| {
                Box::pin(async move {
                    let row: Option<ArticleRow> =
                        sqlx::query_as("SELECT id, title, body FROM articles WHERE id = ?")
                            .bind(id)
                            .fetch_optional(&mut *conn)
                            .await?;
                    Ok::<_, PersistenceError>(row.map(Article::from))
                })
            })
            .await
    }

    async fn add_article(
        &self,
        title: &str,
        body: &str,
    ) -> Result<Option<Article>, PersistenceError> {
        let title = title.to_owned();
        let body = body.to_owned();

        let article = self
            .db
            .transaction(move |conn| {
                Box::pin(async move {
                    let row: Option<ArticleRow> = sqlx::query_as(
                        "INSERT INTO articles (title, body) VALUES (?, ?) \
                         RETURNING id, title, body",
                    )
                    .bind(title)
                    .bind(body)
                    .fetch_optional(&mut *conn)
                    .await?;
                    Ok::<_, PersistenceError>(row.map(Article::from))
                })
            })
            .await?;

        if let Some(ref a) = article {
            tracing::debug!(id = a.id, "Inserted article");
        }
        Ok(article)
    }

    async fn edit_article(
        &self,
        id: i64,
        title: &str,
        body: &str,
    ) -> Result<bool, PersistenceError> {
        let title = title.to_owned();
        let body = body.to_owned();

        self.db
            .transaction(move |conn| {
                Box::pin(async move {
                    let result = sqlx::query("UPDATE articles SET title = ?, body = ? WHERE id = ?")
                        .bind(title)
                        .bind(body)
                        .bind(id)
                        .execute(&mut *conn)
                        .await?;
                    Ok::<_, PersistenceError>(result.rows_affected() > 0)
                })
            })
            .await
    }

    async fn delete_article(&self, id: i64) -> Result<bool, PersistenceError> {
        self.db
            .transaction(move |conn| {
                Box::pin(async move {
                    let result = sqlx::query("DELETE FROM articles WHERE id = ?")
                        .bind(id)
                        .execute(&mut *conn)
                        .await?;
                    Ok::<_, PersistenceError>(result.rows_affected() > 0)
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MAX_BODY_LEN, MAX_TITLE_LEN};

    async fn test_repo() -> SqliteArticleRepository {
        let db = Database::new_in_memory().await.unwrap();
        SqliteArticleRepository::new(db)
    }

    #[tokio::test]
    async fn test_add_and_load_roundtrip() {
        let repo = test_repo().await;
        let added = repo
            .add_article("Hello", "First post")
            .await
            .unwrap()
            .unwrap();
        let loaded = repo.load_article(added.id).await.unwrap();
        assert_eq!(loaded, Some(added.clone()));
        assert_eq!(added.title, "Hello");
        assert_eq!(added.body, "First post");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = test_repo().await;
        let list = repo.list_articles().await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = test_repo().await;
        let a = repo.add_article("A", "a").await.unwrap().unwrap();
        let b = repo.add_article("B", "b").await.unwrap().unwrap();
        let list = repo.list_articles().await.unwrap();
        assert_eq!(list, vec![a, b]);
    }

    #[tokio::test]
    async fn test_edit_overwrites_title_and_body() {
        let repo = test_repo().await;
        let a = repo.add_article("Old", "old body").await.unwrap().unwrap();
        assert!(repo.edit_article(a.id, "New", "new body").await.unwrap());
        let loaded = repo.load_article(a.id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "New");
        assert_eq!(loaded.body, "new body");
        assert_eq!(loaded.id, a.id);
    }

    #[tokio::test]
    async fn test_edit_twice_same_state() {
        let repo = test_repo().await;
        let a = repo.add_article("t", "b").await.unwrap().unwrap();
        assert!(repo.edit_article(a.id, "t2", "b2").await.unwrap());
        let once = repo.load_article(a.id).await.unwrap();
        // An UPDATE that matches the row still counts as a hit in SQLite.
        assert!(repo.edit_article(a.id, "t2", "b2").await.unwrap());
        let twice = repo.load_article(a.id).await.unwrap();
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_delete_is_final() {
        let repo = test_repo().await;
        let a = repo.add_article("t", "b").await.unwrap().unwrap();
        assert!(repo.delete_article(a.id).await.unwrap());
        assert_eq!(repo.load_article(a.id).await.unwrap(), None);
        assert!(!repo.delete_article(a.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_absent_id() {
        let repo = test_repo().await;
        assert_eq!(repo.load_article(999_999).await.unwrap(), None);
        assert!(!repo.edit_article(999_999, "t", "b").await.unwrap());
        assert!(!repo.delete_article(999_999).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = test_repo().await;
        let a = repo.add_article("t", "b").await.unwrap().unwrap();
        repo.delete_article(a.id).await.unwrap();
        let b = repo.add_article("t", "b").await.unwrap().unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_title_too_long_is_storage_failure() {
        let repo = test_repo().await;
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        let result = repo.add_article(&title, "b").await;
        assert!(matches!(result, Err(PersistenceError::Database(_))));
        assert!(repo.list_articles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_embedded_nul_does_not_bypass_bound() {
        let repo = test_repo().await;
        let title = format!("a\0{}", "x".repeat(300));
        let result = repo.add_article(&title, "b").await;
        assert!(matches!(result, Err(PersistenceError::Database(_))));

        let a = repo.add_article("t", "b").await.unwrap().unwrap();
        let body = format!("a\0{}", "y".repeat(MAX_BODY_LEN));
        assert!(repo.edit_article(a.id, "t", &body).await.is_err());
        assert_eq!(repo.list_articles().await.unwrap(), vec![a]);
    }

    #[tokio::test]
    async fn test_short_value_with_nul_roundtrips() {
        let repo = test_repo().await;
        let a = repo.add_article("a\0b", "b").await.unwrap().unwrap();
        let loaded = repo.load_article(a.id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "a\0b");
    }

    #[tokio::test]
    async fn test_title_at_bound_is_accepted() {
        let repo = test_repo().await;
        let title = "x".repeat(MAX_TITLE_LEN);
        let a = repo.add_article(&title, "b").await.unwrap().unwrap();
        assert_eq!(a.title, title);
    }

    #[tokio::test]
    async fn test_bounds_count_characters_not_bytes() {
        let repo = test_repo().await;
        let title = "é".repeat(MAX_TITLE_LEN);
        assert!(title.len() > MAX_TITLE_LEN);
        let a = repo.add_article(&title, "b").await.unwrap().unwrap();
        assert_eq!(a.title.chars().count(), MAX_TITLE_LEN);

        let too_long = "é".repeat(MAX_TITLE_LEN + 1);
        let result = repo.add_article(&too_long, "b").await;
        assert!(matches!(result, Err(PersistenceError::Database(_))));
    }

    #[tokio::test]
    async fn test_body_at_bound_is_accepted() {
        let repo = test_repo().await;
        let body = "y".repeat(MAX_BODY_LEN);
        let a = repo.add_article("t", &body).await.unwrap().unwrap();
        assert_eq!(a.body.len(), MAX_BODY_LEN);
    }

    #[tokio::test]
    async fn test_edit_too_long_leaves_row_untouched() {
        let repo = test_repo().await;
        let a = repo.add_article("t", "b").await.unwrap().unwrap();
        let body = "y".repeat(MAX_BODY_LEN + 1);
        let result = repo.edit_article(a.id, "t2", &body).await;
        assert!(result.is_err());
        assert_eq!(repo.load_article(a.id).await.unwrap(), Some(a));
    }
}
