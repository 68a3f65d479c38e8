use super::traits::ArticleRepository;
use super::{Article, PersistenceError, DEFAULT_ARTICLE_BODY, DEFAULT_ARTICLE_TITLE};

/// Insert the default article if the store is empty.
///
/// Called once from `main` before the listener is bound. Returns the
/// inserted article, or `None` when the store already had data.
pub async fn seed_default_article<R: ArticleRepository>(
    repo: &R,
) -> Result<Option<Article>, PersistenceError> {
    if !repo.list_articles().await?.is_empty() {
        tracing::debug!("Article store already populated, skipping seed");
        return Ok(None);
    }

    let seeded = repo
        .add_article(DEFAULT_ARTICLE_TITLE, DEFAULT_ARTICLE_BODY)
        .await?;
    if let Some(ref article) = seeded {
        tracing::info!(id = article.id, "Seeded default article");
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryArticleRepository;

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let repo = InMemoryArticleRepository::new();
        let seeded = seed_default_article(&repo).await.unwrap().unwrap();
        assert_eq!(seeded.title, DEFAULT_ARTICLE_TITLE);
        assert_eq!(seeded.body, DEFAULT_ARTICLE_BODY);

        let list = repo.list_articles().await.unwrap();
        assert_eq!(list, vec![seeded]);
    }

    #[tokio::test]
    async fn test_skips_populated_store() {
        let repo = InMemoryArticleRepository::new();
        repo.add_article("Mine", "mine").await.unwrap();
        assert_eq!(seed_default_article(&repo).await.unwrap(), None);
        let list = repo.list_articles().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Mine");
    }

    #[tokio::test]
    async fn test_second_seed_is_noop() {
        let repo = InMemoryArticleRepository::new();
        seed_default_article(&repo).await.unwrap();
        assert_eq!(seed_default_article(&repo).await.unwrap(), None);
        assert_eq!(repo.list_articles().await.unwrap().len(), 1);
    }
}
