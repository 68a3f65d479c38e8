//! Article endpoints backed by an [`ArticleRepository`].
//!
//! Writes arrive as HTML form posts (`title`, `body`, `_action`) and answer
//! with redirects; reads answer with JSON.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use serde::Deserialize;

use crate::persistence::{Article, ArticleRepository};
use crate::service::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct NewArticleForm {
    title: Option<String>,
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleActionForm {
    #[serde(rename = "_action")]
    action: Option<String>,
    title: Option<String>,
    body: Option<String>,
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ApiError> {
    value.ok_or(ApiError::MissingParameter(name))
}

pub async fn redirect_to_articles() -> Redirect {
    Redirect::to("/articles")
}

pub async fn list_articles<R: ArticleRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Article>>, ApiError> {
    tracing::debug!("HTTP list_articles");
    let articles = state.articles.list_articles().await?;
    Ok(Json(articles))
}

pub async fn create_article<R: ArticleRepository>(
    State(state): State<AppState<R>>,
    Form(form): Form<NewArticleForm>,
) -> Result<Redirect, ApiError> {
    let title = required(form.title, "title")?;
    let body = required(form.body, "body")?;
    tracing::info!(title = %title, "HTTP create_article");

    let article = state
        .articles
        .add_article(&title, &body)
        .await?
        .ok_or(ApiError::NotCreated)?;

    Ok(Redirect::to(&format!("/articles/{}", article.id)))
}

pub async fn show_article<R: ArticleRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Article>, ApiError> {
    tracing::debug!(id, "HTTP show_article");
    let article = state
        .articles
        .load_article(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(article))
}

pub async fn update_or_delete_article<R: ArticleRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Form(form): Form<ArticleActionForm>,
) -> Result<Redirect, ApiError> {
    let action = required(form.action, "_action")?;
    tracing::info!(id, action = %action, "HTTP update_or_delete_article");

    match action.as_str() {
        "update" => {
            let title = required(form.title, "title")?;
            let body = required(form.body, "body")?;
            if !state.articles.edit_article(id, &title, &body).await? {
                return Err(ApiError::NotFound(id));
            }
            Ok(Redirect::to(&format!("/articles/{id}")))
        }
        "delete" => {
            if !state.articles.delete_article(id).await? {
                return Err(ApiError::NotFound(id));
            }
            Ok(Redirect::to("/articles"))
        }
        other => Err(ApiError::UnknownAction(other.to_string())),
    }
}
