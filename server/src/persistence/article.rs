use serde::{Deserialize, Serialize};

/// Column bound for `articles.title`.
pub const MAX_TITLE_LEN: usize = 128;
/// Column bound for `articles.body`.
pub const MAX_BODY_LEN: usize = 1024;

pub const DEFAULT_ARTICLE_TITLE: &str = "The drive to develop!";
pub const DEFAULT_ARTICLE_BODY: &str = "...it's what keeps me going.";

/// A persisted article. `id` is assigned by the store on insert and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
}
