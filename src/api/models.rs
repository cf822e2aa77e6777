use chrono::NaiveDateTime;
use serde::Serialize;

use crate::database::models::Article;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleItem {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub word_count: i64,
    pub published_at: NaiveDateTime,
}

impl From<Article> for ArticleItem {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            author: article.author,
            word_count: article.word_count,
            published_at: article.published_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
