use chrono::NaiveDateTime;

use crate::pagination::{PaginationConfig, Sort};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub word_count: i64,
    pub published_at: NaiveDateTime,
    pub created_at: Option<NaiveDateTime>,
}

impl Article {
    pub const TABLE: &'static str = "articles";
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "author",
        "word_count",
        "published_at",
        "created_at",
    ];

    /// Newest first, id as tie-breaker
    pub fn pagination() -> PaginationConfig {
        PaginationConfig::new()
            .with_page_size(20)
            .with_max_page_size(100)
            .with_sort(Sort::desc("published_at"))
            .with_sort(Sort::desc("id"))
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub author: String,
    pub word_count: i64,
    pub published_at: NaiveDateTime,
}
