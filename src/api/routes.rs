use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    articles::{get_article, list_article_page, list_articles},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/articles", get(list_articles))
        .route("/api/articles/page", get(list_article_page))
        .route("/api/articles/:id", get(get_article))
        .with_state(state)
}
