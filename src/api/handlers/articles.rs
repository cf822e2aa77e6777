use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::models::ArticleItem;
use crate::database::{self, models::Article};
use crate::pagination::{paginate_from_request, Page, Paginated, QueryParams};
use super::AppState;

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Paginated<ArticleItem>>, ApiError> {
    let page = load_article_page(&state, &QueryParams::from(params))?;
    Ok(Json(page.response()))
}

pub async fn list_article_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Page<ArticleItem>>, ApiError> {
    let page = load_article_page(&state, &QueryParams::from(params))?;
    Ok(Json(page))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<i64>,
) -> Result<Json<ArticleItem>, ApiError> {
    let conn = database::get_connection(&state.pool)?;

    match database::articles::find_by_id(&conn, article_id)? {
        Some(article) => Ok(Json(ArticleItem::from(article))),
        None => Err(ApiError::NotFound(format!("Article {}", article_id))),
    }
}

fn load_article_page(state: &AppState, params: &QueryParams) -> Result<Page<ArticleItem>, ApiError> {
    let conn = database::get_connection(&state.pool)?;

    let mut query = database::articles::query(&conn);
    if let Some(author) = params.get("author").filter(|a| !a.is_empty()) {
        query = query.filter_eq("author", author.to_string());
    }
    if let Some(title) = params.get("q").filter(|q| !q.is_empty()) {
        query = query.filter_like("title", title);
    }

    let page = paginate_from_request(
        &mut query,
        params,
        &state.config.keys,
        &Article::pagination(),
        None,
    )?;

    Ok(page.map(ArticleItem::from))
}
