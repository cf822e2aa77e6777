use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Article, NewArticle};
use super::query::SelectQuery;

pub fn query(conn: &Connection) -> SelectQuery<'_, Article> {
    SelectQuery::new(conn, Article::TABLE, Article::COLUMNS, parse_article_row)
}

pub fn insert_article(conn: &Connection, article: &NewArticle) -> Result<Article> {
    let sql = "INSERT INTO articles (title, author, word_count, published_at) VALUES (?1, ?2, ?3, ?4) RETURNING id, title, author, word_count, published_at, created_at";

    conn.query_row(
        sql,
        params![article.title, article.author, article.word_count, article.published_at],
        parse_article_row,
    )
    .context("Failed to insert article")
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Article>> {
    let sql = "SELECT id, title, author, word_count, published_at, created_at FROM articles WHERE id = ?1";

    conn.query_row(sql, params![id], parse_article_row)
        .optional()
        .context("Failed to query article by id")
}

fn parse_article_row(row: &rusqlite::Row) -> rusqlite::Result<Article> {
    Ok(Article {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        word_count: row.get(3)?,
        published_at: row.get(4)?,
        created_at: row.get(5)?,
    })
}
