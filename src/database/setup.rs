use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use rusqlite::Connection;

use super::articles::insert_article;
use super::models::NewArticle;

const AUTHORS: &[&str] = &["ada", "grace", "linus", "barbara", "ken"];

pub fn reset_database(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::info!("Database schema reset successfully");
    Ok(())
}

/// Inserts `count` demo articles, one per hour going back from now
pub fn seed_articles(conn: &Connection, count: usize) -> Result<usize> {
    let now = Utc::now().naive_utc();

    for i in 0..count {
        let article = NewArticle {
            title: format!("Demo article #{}", i + 1),
            author: AUTHORS[i % AUTHORS.len()].to_string(),
            word_count: 250 + (i as i64 * 37) % 1800,
            published_at: now - Duration::hours((count - i) as i64),
        };
        insert_article(conn, &article)?;
    }

    log::info!("Seeded {} articles", count);
    Ok(count)
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
