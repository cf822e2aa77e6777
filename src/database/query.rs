use anyhow::{bail, Context, Result};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

use crate::pagination::{Fetched, OffsetRange, PageSource, Sort};

pub type RowParser<T> = fn(&Row) -> rusqlite::Result<T>;

#[derive(Debug, Clone)]
enum Condition {
    Eq(&'static str, Value),
    Like(&'static str, String),
}

impl Condition {
    fn to_sql(&self) -> String {
        match self {
            Condition::Eq(column, _) => format!("{} = ?", column),
            Condition::Like(column, _) => format!("{} LIKE ?", column),
        }
    }

    fn value(&self) -> Value {
        match self {
            Condition::Eq(_, value) => value.clone(),
            Condition::Like(_, pattern) => Value::Text(format!("%{}%", pattern)),
        }
    }
}

/// SELECT over one table with filters and an accumulated ORDER BY
pub struct SelectQuery<'c, T> {
    conn: &'c Connection,
    table: &'static str,
    columns: &'static [&'static str],
    parser: RowParser<T>,
    conditions: Vec<Condition>,
    sorts: Vec<Sort>,
}

impl<'c, T> SelectQuery<'c, T> {
    pub fn new(
        conn: &'c Connection,
        table: &'static str,
        columns: &'static [&'static str],
        parser: RowParser<T>,
    ) -> Self {
        Self {
            conn,
            table,
            columns,
            parser,
            conditions: Vec::new(),
            sorts: Vec::new(),
        }
    }

    pub fn filter_eq(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Eq(column, value.into()));
        self
    }

    pub fn filter_like(mut self, column: &'static str, pattern: impl Into<String>) -> Self {
        self.conditions.push(Condition::Like(column, pattern.into()));
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn sorts(&self) -> &[Sort] {
        &self.sorts
    }

    pub fn count(&self) -> Result<u64> {
        self.validate()?;
        let sql = format!("SELECT COUNT(*) FROM {}{}", self.table, self.where_clause());

        let total: i64 = self
            .conn
            .query_row(&sql, params_from_iter(self.bind_values()), |row| row.get(0))
            .with_context(|| format!("Failed to count rows in {}", self.table))?;

        Ok(total as u64)
    }

    pub fn all(&self) -> Result<Vec<T>> {
        self.validate()?;
        let sql = format!("{}{}", self.select_sql(), self.order_clause());
        self.query_rows(&sql, self.bind_values())
    }

    fn range_rows(&self, range: OffsetRange) -> Result<Vec<T>> {
        let limit = i64::try_from(range.len()).context("Page size does not fit into LIMIT")?;
        let offset = i64::try_from(range.offset()).context("Page offset does not fit into OFFSET")?;

        let sql = format!("{}{} LIMIT ? OFFSET ?", self.select_sql(), self.order_clause());
        let mut values = self.bind_values();
        values.push(Value::Integer(limit));
        values.push(Value::Integer(offset));

        self.query_rows(&sql, values)
    }

    fn query_rows(&self, sql: &str, values: Vec<Value>) -> Result<Vec<T>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .with_context(|| format!("Failed to prepare query on {}", self.table))?;
        let rows = stmt
            .query_map(params_from_iter(values), self.parser)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| format!("Failed to read rows from {}", self.table))?;

        Ok(rows)
    }

    fn validate(&self) -> Result<()> {
        for condition in &self.conditions {
            let column = match condition {
                Condition::Eq(column, _) | Condition::Like(column, _) => column,
            };
            if !self.columns.contains(column) {
                bail!("Unknown filter column '{}' on {}", column, self.table);
            }
        }
        for sort in &self.sorts {
            if !self.columns.iter().any(|column| *column == sort.field) {
                bail!("Unknown sort field '{}' on {}", sort.field, self.table);
            }
        }
        Ok(())
    }

    fn select_sql(&self) -> String {
        format!(
            "SELECT {} FROM {}{}",
            self.columns.join(", "),
            self.table,
            self.where_clause()
        )
    }

    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = self.conditions.iter().map(Condition::to_sql).collect();
        format!(" WHERE {}", parts.join(" AND "))
    }

    fn order_clause(&self) -> String {
        if self.sorts.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = self
            .sorts
            .iter()
            .map(|sort| format!("{} {}", sort.field, sort.direction.as_sql()))
            .collect();
        format!(" ORDER BY {}", parts.join(", "))
    }

    fn bind_values(&self) -> Vec<Value> {
        self.conditions.iter().map(Condition::value).collect()
    }
}

impl<T> PageSource for SelectQuery<'_, T> {
    type Item = T;
    type Error = anyhow::Error;

    fn sorts_mut(&mut self) -> &mut Vec<Sort> {
        &mut self.sorts
    }

    fn fetch(&mut self, range: OffsetRange) -> Result<Fetched<T>> {
        let total = self.count()?;
        let items = self.range_rows(range)?;
        Ok(Fetched::new(items, total))
    }
}
