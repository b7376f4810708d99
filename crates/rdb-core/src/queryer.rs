//! SELECT statement builder.
//!
//! Unlike the filter, the queryer is rendered as a whole statement; pass its
//! output through [`Dialect::stmt_bind_var`] before execution.

use crate::dialect::Dialect;
use crate::filter::Filter;
use crate::value::SqlValue;

/// A SELECT statement builder using string-based names.
#[derive(Debug, Clone, Default)]
pub struct Queryer {
    columns: Vec<String>,
    from: String,
    filter: Filter,
    group_by: Vec<String>,
    order: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Queryer {
    /// Creates a new builder selecting `*`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the columns to select. Entries may be function calls such as
    /// `COUNT(*)`, which the dialect leaves unquoted.
    #[must_use]
    pub fn select(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Sets the table to select from.
    #[must_use]
    pub fn from(mut self, table: &str) -> Self {
        self.from = String::from(table);
        self
    }

    /// Sets the WHERE conditions.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Adds GROUP BY columns.
    #[must_use]
    pub fn group_by(mut self, cols: &[&str]) -> Self {
        self.group_by = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Adds a raw ORDER BY term, e.g. `created DESC`.
    #[must_use]
    pub fn order(mut self, term: &str) -> Self {
        self.order.push(String::from(term));
        self
    }

    /// Sets LIMIT.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets OFFSET.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns the table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.from
    }

    /// Renders the statement with `?` markers.
    #[must_use]
    pub fn parse(&self, dialect: &dyn Dialect) -> (String, Vec<SqlValue>) {
        let mut sql = String::from("SELECT ");

        if self.columns.is_empty() {
            sql.push('*');
        } else {
            let cols: Vec<String> = self.columns.iter().map(|c| dialect.quote_str(c)).collect();
            sql.push_str(&cols.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&dialect.quote_ident(&self.from));

        let (where_sql, params) = self.filter.parse(dialect);
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }

        if !self.group_by.is_empty() {
            let cols: Vec<String> = self.group_by.iter().map(|c| dialect.quote_str(c)).collect();
            sql.push_str(" GROUP BY ");
            sql.push_str(&cols.join(", "));
        }

        if !self.order.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        (sql, params)
    }
}
