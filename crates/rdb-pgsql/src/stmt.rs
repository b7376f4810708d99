//! Statement templates with no portable generic form.

use std::collections::HashMap;
use std::sync::LazyLock;

use rdb_core::{render_template, Dialect, SqlValue, ToSqlValue, STMT_INSERT_IGNORE};

use crate::dialect::PgsqlDialect;

/// `INSERT ... ON CONFLICT DO NOTHING`, available since PostgreSQL 9.5.
pub const INSERT_IGNORE: &str = "INSERT INTO %s (%s) VALUES (%s) ON CONFLICT DO NOTHING";

static STMT_TEMPLATES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HashMap::from([(STMT_INSERT_IGNORE, INSERT_IGNORE)]));

/// Returns the template registered under `key`.
#[must_use]
pub fn stmt_template(key: &str) -> Option<&'static str> {
    STMT_TEMPLATES.get(key).copied()
}

/// Builds an insert that silently skips rows violating a unique constraint.
///
/// ```rust
/// use rdb_pgsql::{InsertIgnore, PgsqlDialect};
///
/// let dialect = PgsqlDialect::new("app");
/// let (sql, params) = InsertIgnore::new("users")
///     .columns(&["id", "name"])
///     .values(vec![1_i64, 2])
///     .build(&dialect);
///
/// assert_eq!(
///     sql,
///     "INSERT INTO \"users\" (\"id\", \"name\") VALUES ($1, $2) ON CONFLICT DO NOTHING"
/// );
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InsertIgnore {
    table: String,
    columns: Vec<String>,
    values: Vec<SqlValue>,
}

impl InsertIgnore {
    /// Creates a builder for `table`.
    #[must_use]
    pub fn new(table: &str) -> Self {
        Self {
            table: String::from(table),
            columns: vec![],
            values: vec![],
        }
    }

    /// Sets the columns to insert into.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Sets the row values, one per column.
    #[must_use]
    pub fn values<T: ToSqlValue>(mut self, vals: Vec<T>) -> Self {
        self.values = vals.into_iter().map(ToSqlValue::to_sql_value).collect();
        self
    }

    /// Renders the statement and binds its values for PostgreSQL.
    #[must_use]
    pub fn build(self, dialect: &PgsqlDialect) -> (String, Vec<SqlValue>) {
        let cols: Vec<String> = self.columns.iter().map(|c| dialect.quote_str(c)).collect();
        let marks: Vec<&str> = self.values.iter().map(|_| "?").collect();
        let sql = render_template(
            INSERT_IGNORE,
            &[
                &dialect.quote_ident(&self.table),
                &cols.join(", "),
                &marks.join(", "),
            ],
        );
        dialect.stmt_bind_var(&sql, self.values)
    }
}
