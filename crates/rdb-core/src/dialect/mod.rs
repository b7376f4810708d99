//! SQL dialect support.
//!
//! Query builders and the schema modeler in this crate produce generic SQL:
//! identifiers go through [`Dialect::quote_str`], column types through
//! [`Dialect::column_type_fmt`], and every bound value is written as a `?`
//! marker which [`Dialect::stmt_bind_var`] rewrites into the target's native
//! placeholder syntax.

mod generic;

pub use generic::GenericDialect;

use chrono::{DateTime, TimeZone};

use crate::schema::Column;
use crate::value::SqlValue;

/// Key of the "insert, ignore rows that conflict" statement template.
pub const STMT_INSERT_IGNORE: &str = "insert-ignore";

/// Trait for SQL dialect-specific behavior.
///
/// Implementations must be stateless apart from configuration, so every
/// method is callable concurrently through a shared reference.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the database name this dialect is bound to.
    fn db_name(&self) -> &str;

    /// Returns the identifier quote character.
    fn quote_char(&self) -> char {
        '"'
    }

    /// Wraps a bare name in the quote character. No escaping is applied.
    fn quote_ident(&self, name: &str) -> String {
        let q = self.quote_char();
        format!("{q}{name}{q}")
    }

    /// Quotes an identifier that may also be `*` or a function call.
    fn quote_str(&self, name: &str) -> String {
        if name == "*" {
            return String::from(name);
        }
        self.quote_ident(name)
    }

    /// Normalizes a column descriptor before its type is formatted.
    fn column_type_fix(&self, col: &mut Column) {
        col.fix();
    }

    /// Returns the type declaration for a column.
    ///
    /// `col` may be normalized in place.
    fn column_type_fmt(&self, table: &str, col: &mut Column) -> String;

    /// Returns the full column definition used in CREATE/ALTER TABLE.
    fn column_definition(&self, table: &str, col: &Column) -> String {
        let mut col = col.clone();
        self.column_type_fix(&mut col);
        let mut sql = format!(
            "{} {}",
            self.quote_ident(&col.name),
            self.column_type_fmt(table, &mut col)
        );
        if !col.nullable {
            sql.push_str(" NOT NULL");
        }
        if let Some(ref default) = col.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        sql
    }

    /// Rewrites the `?` markers of `sql` for this dialect and returns the
    /// values that still have to be sent as parameters.
    fn stmt_bind_var(&self, sql: &str, values: Vec<SqlValue>) -> (String, Vec<SqlValue>) {
        (String::from(sql), values)
    }

    /// Returns a statement template with `%s` slots, if the dialect has one
    /// for `key`.
    fn stmt_template(&self, key: &str) -> Option<&'static str> {
        let _ = key;
        None
    }

    /// Returns the chrono format string for textual timestamps.
    fn datetime_format(&self) -> &'static str {
        "%Y-%m-%d %H:%M:%S"
    }

    /// Formats a timestamp with [`Dialect::datetime_format`].
    fn format_datetime<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
        Self: Sized,
    {
        dt.format(self.datetime_format()).to_string()
    }
}

/// Fills the `%s` slots of `template` with `args`, left to right.
///
/// Slots without a matching argument are left as `%s`; surplus arguments
/// are ignored.
#[must_use]
pub fn render_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("%s"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
