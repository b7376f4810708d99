//! Generic SQL dialect.

use super::Dialect;
use crate::schema::Column;

/// A generic dialect using ANSI quoting and `?` placeholders.
///
/// Column types are emitted as given, with the length appended in
/// parentheses when present.
#[derive(Debug, Default, Clone)]
pub struct GenericDialect {
    db_name: String,
}

impl GenericDialect {
    /// Creates a new generic dialect bound to `db_name`.
    #[must_use]
    pub fn new(db_name: impl Into<String>) -> Self {
        Self {
            db_name: db_name.into(),
        }
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn db_name(&self) -> &str {
        &self.db_name
    }

    fn column_type_fmt(&self, _table: &str, col: &mut Column) -> String {
        if col.length.is_empty() {
            col.type_name.clone()
        } else {
            format!("{}({})", col.type_name, col.length)
        }
    }
}
