//! Schema descriptors.
//!
//! Column types are generic names such as `int64`, `string` or
//! `float64-decimal`. They are kept as strings: the set is open, and a
//! dialect passes names it does not know through unchanged, which lets
//! callers supply raw dialect types directly.

use serde::{Deserialize, Serialize};

/// Schema definition for a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Generic type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Length or `precision,scale` specifier. Empty when absent.
    #[serde(default)]
    pub length: String,
    /// Whether the column allows NULL values.
    #[serde(default)]
    pub nullable: bool,
    /// Whether the column auto-increments.
    #[serde(default)]
    pub increment: bool,
    /// Raw SQL default expression.
    #[serde(default)]
    pub default: Option<String>,
}

impl Column {
    /// Creates a new non-null column.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            length: String::new(),
            nullable: false,
            increment: false,
            default: None,
        }
    }

    /// Sets the length or `precision,scale` specifier.
    #[must_use]
    pub fn length(mut self, length: impl Into<String>) -> Self {
        self.length = length.into();
        self
    }

    /// Allows NULL values.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Marks the column as auto-incrementing.
    #[must_use]
    pub const fn increment(mut self) -> Self {
        self.increment = true;
        self
    }

    /// Sets a raw SQL default expression.
    #[must_use]
    pub fn default_expr(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    /// Normalizes the descriptor in place.
    ///
    /// The type name is trimmed and lowercased; whitespace is stripped
    /// from the length specifier so `"10, 2"` becomes `"10,2"`. Values
    /// are not validated.
    pub fn fix(&mut self) {
        let type_name = self.type_name.trim().to_ascii_lowercase();
        if type_name != self.type_name {
            self.type_name = type_name;
        }
        self.fix_length();
    }

    /// Strips whitespace from the length specifier, leaving the type name
    /// untouched.
    pub fn fix_length(&mut self) {
        if self.length.contains(char::is_whitespace) {
            self.length.retain(|c| !c.is_whitespace());
        }
    }
}

/// Index kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndexType {
    /// Plain index.
    #[default]
    Index,
    /// Unique index.
    Unique,
    /// Primary key.
    Primary,
}

/// Schema definition for an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Index name.
    pub name: String,
    /// Index kind.
    #[serde(default, rename = "type")]
    pub kind: IndexType,
    /// Indexed column names.
    pub cols: Vec<String>,
}

impl Index {
    /// Creates a new index.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: IndexType, cols: &[&str]) -> Self {
        Self {
            name: name.into(),
            kind,
            cols: cols.iter().map(|s| String::from(*s)).collect(),
        }
    }
}

/// Schema definition for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Columns in declaration order.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Indexes, including the primary key.
    #[serde(default)]
    pub indexes: Vec<Index>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            indexes: vec![],
        }
    }

    /// Adds a column.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds an index.
    #[must_use]
    pub fn index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    /// Returns the column with the given name.
    #[must_use]
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the primary key index, if any.
    #[must_use]
    pub fn primary_key(&self) -> Option<&Index> {
        self.indexes.iter().find(|i| i.kind == IndexType::Primary)
    }
}

/// A set of tables, typically loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Tables in declaration order.
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Schema {
    /// Parses a schema from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RdbError::Serialization`](crate::RdbError::Serialization)
    /// if the document is not a valid schema.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the table with the given name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}
