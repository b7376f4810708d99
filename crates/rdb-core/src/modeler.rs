//! Dialect-aware DDL generation.
//!
//! The modeler owns the statement layout; everything dialect-specific
//! (quoting, type names, auto-increment handling) comes from the bound
//! [`Dialect`].

use tracing::debug;

use crate::dialect::Dialect;
use crate::schema::{Column, Index, IndexType, Schema, Table};

/// Generates schema DDL through a dialect's formatting callbacks.
#[derive(Clone, Copy)]
pub struct Modeler<'a> {
    dialect: &'a dyn Dialect,
}

impl std::fmt::Debug for Modeler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modeler")
            .field("dialect", &self.dialect.name())
            .finish()
    }
}

impl<'a> Modeler<'a> {
    /// Creates a modeler bound to `dialect`.
    #[must_use]
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Returns the bound dialect.
    #[must_use]
    pub fn dialect(&self) -> &'a dyn Dialect {
        self.dialect
    }

    /// Generates CREATE TABLE, including the primary key constraint.
    #[must_use]
    pub fn create_table(&self, table: &Table) -> String {
        let mut sql = String::from("CREATE TABLE IF NOT EXISTS ");
        sql.push_str(&self.dialect.quote_ident(&table.name));
        sql.push_str(" (\n");

        let mut defs: Vec<String> = table
            .columns
            .iter()
            .map(|c| format!("    {}", self.dialect.column_definition(&table.name, c)))
            .collect();

        if let Some(pk) = table.primary_key() {
            defs.push(format!("    PRIMARY KEY ({})", self.quote_cols(&pk.cols)));
        }

        sql.push_str(&defs.join(",\n"));
        sql.push_str("\n)");
        sql
    }

    /// Generates DROP TABLE.
    #[must_use]
    pub fn drop_table(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {}", self.dialect.quote_ident(table))
    }

    /// Generates ADD COLUMN.
    #[must_use]
    pub fn add_column(&self, table: &str, col: &Column) -> String {
        format!(
            "ALTER TABLE {} ADD COLUMN {}",
            self.dialect.quote_ident(table),
            self.dialect.column_definition(table, col)
        )
    }

    /// Generates an ALTER COLUMN ... TYPE change.
    #[must_use]
    pub fn alter_column_type(&self, table: &str, col: &Column) -> String {
        let mut col = col.clone();
        self.dialect.column_type_fix(&mut col);
        format!(
            "ALTER TABLE {} ALTER COLUMN {} TYPE {}",
            self.dialect.quote_ident(table),
            self.dialect.quote_ident(&col.name),
            self.dialect.column_type_fmt(table, &mut col)
        )
    }

    /// Generates the statement creating `index` on `table`.
    ///
    /// Index names are prefixed with the table name, as PostgreSQL-style
    /// engines share one index namespace per schema.
    #[must_use]
    pub fn add_index(&self, table: &str, index: &Index) -> String {
        let quoted_table = self.dialect.quote_ident(table);
        let cols = self.quote_cols(&index.cols);
        match index.kind {
            IndexType::Primary => {
                format!("ALTER TABLE {quoted_table} ADD PRIMARY KEY ({cols})")
            }
            IndexType::Unique => format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {} ON {quoted_table} ({cols})",
                self.index_name(table, index)
            ),
            IndexType::Index => format!(
                "CREATE INDEX IF NOT EXISTS {} ON {quoted_table} ({cols})",
                self.index_name(table, index)
            ),
        }
    }

    /// Generates the statement removing `index` from `table`.
    #[must_use]
    pub fn drop_index(&self, table: &str, index: &Index) -> String {
        match index.kind {
            IndexType::Primary => format!(
                "ALTER TABLE {} DROP CONSTRAINT IF EXISTS {}",
                self.dialect.quote_ident(table),
                self.dialect.quote_ident(&format!("{table}_pkey"))
            ),
            _ => format!("DROP INDEX IF EXISTS {}", self.index_name(table, index)),
        }
    }

    /// Generates every statement needed to create `schema` from scratch:
    /// one CREATE TABLE per table followed by its secondary indexes.
    #[must_use]
    pub fn schema_sql(&self, schema: &Schema) -> Vec<String> {
        let mut stmts = vec![];
        for table in &schema.tables {
            stmts.push(self.create_table(table));
            for index in table.indexes.iter().filter(|i| i.kind != IndexType::Primary) {
                stmts.push(self.add_index(&table.name, index));
            }
        }
        debug!(
            dialect = self.dialect.name(),
            database = self.dialect.db_name(),
            statements = stmts.len(),
            "generated schema DDL"
        );
        stmts
    }

    fn index_name(&self, table: &str, index: &Index) -> String {
        self.dialect.quote_ident(&format!("{table}_{}", index.name))
    }

    fn quote_cols(&self, cols: &[String]) -> String {
        cols.iter()
            .map(|c| self.dialect.quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
