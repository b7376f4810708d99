//! PostgreSQL dialect implementation.

use rdb_core::{
    Base, Column, Config, Dialect, Filter, Modeler, Queryer, Result, SqlValue, ToSqlValue,
};
use tracing::{debug, info};

use crate::stmt::InsertIgnore;
use crate::{bind, quote, stmt, types};

/// Driver names accepted by [`PgsqlDialect::open`].
pub const DRIVERS: &[&str] = &["pgsql", "postgres", "postgresql"];

/// Default server port.
pub const DEFAULT_PORT: u16 = 5432;

/// Textual timestamp layout, e.g. `2024-01-02 15:04:05 +0000 UTC`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z %Z";

/// PostgreSQL dialect bound to one database.
#[derive(Debug)]
pub struct PgsqlDialect {
    base: Base,
    db_name: String,
}

impl PgsqlDialect {
    /// Builds a dialect from connection settings.
    ///
    /// # Errors
    ///
    /// Fails if the driver is not a PostgreSQL driver name or no database
    /// is configured.
    pub fn open(config: Config) -> Result<Self> {
        config.validate(DRIVERS)?;
        info!(
            host = %config.host,
            port = config.port_or(DEFAULT_PORT),
            database = %config.database,
            "pgsql dialect ready"
        );
        Ok(Self {
            db_name: config.database.clone(),
            base: Base::new(config),
        })
    }

    /// Creates a dialect for `db_name` with default connection settings.
    #[must_use]
    pub fn new(db_name: &str) -> Self {
        Self {
            db_name: String::from(db_name),
            base: Base::new(Config::new(DRIVERS[0], db_name)),
        }
    }

    /// Returns the connector base.
    #[must_use]
    pub const fn base(&self) -> &Base {
        &self.base
    }

    /// Returns a schema modeler bound to this dialect.
    ///
    /// # Errors
    ///
    /// Fails after [`PgsqlDialect::close`].
    pub fn modeler(&self) -> Result<Modeler<'_>> {
        self.base.ensure_open()?;
        Ok(Modeler::new(self))
    }

    /// Returns an empty filter.
    #[must_use]
    pub fn new_filter(&self) -> Filter {
        Filter::new()
    }

    /// Returns an empty queryer.
    #[must_use]
    pub fn new_queryer(&self) -> Queryer {
        Queryer::new()
    }

    /// Renders `queryer` and binds it for PostgreSQL.
    #[must_use]
    pub fn prepare(&self, queryer: &Queryer) -> (String, Vec<SqlValue>) {
        let (sql, params) = queryer.parse(self);
        let (sql, params) = self.stmt_bind_var(&sql, params);
        debug!(
            table = queryer.table(),
            sql = %sql,
            params = params.len(),
            "prepared query"
        );
        (sql, params)
    }

    /// Renders an `ON CONFLICT DO NOTHING` insert of one row into `table`.
    #[must_use]
    pub fn insert_ignore<T: ToSqlValue>(
        &self,
        table: &str,
        columns: &[&str],
        values: Vec<T>,
    ) -> (String, Vec<SqlValue>) {
        InsertIgnore::new(table)
            .columns(columns)
            .values(values)
            .build(self)
    }

    /// Closes the underlying connector base.
    pub fn close(&self) {
        self.base.close();
    }
}

impl Dialect for PgsqlDialect {
    fn name(&self) -> &'static str {
        "pgsql"
    }

    fn db_name(&self) -> &str {
        &self.db_name
    }

    fn quote_char(&self) -> char {
        quote::QUOTE
    }

    fn quote_ident(&self, name: &str) -> String {
        quote::quote_ident(name)
    }

    fn quote_str(&self, name: &str) -> String {
        quote::quote_str(name)
    }

    fn column_type_fix(&self, col: &mut Column) {
        types::column_type_fix(col);
    }

    fn column_type_fmt(&self, table: &str, col: &mut Column) -> String {
        types::column_type_fmt(table, col)
    }

    fn column_definition(&self, table: &str, col: &Column) -> String {
        let mut col = col.clone();
        self.column_type_fix(&mut col);
        let mut data_type = self.column_type_fmt(table, &mut col);

        // Auto-increment is expressed through the serial pseudo-types.
        if col.increment {
            data_type = match data_type.as_str() {
                "smallint" => String::from("smallserial"),
                "integer" => String::from("serial"),
                "bigint" => String::from("bigserial"),
                _ => data_type,
            };
        }

        let mut sql = format!("{} {data_type}", self.quote_ident(&col.name));
        if !col.nullable {
            sql.push_str(" NOT NULL");
        }
        // Serial columns already default to their sequence.
        if let (Some(default), false) = (&col.default, col.increment) {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        sql
    }

    fn stmt_bind_var(&self, sql: &str, values: Vec<SqlValue>) -> (String, Vec<SqlValue>) {
        bind::stmt_bind_var(sql, values)
    }

    fn stmt_template(&self, key: &str) -> Option<&'static str> {
        stmt::stmt_template(key)
    }

    fn datetime_format(&self) -> &'static str {
        DATETIME_FORMAT
    }
}
