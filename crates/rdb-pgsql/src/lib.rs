//! # rdb-pgsql
//!
//! PostgreSQL dialect for `rdb-core`.
//!
//! # How PostgreSQL differs from the generic dialect
//!
//! - **[Placeholders]**: parameters are numbered `$1`, `$2`, … instead of
//!   `?`. [`PgsqlDialect`] rewrites generic markers and splices whitelisted
//!   literal calls such as `NEXTVAL('seq')` directly into the SQL.
//! - **[Numeric types]**: there are no unsigned or one-byte integers.
//!   Unsigned names keep their width only and `int8` becomes `smallint`.
//! - **[Serial types]**: auto-increment columns use `smallserial`,
//!   `serial` and `bigserial`.
//! - **[ON CONFLICT]**: `INSERT ... ON CONFLICT DO NOTHING` (since 9.5)
//!   backs [`InsertIgnore`].
//! - **Identifier quoting**: double quotes, with no escaping of embedded
//!   quotes. `*` and whitelisted function calls are left as they are.
//!
//! [Placeholders]: https://www.postgresql.org/docs/current/sql-prepare.html
//! [Numeric types]: https://www.postgresql.org/docs/current/datatype-numeric.html
//! [Serial types]: https://www.postgresql.org/docs/current/datatype-numeric.html#DATATYPE-SERIAL
//! [ON CONFLICT]: https://www.postgresql.org/docs/current/sql-insert.html#SQL-ON-CONFLICT
//!
//! ## Example
//!
//! ```rust
//! use rdb_core::{Config, Filter, Queryer};
//! use rdb_pgsql::PgsqlDialect;
//!
//! let dialect = PgsqlDialect::open(Config::new("pgsql", "app")).unwrap();
//! let (sql, params) = dialect.prepare(
//!     &Queryer::new()
//!         .select(&["id", "COUNT(*)"])
//!         .from("users")
//!         .filter(Filter::new().and("age.gt", 18).and("name", "bob"))
//!         .group_by(&["id"]),
//! );
//!
//! assert_eq!(
//!     sql,
//!     "SELECT \"id\", COUNT(*) FROM \"users\" WHERE \"age\" > $1 AND \"name\" = $2 \
//!      GROUP BY \"id\""
//! );
//! assert_eq!(params.len(), 2);
//! ```

pub mod bind;
mod dialect;
pub mod quote;
pub mod stmt;
pub mod types;

pub use dialect::{PgsqlDialect, DATETIME_FORMAT, DEFAULT_PORT, DRIVERS};
pub use stmt::InsertIgnore;
