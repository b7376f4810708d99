//! # rdb-core
//!
//! Database-agnostic building blocks for relational access:
//!
//! - [`Filter`] and [`Queryer`] build WHERE clauses and SELECT statements
//!   with generic `?` markers and a parallel list of [`SqlValue`]s.
//! - [`Modeler`] renders schema DDL from [`Table`] descriptors.
//! - The [`Dialect`] trait is the narrow contract a database adapter
//!   implements: identifier quoting, column type names, placeholder
//!   rewriting and a few statement templates.
//!
//! Nothing here talks to a database; connection handling belongs to the
//! caller.
//!
//! ## Example
//!
//! ```rust
//! use rdb_core::{Dialect, Filter, GenericDialect, Queryer};
//!
//! let dialect = GenericDialect::new("app");
//! let (sql, params) = Queryer::new()
//!     .select(&["id", "name"])
//!     .from("users")
//!     .filter(Filter::new().and("id", 7))
//!     .parse(&dialect);
//! let (sql, params) = dialect.stmt_bind_var(&sql, params);
//!
//! assert_eq!(sql, "SELECT \"id\", \"name\" FROM \"users\" WHERE \"id\" = ?");
//! assert_eq!(params.len(), 1);
//! ```

pub mod base;
pub mod config;
pub mod dialect;
pub mod error;
pub mod filter;
pub mod modeler;
pub mod queryer;
pub mod schema;
pub mod value;

pub use base::Base;
pub use config::Config;
pub use dialect::{render_template, Dialect, GenericDialect, STMT_INSERT_IGNORE};
pub use error::{RdbError, Result};
pub use filter::{CompareOp, Filter};
pub use modeler::Modeler;
pub use queryer::Queryer;
pub use schema::{Column, Index, IndexType, Schema, Table};
pub use value::{SqlValue, ToSqlValue};
