#![allow(dead_code)]

use rdb_core::{Column, Config};
use rdb_pgsql::{types, PgsqlDialect};

/// Installs a test-friendly subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn dialect() -> PgsqlDialect {
    init_tracing();
    PgsqlDialect::open(Config::new("pgsql", "test_db"))
        .unwrap_or_else(|e| panic!("Failed to open dialect: {e}"))
}

/// Normalizes and formats a bare column of `type_name` / `length`.
pub fn resolve(type_name: &str, length: &str) -> String {
    types::resolve("t", &mut Column::new("c", type_name).length(length))
}
