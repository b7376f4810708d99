//! Behavior of the PostgreSQL dialect through its public contract.

mod common;

use common::{dialect, resolve};
use rdb_core::{render_template, Dialect, SqlValue, ToSqlValue, STMT_INSERT_IGNORE};

// =============================================================================
// Type names
// =============================================================================

#[test]
fn unsigned_types_resolve_like_signed() {
    for (unsigned, signed) in [
        ("uint8", "int16"),
        ("uint16", "int16"),
        ("uint32", "int32"),
        ("uint64", "int64"),
    ] {
        assert_eq!(resolve(unsigned, ""), resolve(signed, ""), "{unsigned}");
    }
}

#[test]
fn unsigned_types_without_fix_use_next_width() {
    let d = dialect();
    let mut col = rdb_core::Column::new("c", "uint16");
    assert_eq!(d.column_type_fmt("t", &mut col), "integer");
    let mut col = rdb_core::Column::new("c", "uint32");
    assert_eq!(d.column_type_fmt("t", &mut col), "bigint");
}

#[test]
fn varchar_instantiates_length() {
    for len in ["1", "40", "255", "10485760"] {
        assert_eq!(resolve("string", len), format!("varchar({len})"));
    }
}

#[test]
fn decimal_fills_defaults() {
    assert_eq!(resolve("float64-decimal", ""), "numeric(10, 2)");
    assert_eq!(resolve("float64-decimal", "20"), "numeric(20, 2)");
    assert_eq!(resolve("float64-decimal", "20,6"), "numeric(20, 6)");
}

#[test]
fn raw_dialect_types_pass_through() {
    assert_eq!(resolve("uuid", ""), "uuid");
    assert_eq!(resolve("jsonb", ""), "jsonb");
}

#[test]
fn mixed_case_raw_types_are_not_normalized() {
    assert_eq!(resolve("\"MyEnum\"", ""), "\"MyEnum\"");
    assert_eq!(resolve("CITEXT", ""), "CITEXT");
    assert_eq!(resolve("Timestamp(3) With Time Zone", ""), "Timestamp(3) With Time Zone");
}

// =============================================================================
// Quoting
// =============================================================================

#[test]
fn quoting_rules() {
    let d = dialect();
    assert_eq!(d.quote_str("*"), "*");
    assert_eq!(d.quote_str("COUNT(x)"), "COUNT(x)");
    assert_eq!(d.quote_str("foo"), "\"foo\"");
    assert_eq!(d.quote_str("Max(price)"), "Max(price)");
}

// =============================================================================
// Placeholder binding
// =============================================================================

#[test]
fn bind_with_literal_function() {
    let d = dialect();
    let (sql, params) = d.stmt_bind_var(
        "a = ? AND b = ?",
        vec![5_i64.to_sql_value(), "NEXTVAL(seq)".to_sql_value()],
    );
    assert_eq!(sql, "a = $1 AND b = NEXTVAL(seq)");
    assert_eq!(params, vec![SqlValue::Int(5)]);
}

#[test]
fn bind_plain_values_in_order() {
    let d = dialect();
    let values = vec![
        "x".to_sql_value(),
        2.5_f64.to_sql_value(),
        SqlValue::Null,
    ];
    let (sql, params) = d.stmt_bind_var("(?, ?, ?)", values.clone());
    assert_eq!(sql, "($1, $2, $3)");
    assert_eq!(params, values);
}

#[test]
fn bind_numbering_is_contiguous_around_literals() {
    let d = dialect();
    let (sql, params) = d.stmt_bind_var(
        "?, ?, ?, ?, ?",
        vec![
            "SETVAL('s', 1)".to_sql_value(),
            1_i64.to_sql_value(),
            "currval('s')".to_sql_value(),
            2_i64.to_sql_value(),
            3_i64.to_sql_value(),
        ],
    );
    assert_eq!(sql, "SETVAL('s', 1), $1, currval('s'), $2, $3");
    assert_eq!(params.len(), 3);
}

// =============================================================================
// Statement templates
// =============================================================================

#[test]
fn insert_ignore_template() {
    let d = dialect();
    let template = d.stmt_template(STMT_INSERT_IGNORE).unwrap();
    let sql = render_template(template, &["\"users\"", "\"id\"", "$1"]);
    assert!(sql.contains("ON CONFLICT DO NOTHING"));
    assert!(sql.starts_with("INSERT INTO \"users\" (\"id\") VALUES ($1)"));
    assert_eq!(d.stmt_template("replace"), None);
}

#[test]
fn dialect_is_shareable_across_threads() {
    let d = std::sync::Arc::new(dialect());
    let handles: Vec<_> = (0..4_i64)
        .map(|i| {
            let d = std::sync::Arc::clone(&d);
            std::thread::spawn(move || d.stmt_bind_var("a = ?", vec![i.to_sql_value()]))
        })
        .collect();
    for h in handles {
        let (sql, params) = h.join().unwrap();
        assert_eq!(sql, "a = $1");
        assert_eq!(params.len(), 1);
    }
}
