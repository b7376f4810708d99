//! Generic column type names mapped to PostgreSQL types.
//!
//! | Name        | Storage  | Range                                      |
//! |-------------|----------|--------------------------------------------|
//! | `smallint`  | 2 bytes  | -32768 to +32767                           |
//! | `integer`   | 4 bytes  | -2147483648 to +2147483647                 |
//! | `bigint`    | 8 bytes  | -9223372036854775808 to +9223372036854775807 |
//! | `numeric`   | variable | user-specified precision, exact            |
//! | `double precision` | 8 bytes | 15 decimal digits precision         |
//!
//! PostgreSQL has neither unsigned integers nor a one-byte integer, so
//! unsigned names keep only their width and `int8` is widened to `int16`.

use std::collections::HashMap;
use std::sync::LazyLock;

use rdb_core::{render_template, Column};

static COLUMN_TYPES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("bool", "bool"),
        ("string", "varchar(%s)"),
        ("string-text", "text"),
        ("date", "date"),
        ("datetime", "timestamp with time zone"),
        ("int8", "smallint"),
        ("int16", "smallint"),
        ("int32", "integer"),
        ("int64", "bigint"),
        ("uint8", "smallint"),
        ("uint16", "integer"),
        ("uint32", "bigint"),
        ("uint64", "bigint"),
        ("float64", "double precision"),
        ("float64-decimal", "numeric(%s, %s)"),
        ("bytes", "BYTEA"),
    ])
});

const DEFAULT_PRECISION: &str = "10";
const DEFAULT_SCALE: &str = "2";

/// Returns the raw table entry for a generic type name.
#[must_use]
pub fn lookup(type_name: &str) -> Option<&'static str> {
    COLUMN_TYPES.get(type_name).copied()
}

/// Rewrites unsigned and one-byte integer names before formatting.
///
/// The name is trimmed and lowercased, then `uintN` becomes `intN` and
/// `int8` becomes `int16`. The rewrite is kept only if it lands on a known
/// generic name; anything else, such as a raw `"MyEnum"` or `CITEXT`, is
/// left exactly as given. Whitespace is always stripped from the length.
pub fn column_type_fix(col: &mut Column) {
    col.fix_length();

    let mut name = col.type_name.trim().to_ascii_lowercase();
    if let Some(width) = name.strip_prefix("uint") {
        name = format!("int{width}");
    }
    if name == "int8" {
        name = String::from("int16");
    }

    if lookup(&name).is_some() {
        col.type_name = name;
    }
}

/// Returns the PostgreSQL declaration for `col`.
///
/// Names missing from the table are returned verbatim. The length of
/// `string` and the `precision,scale` pair of `float64-decimal` are used as
/// given; only a missing precision or scale is defaulted.
pub fn column_type_fmt(_table: &str, col: &mut Column) -> String {
    let Some(template) = lookup(&col.type_name) else {
        return col.type_name.clone();
    };

    col.fix_length();

    match col.type_name.as_str() {
        "string" => render_template(template, &[col.length.as_str()]),
        "float64-decimal" => {
            let mut lens = col.length.split(',');
            let precision = match lens.next() {
                Some(p) if !p.is_empty() => p,
                _ => DEFAULT_PRECISION,
            };
            let scale = lens.next().unwrap_or(DEFAULT_SCALE);
            render_template(template, &[precision, scale])
        }
        _ => String::from(template),
    }
}

/// Normalizes `col` and returns its PostgreSQL declaration.
pub fn resolve(table: &str, col: &mut Column) -> String {
    column_type_fix(col);
    column_type_fmt(table, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(type_name: &str, length: &str) -> String {
        column_type_fmt("t", &mut Column::new("c", type_name).length(length))
    }

    fn resolved(type_name: &str) -> String {
        resolve("t", &mut Column::new("c", type_name))
    }

    #[test]
    fn test_fixed_types() {
        assert_eq!(fmt("bool", ""), "bool");
        assert_eq!(fmt("string-text", ""), "text");
        assert_eq!(fmt("date", ""), "date");
        assert_eq!(fmt("datetime", ""), "timestamp with time zone");
        assert_eq!(fmt("int32", ""), "integer");
        assert_eq!(fmt("int64", ""), "bigint");
        assert_eq!(fmt("float64", ""), "double precision");
        assert_eq!(fmt("bytes", ""), "BYTEA");
    }

    #[test]
    fn test_unknown_type_passes_through() {
        assert_eq!(fmt("jsonb", ""), "jsonb");
        assert_eq!(fmt("Custom Type", "5"), "Custom Type");
    }

    #[test]
    fn test_varchar_uses_length() {
        assert_eq!(fmt("string", "100"), "varchar(100)");
        // Not validated.
        assert_eq!(fmt("string", ""), "varchar()");
    }

    #[test]
    fn test_decimal_defaults() {
        assert_eq!(fmt("float64-decimal", "12,4"), "numeric(12, 4)");
        assert_eq!(fmt("float64-decimal", ""), "numeric(10, 2)");
        assert_eq!(fmt("float64-decimal", "8"), "numeric(8, 2)");
        assert_eq!(fmt("float64-decimal", ",3"), "numeric(10, 3)");
        assert_eq!(fmt("float64-decimal", "12, 4"), "numeric(12, 4)");
    }

    #[test]
    fn test_decimal_defaults_every_call() {
        let mut col = Column::new("c", "float64-decimal");
        assert_eq!(column_type_fmt("t", &mut col), "numeric(10, 2)");
        assert_eq!(col.length, "");
        assert_eq!(column_type_fmt("t", &mut col), "numeric(10, 2)");
    }

    #[test]
    fn test_unsigned_resolves_like_signed() {
        assert_eq!(resolved("uint8"), resolved("int16"));
        assert_eq!(resolved("uint16"), resolved("int16"));
        assert_eq!(resolved("uint32"), resolved("int32"));
        assert_eq!(resolved("uint64"), resolved("int64"));
        assert_eq!(resolved("int8"), "smallint");
    }

    #[test]
    fn test_type_fix_rewrites_names() {
        let mut col = Column::new("c", "UINT8");
        column_type_fix(&mut col);
        assert_eq!(col.type_name, "int16");

        let mut col = Column::new("c", "uint32");
        column_type_fix(&mut col);
        assert_eq!(col.type_name, "int32");

        let mut col = Column::new("c", " String ").length("4 0");
        column_type_fix(&mut col);
        assert_eq!(col.type_name, "string");
        assert_eq!(col.length, "40");
    }

    #[test]
    fn test_type_fix_keeps_raw_names() {
        for raw in ["\"MyEnum\"", "CITEXT ", "uint128", "Timestamp(3)"] {
            let mut col = Column::new("c", raw);
            column_type_fix(&mut col);
            assert_eq!(col.type_name, raw);
        }
    }

    #[test]
    fn test_resolve_keeps_raw_names() {
        assert_eq!(resolved("\"MyEnum\""), "\"MyEnum\"");
        assert_eq!(resolved("CITEXT "), "CITEXT ");
        assert_eq!(resolved(" UINT64 "), "bigint");
    }
}
