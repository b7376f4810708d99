//! The generic modeler and queryer rendered through the PostgreSQL dialect.

mod common;

use common::dialect;
use rdb_core::{Column, Config, Dialect, Filter, Index, IndexType, Schema, SqlValue, Table};
use rdb_pgsql::{InsertIgnore, PgsqlDialect};

fn users() -> Table {
    Table::new("users")
        .column(Column::new("id", "uint64").increment())
        .column(Column::new("name", "string").length("40"))
        .column(Column::new("balance", "float64-decimal").length("12"))
        .column(Column::new("age", "uint8").nullable().default_expr("0"))
        .column(Column::new("created", "datetime"))
        .index(Index::new("pk", IndexType::Primary, &["id"]))
        .index(Index::new("name", IndexType::Unique, &["name"]))
}

#[test]
fn create_table_uses_pgsql_types() {
    let d = dialect();
    let sql = d.modeler().unwrap().create_table(&users());
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS \"users\" (\n    \
         \"id\" bigserial NOT NULL,\n    \
         \"name\" varchar(40) NOT NULL,\n    \
         \"balance\" numeric(12, 2) NOT NULL,\n    \
         \"age\" smallint DEFAULT 0,\n    \
         \"created\" timestamp with time zone NOT NULL,\n    \
         PRIMARY KEY (\"id\")\n)"
    );
}

#[test]
fn schema_from_json_renders_ddl() {
    let schema = Schema::from_json(
        r#"{"tables":[{"name":"events","columns":[
            {"name":"id","type":"int64"},
            {"name":"payload","type":"bytes","nullable":true},
            {"name":"kind","type":"string","length":"20"}
        ],"indexes":[{"name":"kind","cols":["kind"]}]}]}"#,
    )
    .unwrap();

    let d = dialect();
    let stmts = d.modeler().unwrap().schema_sql(&schema);
    assert_eq!(stmts.len(), 2);
    assert!(stmts[0].contains("\"payload\" BYTEA,"));
    assert!(stmts[0].contains("\"kind\" varchar(20) NOT NULL"));
    assert_eq!(
        stmts[1],
        "CREATE INDEX IF NOT EXISTS \"events_kind\" ON \"events\" (\"kind\")"
    );
}

#[test]
fn alter_column_type_normalizes_unsigned() {
    let d = dialect();
    let sql = d
        .modeler()
        .unwrap()
        .alter_column_type("users", &Column::new("age", "uint16"));
    assert_eq!(sql, "ALTER TABLE \"users\" ALTER COLUMN \"age\" TYPE smallint");
}

#[test]
fn alter_column_type_keeps_raw_type() {
    let d = dialect();
    let modeler = d.modeler().unwrap();
    assert_eq!(modeler.dialect().name(), "pgsql");
    let sql = modeler.alter_column_type("users", &Column::new("mood", "\"MyEnum\""));
    assert_eq!(sql, "ALTER TABLE \"users\" ALTER COLUMN \"mood\" TYPE \"MyEnum\"");
}

#[test]
fn prepare_counts_and_binds() {
    let d = dialect();
    let (sql, params) = d.prepare(
        &d.new_queryer()
            .select(&["COUNT(*)"])
            .from("users")
            .filter(
                d.new_filter()
                    .and("age.ge", 18)
                    .or_group(Filter::new().and_in("name", vec!["a", "b"])),
            ),
    );
    assert_eq!(
        sql,
        "SELECT COUNT(*) FROM \"users\" WHERE \"age\" >= $1 OR (\"name\" IN ($2, $3))"
    );
    assert_eq!(
        params,
        vec![
            SqlValue::Int(18),
            SqlValue::Text("a".to_string()),
            SqlValue::Text("b".to_string()),
        ]
    );
}

#[test]
fn prepare_splices_sequence_calls_from_filter() {
    let d = dialect();
    let (sql, params) = d.prepare(
        &d.new_queryer()
            .from("orders")
            .filter(d.new_filter().and("id", "CURRVAL('orders_id_seq')").and("paid", true))
            .limit(1),
    );
    assert_eq!(
        sql,
        "SELECT * FROM \"orders\" WHERE \"id\" = CURRVAL('orders_id_seq') AND \"paid\" = $1 LIMIT 1"
    );
    assert_eq!(params, vec![SqlValue::Bool(true)]);
}

#[test]
fn insert_ignore_binds_values() {
    let d = dialect();
    let (sql, params) = InsertIgnore::new("tags")
        .columns(&["name", "weight"])
        .values(vec![SqlValue::Text("rust".to_string()), SqlValue::Uint(3)])
        .build(&d);
    assert_eq!(
        sql,
        "INSERT INTO \"tags\" (\"name\", \"weight\") VALUES ($1, $2) ON CONFLICT DO NOTHING"
    );
    assert_eq!(params.len(), 2);
}

#[test]
fn insert_ignore_through_dialect() {
    let d = dialect();
    let (sql, params) = d.insert_ignore(
        "tags",
        &["id", "name"],
        vec![
            SqlValue::Text("nextval('tags_id_seq')".to_string()),
            SqlValue::Text("rust".to_string()),
        ],
    );
    assert_eq!(
        sql,
        "INSERT INTO \"tags\" (\"id\", \"name\") \
         VALUES (nextval('tags_id_seq'), $1) ON CONFLICT DO NOTHING"
    );
    assert_eq!(params, vec![SqlValue::Text("rust".to_string())]);
}

#[test]
fn open_from_json_config() {
    let config = Config::from_json(
        r#"{"driver":"postgresql","host":"db.internal","database":"shop","user":"app"}"#,
    )
    .unwrap();
    let d = PgsqlDialect::open(config).unwrap();
    assert_eq!(d.base().config().host, "db.internal");
    assert_eq!(d.base().config().port_or(rdb_pgsql::DEFAULT_PORT), 5432);

    d.close();
    assert!(d.base().is_closed());
    assert!(d.modeler().is_err());
}
