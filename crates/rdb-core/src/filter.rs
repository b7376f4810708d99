//! WHERE-clause builder.
//!
//! Conditions are keyed by an expression of the form `field` or
//! `field.op`, where `op` is one of `eq`, `ne`, `gt`, `ge`, `lt`, `le` or
//! `like`. An unrecognized suffix is treated as part of the field name.
//!
//! ```rust
//! use rdb_core::{Filter, GenericDialect};
//!
//! let dialect = GenericDialect::new("app");
//! let (sql, params) = Filter::new()
//!     .and("status", "active")
//!     .and("age.ge", 18)
//!     .parse(&dialect);
//!
//! assert_eq!(sql, "\"status\" = ? AND \"age\" >= ?");
//! assert_eq!(params.len(), 2);
//! ```

use std::fmt;

use crate::dialect::Dialect;
use crate::value::{SqlValue, ToSqlValue};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal (=)
    Eq,
    /// Not equal (<>)
    Ne,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
    /// Pattern match (LIKE)
    Like,
}

impl CompareOp {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "eq" => Some(Self::Eq),
            "ne" | "neq" => Some(Self::Ne),
            "gt" => Some(Self::Gt),
            "ge" | "gte" => Some(Self::Ge),
            "lt" => Some(Self::Lt),
            "le" | "lte" => Some(Self::Le),
            "like" => Some(Self::Like),
            _ => None,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "="),
            Self::Ne => write!(f, "<>"),
            Self::Gt => write!(f, ">"),
            Self::Ge => write!(f, ">="),
            Self::Lt => write!(f, "<"),
            Self::Le => write!(f, "<="),
            Self::Like => write!(f, "LIKE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conj {
    And,
    Or,
}

#[derive(Debug, Clone)]
enum Cond {
    Compare {
        field: String,
        op: CompareOp,
        value: SqlValue,
    },
    InList {
        field: String,
        values: Vec<SqlValue>,
        negated: bool,
    },
    IsNull {
        field: String,
        negated: bool,
    },
    Group(Filter),
}

fn split_expr(expr: &str) -> (&str, CompareOp) {
    if let Some((field, suffix)) = expr.rsplit_once('.') {
        if let Some(op) = CompareOp::from_suffix(&suffix.to_ascii_lowercase()) {
            return (field, op);
        }
    }
    (expr, CompareOp::Eq)
}

/// A list of conditions joined by AND / OR, rendered with `?` markers.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conds: Vec<(Conj, Cond)>,
}

impl Filter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no condition has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conds.is_empty()
    }

    fn push_compare(mut self, conj: Conj, expr: &str, value: SqlValue) -> Self {
        let (field, op) = split_expr(expr);
        self.conds.push((
            conj,
            Cond::Compare {
                field: field.to_string(),
                op,
                value,
            },
        ));
        self
    }

    /// Adds `expr` joined with AND.
    #[must_use]
    pub fn and<V: ToSqlValue>(self, expr: &str, value: V) -> Self {
        self.push_compare(Conj::And, expr, value.to_sql_value())
    }

    /// Adds `expr` joined with OR.
    #[must_use]
    pub fn or<V: ToSqlValue>(self, expr: &str, value: V) -> Self {
        self.push_compare(Conj::Or, expr, value.to_sql_value())
    }

    /// Adds `field IN (...)` joined with AND.
    #[must_use]
    pub fn and_in<V: ToSqlValue>(mut self, field: &str, values: Vec<V>) -> Self {
        self.conds.push((
            Conj::And,
            Cond::InList {
                field: field.to_string(),
                values: values.into_iter().map(ToSqlValue::to_sql_value).collect(),
                negated: false,
            },
        ));
        self
    }

    /// Adds `field NOT IN (...)` joined with AND.
    #[must_use]
    pub fn and_not_in<V: ToSqlValue>(mut self, field: &str, values: Vec<V>) -> Self {
        self.conds.push((
            Conj::And,
            Cond::InList {
                field: field.to_string(),
                values: values.into_iter().map(ToSqlValue::to_sql_value).collect(),
                negated: true,
            },
        ));
        self
    }

    /// Adds `field IS NULL` joined with AND.
    #[must_use]
    pub fn and_null(mut self, field: &str) -> Self {
        self.conds.push((
            Conj::And,
            Cond::IsNull {
                field: field.to_string(),
                negated: false,
            },
        ));
        self
    }

    /// Adds `field IS NOT NULL` joined with AND.
    #[must_use]
    pub fn and_not_null(mut self, field: &str) -> Self {
        self.conds.push((
            Conj::And,
            Cond::IsNull {
                field: field.to_string(),
                negated: true,
            },
        ));
        self
    }

    /// Adds a parenthesized sub-filter joined with AND.
    #[must_use]
    pub fn and_group(mut self, group: Self) -> Self {
        if !group.is_empty() {
            self.conds.push((Conj::And, Cond::Group(group)));
        }
        self
    }

    /// Adds a parenthesized sub-filter joined with OR.
    #[must_use]
    pub fn or_group(mut self, group: Self) -> Self {
        if !group.is_empty() {
            self.conds.push((Conj::Or, Cond::Group(group)));
        }
        self
    }

    /// Renders the conditions with `?` markers, quoting fields through
    /// `dialect`. The returned values line up with the markers.
    #[must_use]
    pub fn parse(&self, dialect: &dyn Dialect) -> (String, Vec<SqlValue>) {
        let mut sql = String::new();
        let mut params = vec![];
        self.write(dialect, &mut sql, &mut params);
        (sql, params)
    }

    fn write(&self, dialect: &dyn Dialect, sql: &mut String, params: &mut Vec<SqlValue>) {
        for (i, (conj, cond)) in self.conds.iter().enumerate() {
            if i > 0 {
                sql.push_str(match conj {
                    Conj::And => " AND ",
                    Conj::Or => " OR ",
                });
            }
            match cond {
                Cond::Compare { field, op, value } => {
                    sql.push_str(&format!("{} {op} ?", dialect.quote_str(field)));
                    params.push(value.clone());
                }
                Cond::InList {
                    field,
                    values,
                    negated,
                } => {
                    if values.is_empty() {
                        // Nothing can match an empty list.
                        sql.push_str(if *negated { "TRUE" } else { "FALSE" });
                        continue;
                    }
                    let marks: Vec<&str> = values.iter().map(|_| "?").collect();
                    sql.push_str(&format!(
                        "{} {}IN ({})",
                        dialect.quote_str(field),
                        if *negated { "NOT " } else { "" },
                        marks.join(", ")
                    ));
                    params.extend(values.iter().cloned());
                }
                Cond::IsNull { field, negated } => {
                    sql.push_str(&format!(
                        "{} IS {}NULL",
                        dialect.quote_str(field),
                        if *negated { "NOT " } else { "" }
                    ));
                }
                Cond::Group(group) => {
                    sql.push('(');
                    group.write(dialect, sql, params);
                    sql.push(')');
                }
            }
        }
    }
}
