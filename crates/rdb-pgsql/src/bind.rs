//! Rewrites generic `?` markers into PostgreSQL `$N` parameters.

use rdb_core::SqlValue;
use tracing::trace;

use crate::quote::func_call;

/// Binds `values` to the `?` markers of `sql`, left to right.
///
/// A text value holding a whitelisted call such as `NEXTVAL('seq')` is
/// spliced into the SQL and dropped from the parameters. Every other value
/// takes the next `$N`, numbered from 1 over real parameters only.
///
/// Marker and value counts are not checked: markers without a value stay
/// `?`, and values without a marker are still returned.
#[must_use]
pub fn stmt_bind_var(sql: &str, values: Vec<SqlValue>) -> (String, Vec<SqlValue>) {
    let mut out = String::with_capacity(sql.len() + values.len() * 2);
    let mut params = Vec::with_capacity(values.len());
    let mut rest = sql;
    let mut literals = 0_usize;

    for value in values {
        let marker = match value.as_text().and_then(func_call) {
            Some(call) => {
                literals += 1;
                String::from(call)
            }
            None => {
                params.push(value);
                format!("${}", params.len())
            }
        };

        if let Some(pos) = rest.find('?') {
            out.push_str(&rest[..pos]);
            out.push_str(&marker);
            rest = &rest[pos + 1..];
        }
    }
    out.push_str(rest);

    trace!(params = params.len(), literals, "bound statement parameters");
    (out, params)
}
