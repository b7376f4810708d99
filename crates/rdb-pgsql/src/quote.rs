//! Identifier quoting and the literal function whitelist.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Identifier quote character.
pub const QUOTE: char = '"';

/// SQL functions that may appear as `NAME(...)` in an identifier or bind
/// value position and are then passed through verbatim.
pub const ALLOWED_FUNCS: &[&str] = &[
    "COUNT", "SUM", "LENGTH", "MIN", "MAX", "MOD", "NEXTVAL", "CURRVAL", "SETVAL", "LASTVAL",
];

static ALLOW_FUNCS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ALLOWED_FUNCS.iter().copied().collect());

/// Returns `s` if it is a call to a whitelisted function.
///
/// The name before the first `(` is matched case-insensitively and must be
/// non-empty. The argument list is not inspected.
#[must_use]
pub fn func_call(s: &str) -> Option<&str> {
    match s.find('(') {
        Some(n) if n > 0 && ALLOW_FUNCS.contains(s[..n].to_ascii_uppercase().as_str()) => Some(s),
        _ => None,
    }
}

/// Wraps `name` in the quote character. Embedded quotes are not escaped.
#[must_use]
pub fn quote_ident(name: &str) -> String {
    format!("{QUOTE}{name}{QUOTE}")
}

/// Quotes an identifier, leaving `*` and whitelisted calls untouched.
#[must_use]
pub fn quote_str(name: &str) -> String {
    if name == "*" || func_call(name).is_some() {
        return String::from(name);
    }
    quote_ident(name)
}
