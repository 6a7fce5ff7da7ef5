//! SQLite helper utilities
//!
//! SQLite has no native timestamp or IN-list binding; these helpers cover the
//! conversions the repositories need, plus constraint error detection.

use chrono::Utc;

/// Get current UTC timestamp as ISO8601 string for SQLite
#[inline]
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339()
}

/// Build `?, ?, ?` for an IN clause with `count` parameters.
///
/// Returns `NULL` for an empty list so `x IN (NULL)` matches nothing.
pub fn in_placeholders(count: usize) -> String {
    if count == 0 {
        return "NULL".to_string();
    }
    vec!["?"; count].join(", ")
}

/// True when `err` wraps a SQLite UNIQUE constraint failure
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|e| e.is_unique_violation())
}
