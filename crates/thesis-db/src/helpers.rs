//! Row-to-entity parsing helpers and small query utilities.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Timestamps are written as fixed-width RFC 3339 with microseconds
//! so that lexical `ORDER BY` equals chronological order.

use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, Utc};
use libsql::params::IntoParams;

use crate::error::DatabaseError;

/// Date format used for due dates and deadlines.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current time truncated to the stored precision, so values handed back to
/// callers compare equal to what a later read returns.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage: `2026-10-19T08:00:00.000000Z`.
#[must_use]
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Format a calendar date for storage: `2026-10-19`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 and `SQLite`'s default format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column as a calendar date.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Parse an optional TEXT column as a calendar date.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string is not a date.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_date(s)?)),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all thesis-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Run a query and map the first row, if any.
///
/// # Errors
///
/// Returns `DatabaseError` if the query or the row mapping fails.
pub async fn query_opt<T, F>(
    conn: &libsql::Connection,
    sql: &str,
    params: impl IntoParams,
    map: F,
) -> Result<Option<T>, DatabaseError>
where
    F: Fn(&libsql::Row) -> Result<T, DatabaseError>,
{
    let mut rows = conn.query(sql, params).await?;
    match rows.next().await? {
        Some(row) => Ok(Some(map(&row)?)),
        None => Ok(None),
    }
}

/// Run a query and map every row.
///
/// # Errors
///
/// Returns `DatabaseError` if the query or any row mapping fails.
pub async fn query_all<T, F>(
    conn: &libsql::Connection,
    sql: &str,
    params: impl IntoParams,
    map: F,
) -> Result<Vec<T>, DatabaseError>
where
    F: Fn(&libsql::Row) -> Result<T, DatabaseError>,
{
    let mut rows = conn.query(sql, params).await?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(map(&row)?);
    }
    Ok(out)
}

/// Whether a row with `id` exists in `table`.
///
/// `table` is always a compile-time constant from a repo module.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn row_exists(
    conn: &libsql::Connection,
    table: &str,
    id: &str,
) -> Result<bool, DatabaseError> {
    let found = query_opt(
        conn,
        &format!("SELECT 1 FROM {table} WHERE id = ?1"),
        [id],
        |_| Ok(()),
    )
    .await?;
    Ok(found.is_some())
}

/// Trim a free-text field, mapping blank input to `None`.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
