//! Status ledger: append-only history of thesis status changes.
//!
//! Entries are ordered by `changed_at` then insertion order. Reads page
//! through the ledger with a `(changed_at, rowid)` keyset so a stream can be
//! restarted and will see everything committed since.

use chrono::{DateTime, Utc};
use futures::stream::{self, Stream, TryStreamExt};

use thesis_core::entities::StatusHistoryEntry;
use thesis_core::enums::ThesisStatus;
use thesis_core::errors::WorkflowError;
use thesis_core::ids::PREFIX_HISTORY;

use crate::error::DatabaseError;
use crate::helpers::{
    format_timestamp, get_opt_string, parse_datetime, parse_enum, query_all, query_opt,
};
use crate::service::WorkflowService;
use crate::unit_of_work::UnitOfWork;

const SELECT_COLS: &str = "id, thesis_id, prior_status, new_status, changed_at, note";

/// Rows fetched per round trip by [`WorkflowService::history_stream`].
pub const HISTORY_PAGE_SIZE: u32 = 50;

fn row_to_entry(row: &libsql::Row) -> Result<StatusHistoryEntry, DatabaseError> {
    Ok(StatusHistoryEntry {
        id: row.get(0)?,
        thesis_id: row.get(1)?,
        prior_status: parse_enum(&row.get::<String>(2)?)?,
        new_status: parse_enum(&row.get::<String>(3)?)?,
        changed_at: parse_datetime(&row.get::<String>(4)?)?,
        note: get_opt_string(row, 5)?,
    })
}

/// Position after the last row of a page.
type Cursor = (String, i64);

async fn history_page(
    conn: &libsql::Connection,
    thesis_id: &str,
    after: Option<&Cursor>,
    page_size: u32,
) -> Result<Vec<(StatusHistoryEntry, Cursor)>, DatabaseError> {
    let map = |row: &libsql::Row| -> Result<(StatusHistoryEntry, Cursor), DatabaseError> {
        let entry = row_to_entry(row)?;
        let rowid = row.get::<i64>(6)?;
        let cursor = (row.get::<String>(4)?, rowid);
        Ok((entry, cursor))
    };
    match after {
        None => {
            query_all(
                conn,
                &format!(
                    "SELECT {SELECT_COLS}, rowid FROM status_history
                     WHERE thesis_id = ?1
                     ORDER BY changed_at ASC, rowid ASC
                     LIMIT ?2"
                ),
                libsql::params![thesis_id, i64::from(page_size)],
                map,
            )
            .await
        }
        Some((changed_at, rowid)) => {
            query_all(
                conn,
                &format!(
                    "SELECT {SELECT_COLS}, rowid FROM status_history
                     WHERE thesis_id = ?1 AND (changed_at, rowid) > (?2, ?3)
                     ORDER BY changed_at ASC, rowid ASC
                     LIMIT ?4"
                ),
                libsql::params![thesis_id, changed_at.as_str(), *rowid, i64::from(page_size)],
                map,
            )
            .await
        }
    }
}

/// Timestamp of the newest ledger entry for a thesis, if any.
pub(crate) async fn latest_change(
    conn: &libsql::Connection,
    thesis_id: &str,
) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    query_opt(
        conn,
        "SELECT MAX(changed_at) FROM status_history WHERE thesis_id = ?1",
        [thesis_id],
        |row| get_opt_string(row, 0),
    )
    .await?
    .flatten()
    .map(|s| parse_datetime(&s))
    .transpose()
}

impl WorkflowService {
    /// Append one ledger entry inside an open unit of work.
    ///
    /// Only ever called together with the status update it records.
    pub async fn append_history(
        &self,
        uow: &UnitOfWork<'_>,
        thesis_id: &str,
        prior: ThesisStatus,
        new: ThesisStatus,
        changed_at: DateTime<Utc>,
        note: Option<&str>,
    ) -> Result<StatusHistoryEntry, WorkflowError> {
        let id = uow.generate_id(PREFIX_HISTORY).await?;
        uow.conn()
            .execute(
                &format!("INSERT INTO status_history ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
                libsql::params![
                    id.as_str(),
                    thesis_id,
                    prior.as_str(),
                    new.as_str(),
                    format_timestamp(&changed_at),
                    note
                ],
            )
            .await
            .map_err(DatabaseError::from)?;

        Ok(StatusHistoryEntry {
            id,
            thesis_id: thesis_id.to_string(),
            prior_status: prior,
            new_status: new,
            changed_at,
            note: note.map(String::from),
        })
    }

    /// Full ledger for a thesis, oldest first. Unknown ids give an empty list.
    pub async fn history_for(
        &self,
        thesis_id: &str,
    ) -> Result<Vec<StatusHistoryEntry>, WorkflowError> {
        tracing::debug!(thesis_id, "loading history");
        Ok(query_all(
            self.db().read().await.conn(),
            &format!(
                "SELECT {SELECT_COLS} FROM status_history
                 WHERE thesis_id = ?1
                 ORDER BY changed_at ASC, rowid ASC"
            ),
            [thesis_id],
            row_to_entry,
        )
        .await?)
    }

    /// Lazy, finite view of the ledger, fetched page by page.
    pub fn history_stream(
        &self,
        thesis_id: impl Into<String>,
    ) -> impl Stream<Item = Result<StatusHistoryEntry, WorkflowError>> + '_ {
        self.history_pages(thesis_id.into(), HISTORY_PAGE_SIZE)
    }

    pub(crate) fn history_pages(
        &self,
        thesis_id: String,
        page_size: u32,
    ) -> impl Stream<Item = Result<StatusHistoryEntry, WorkflowError>> + '_ {
        let db = self.db();
        // `None` once a short page shows the ledger is exhausted.
        let start: Option<Option<Cursor>> = Some(None);

        stream::try_unfold(start, move |state| {
            let thesis_id = thesis_id.clone();
            async move {
                let Some(after) = state else {
                    return Ok(None);
                };
                // The gate is held per page, so a consumer may write between pages.
                let reader = db.read().await;
                let page = history_page(reader.conn(), &thesis_id, after.as_ref(), page_size).await?;
                drop(reader);
                if page.is_empty() {
                    return Ok(None);
                }
                let exhausted = page.len() < page_size as usize;
                let next = page.last().map(|(_, cursor)| cursor.clone());
                let entries: Vec<StatusHistoryEntry> =
                    page.into_iter().map(|(entry, _)| entry).collect();
                let state = if exhausted { None } else { Some(next) };
                Ok::<_, WorkflowError>(Some((entries, state)))
            }
        })
        .map_ok(|entries| stream::iter(entries.into_iter().map(Ok)))
        .try_flatten()
    }
}
