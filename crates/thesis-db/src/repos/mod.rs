//! Repository modules implementing the workflow operations.
//!
//! Each module adds methods to `WorkflowService` via `impl WorkflowService`
//! blocks. Row fetchers that must also run inside a unit of work are free
//! functions taking a `&libsql::Connection`.

pub mod committee;
pub mod history;
pub mod milestone;
pub mod people;
pub mod submission;
pub mod thesis;
pub mod transition;
