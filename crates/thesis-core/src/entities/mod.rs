//! Entity structs for the thesis workflow.
//!
//! Each entity maps to a table in the libSQL database (see
//! `thesis-db/migrations`). All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema` for JSON output and schema validation.

mod committee;
mod history;
mod milestone;
mod people;
mod submission;
mod thesis;

pub use committee::{CommitteeMember, DecisionEntry};
pub use history::StatusHistoryEntry;
pub use milestone::Milestone;
pub use people::{ExternalReviewer, Student, Supervisor};
pub use submission::Submission;
pub use thesis::Thesis;
