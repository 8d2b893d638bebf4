mod committee;
mod milestone;
mod people;
mod submission;
mod thesis;

pub use committee::CommitteeCommands;
pub use milestone::MilestoneCommands;
pub use people::{ReviewerCommands, StudentCommands, SupervisorCommands};
pub use submission::SubmissionCommands;
pub use thesis::ThesisCommands;
