pub mod committee;
pub mod dashboard;
pub mod dispatch;
pub mod milestone;
pub mod people;
pub mod shared;
pub mod submission;
pub mod thesis;
