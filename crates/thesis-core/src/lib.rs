//! # thesis-core
//!
//! Core types shared by every thesis-workflow crate:
//! - Entity structs for theses, milestones, submissions, the status ledger,
//!   and reference data (students, supervisors, committee members)
//! - Closed status enums with their fixed transition tables
//! - The workflow error taxonomy surfaced to callers
//! - ID prefix constants
//! - Response types for composite read models (dashboard, committee status)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
