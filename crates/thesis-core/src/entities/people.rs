use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reference data: a student who authors theses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Reference data: an academic who may supervise theses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Supervisor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Reference data: a reviewer from outside the institution, assigned to at
/// most one slot per thesis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExternalReviewer {
    pub id: String,
    pub name: String,
    pub email: String,
}
