use serde::{Deserialize, Serialize};

/// Schema-less detail payload of a task, stored as a JSON string in the
/// `details` column. Only data that never needs to be indexed or sorted by
/// the DBMS belongs here; new fields get serde defaults instead of table
/// migrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    #[serde(default)]
    pub notes: String,
}

impl Detail {
    pub fn new(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
        }
    }

    /// Serialize for the `details` column.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse the `details` column. An empty or missing string yields the
    /// default payload rather than an error.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }
}
