use serde::{Deserialize, Serialize};

/// Facility closure day; no staff is scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}
