use serde::{Deserialize, Serialize};

/// Staffing need for one task on one date; met exactly by the engine.
///
/// The date is kept as the `YYYY-MM-DD` string it arrives as; records with
/// malformed dates are ignored during model build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRequirement {
    pub date: String,
    pub task_id: i32,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}
