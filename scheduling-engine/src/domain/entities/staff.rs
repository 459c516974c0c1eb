use serde::{Deserialize, Serialize};
use shared::LicenseType;

/// Staff entity
///
/// Capabilities are flat flags; the scheduling rules combine them
/// conjunctively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: i32,
    pub name: String,
    /// Monthly cap on worked days.
    #[serde(default = "default_work_limit")]
    pub work_limit: u32,
    #[serde(default)]
    pub license_type: LicenseType,
    #[serde(default)]
    pub is_part_time: bool,
    /// Restricted to training tasks only.
    #[serde(default)]
    pub can_only_train: bool,
    #[serde(default)]
    pub is_nurse: bool,
}

fn default_work_limit() -> u32 {
    20
}

impl Staff {
    /// Counts toward the daily driver floor: licensed and not part-time.
    pub fn is_driver(&self) -> bool {
        self.license_type.can_drive() && !self.is_part_time
    }
}
