use serde::{Deserialize, Serialize};

use super::{AbsenceRequest, DailyRequirement, Holiday, MonthlyRestSetting, Staff, Task};

/// Read-only snapshot of everything one generation run consumes.
///
/// The caller materializes these records from whatever store it uses; no
/// handles cross this boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub staffs: Vec<Staff>,
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub requirements: Vec<DailyRequirement>,
    #[serde(default)]
    pub absences: Vec<AbsenceRequest>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    #[serde(default)]
    pub rest_settings: Vec<MonthlyRestSetting>,
    pub year: i32,
    pub month: u32,
}

impl ScheduleInput {
    /// Rest-day policy for the target month, if one was configured.
    pub fn additional_rest_days(&self) -> Option<u32> {
        self.rest_settings
            .iter()
            .find(|setting| setting.year == self.year && setting.month == self.month)
            .map(|setting| setting.additional_days)
    }
}
