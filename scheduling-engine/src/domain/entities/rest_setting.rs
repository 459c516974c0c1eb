use serde::{Deserialize, Serialize};

/// Per-month rest-day policy: each staff must rest on every Saturday plus
/// `additional_days` more days, which fixes the worked-day total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRestSetting {
    pub year: i32,
    pub month: u32,
    pub additional_days: u32,
}
