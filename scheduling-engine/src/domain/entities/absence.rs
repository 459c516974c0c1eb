use serde::{Deserialize, Serialize};

/// Staff-declared preferred day off. Honored as a soft preference, not a
/// guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceRequest {
    pub staff_id: i32,
    pub date: String,
}
