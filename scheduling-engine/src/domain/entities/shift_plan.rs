use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A single solved assignment: one staff member on one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftAssignment {
    pub staff_id: i32,
    pub staff_name: String,
    pub task_id: i32,
    pub task_name: String,
    pub is_nurse: bool,
}

/// Per-staff row of one solved month: task name per date, empty string on
/// rest days.
#[derive(Debug, Clone)]
pub struct StaffSchedule {
    pub staff_id: i32,
    pub staff_name: String,
    pub shifts: BTreeMap<NaiveDate, String>,
}

impl StaffSchedule {
    /// Number of days this staff member works.
    pub fn worked_days(&self) -> usize {
        self.shifts.values().filter(|name| !name.is_empty()).count()
    }
}

/// Both projections of one solved month.
///
/// `by_date` only carries dates with at least one assignment; `by_staff`
/// carries every staff row in input order with every day of the month
/// present.
#[derive(Debug, Clone)]
pub struct ShiftPlan {
    pub by_date: BTreeMap<NaiveDate, Vec<ShiftAssignment>>,
    pub by_staff: Vec<StaffSchedule>,
}

/// Result of a full generation run: the workbook on disk plus the
/// structured plan.
#[derive(Debug)]
pub struct GeneratedShift {
    pub spreadsheet_path: String,
    pub plan: ShiftPlan,
}
