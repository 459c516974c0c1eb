use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::{ShiftAssignment, ShiftPlan, StaffSchedule};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One calendar-cell assignment as the calendar UI consumes it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignmentSerialize {
    pub staff_id: i32,
    pub staff_name: String,
    pub task_id: i32,
    pub task_name: String,
    pub is_nurse: bool,
}

impl From<&ShiftAssignment> for ShiftAssignmentSerialize {
    fn from(assignment: &ShiftAssignment) -> Self {
        Self {
            staff_id: assignment.staff_id,
            staff_name: assignment.staff_name.clone(),
            task_id: assignment.task_id,
            task_name: assignment.task_name.clone(),
            is_nurse: assignment.is_nurse,
        }
    }
}

/// Per-staff table row: task name per date, empty string on rest days.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffShiftsSerialize {
    pub staff_id: i32,
    pub staff_name: String,
    pub shifts: BTreeMap<String, String>,
}

impl From<&StaffSchedule> for StaffShiftsSerialize {
    fn from(schedule: &StaffSchedule) -> Self {
        Self {
            staff_id: schedule.staff_id,
            staff_name: schedule.staff_name.clone(),
            shifts: schedule
                .shifts
                .iter()
                .map(|(date, task_name)| {
                    (date.format(DATE_FORMAT).to_string(), task_name.clone())
                })
                .collect(),
        }
    }
}

/// Complete structured result: both projections keyed the way the calendar
/// and table UIs expect.
#[derive(Debug, Serialize)]
pub struct ShiftDataSerialize {
    pub by_date: BTreeMap<String, Vec<ShiftAssignmentSerialize>>,
    pub by_staff: Vec<StaffShiftsSerialize>,
}

impl From<&ShiftPlan> for ShiftDataSerialize {
    fn from(plan: &ShiftPlan) -> Self {
        Self {
            by_date: plan
                .by_date
                .iter()
                .map(|(date, assignments)| {
                    (
                        date.format(DATE_FORMAT).to_string(),
                        assignments.iter().map(ShiftAssignmentSerialize::from).collect(),
                    )
                })
                .collect(),
            by_staff: plan.by_staff.iter().map(StaffShiftsSerialize::from).collect(),
        }
    }
}
