use selen::prelude::*;
use std::collections::BTreeMap;

use super::calendar::MonthCalendar;
use super::variables::ShiftVariables;
use crate::domain::entities::{ShiftAssignment, ShiftPlan, Staff, StaffSchedule, Task};

/// Project the solved variables into the by-date and by-staff views.
///
/// by-date scans task-outer/staff-inner and only emits dates with at least
/// one assignment; by-staff carries one row per roster entry in input order
/// with every day of the month present, the first assigned task winning.
pub fn extract_plan(
    solution: &Solution,
    vars: &ShiftVariables,
    staffs: &[Staff],
    tasks: &[Task],
    calendar: &MonthCalendar,
) -> ShiftPlan {
    let mut by_date = BTreeMap::new();
    for day in calendar.days() {
        let mut assignments = Vec::new();
        for task in tasks {
            for staff in staffs {
                if is_assigned(solution, vars, staff.id, day, task.id) {
                    assignments.push(ShiftAssignment {
                        staff_id: staff.id,
                        staff_name: staff.name.clone(),
                        task_id: task.id,
                        task_name: task.name.clone(),
                        is_nurse: staff.is_nurse,
                    });
                }
            }
        }
        if !assignments.is_empty() {
            by_date.insert(calendar.date(day), assignments);
        }
    }

    let mut by_staff = Vec::with_capacity(staffs.len());
    for staff in staffs {
        let mut shifts = BTreeMap::new();
        for day in calendar.days() {
            let task_name = tasks
                .iter()
                .find(|task| is_assigned(solution, vars, staff.id, day, task.id))
                .map(|task| task.name.clone())
                .unwrap_or_default();
            shifts.insert(calendar.date(day), task_name);
        }
        by_staff.push(StaffSchedule {
            staff_id: staff.id,
            staff_name: staff.name.clone(),
            shifts,
        });
    }

    ShiftPlan { by_date, by_staff }
}

fn is_assigned(
    solution: &Solution,
    vars: &ShiftVariables,
    staff_id: i32,
    day: u32,
    task_id: i32,
) -> bool {
    vars.get(staff_id, day, task_id)
        .map(|var| solution.get_int(var) == 1)
        .unwrap_or(false)
}
