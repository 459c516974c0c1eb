use selen::prelude::*;
use std::collections::HashMap;

use super::calendar::MonthCalendar;
use crate::domain::entities::{Staff, Task};

/// Decision variables `x[staff, day, task] ∈ {0, 1}`, keyed by ids.
///
/// Lookup is total: an unknown key (for example an absence request naming a
/// staff id that is not on the roster) yields `None` rather than a panic.
pub struct ShiftVariables {
    vars: HashMap<(i32, u32, i32), VarId>,
}

impl ShiftVariables {
    /// Materialize one boolean per (staff, day, task) triple, staff outer,
    /// day middle, task inner.
    pub fn build(
        model: &mut Model,
        staffs: &[Staff],
        calendar: &MonthCalendar,
        tasks: &[Task],
    ) -> Self {
        let mut vars =
            HashMap::with_capacity(staffs.len() * calendar.last_day() as usize * tasks.len());
        for staff in staffs {
            for day in calendar.days() {
                for task in tasks {
                    vars.insert((staff.id, day, task.id), model.bool());
                }
            }
        }
        Self { vars }
    }

    pub fn get(&self, staff_id: i32, day: u32, task_id: i32) -> Option<VarId> {
        self.vars.get(&(staff_id, day, task_id)).copied()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables of one staff-day across `tasks`, in task order.
    pub fn for_staff_day(&self, staff_id: i32, day: u32, tasks: &[Task]) -> Vec<VarId> {
        tasks
            .iter()
            .filter_map(|task| self.get(staff_id, day, task.id))
            .collect()
    }

    /// Variables of one day-task slot across `staffs`, in staff order.
    pub fn for_day_task(&self, staffs: &[Staff], day: u32, task_id: i32) -> Vec<VarId> {
        staffs
            .iter()
            .filter_map(|staff| self.get(staff.id, day, task_id))
            .collect()
    }

    /// All variables of one staff member over the whole month.
    pub fn for_staff_month(
        &self,
        staff_id: i32,
        calendar: &MonthCalendar,
        tasks: &[Task],
    ) -> Vec<VarId> {
        calendar
            .days()
            .flat_map(|day| self.for_staff_day(staff_id, day, tasks))
            .collect()
    }
}
