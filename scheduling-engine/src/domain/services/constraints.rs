use chrono::{Datelike, NaiveDate};
use selen::prelude::*;
use shared::{TaskCategory, DRIVER_MIN_COUNT};
use std::collections::{HashMap, HashSet};

use super::calendar::MonthCalendar;
use super::variables::ShiftVariables;
use crate::domain::entities::{AbsenceRequest, DailyRequirement, Staff, Task, VehicleClass};

/// Assembles the scheduling rules on one model: the mandatory rules as hard
/// constraints and the preferred-day-off penalties as the soft objective.
pub struct ShiftConstraints<'a> {
    model: &'a mut Model,
    vars: &'a ShiftVariables,
    staffs: &'a [Staff],
    tasks: &'a [Task],
    calendar: &'a MonthCalendar,
}

impl<'a> ShiftConstraints<'a> {
    pub fn new(
        model: &'a mut Model,
        vars: &'a ShiftVariables,
        staffs: &'a [Staff],
        tasks: &'a [Task],
        calendar: &'a MonthCalendar,
    ) -> Self {
        Self {
            model,
            vars,
            staffs,
            tasks,
            calendar,
        }
    }

    /// All mandatory rules.
    pub fn add_hard_constraints(
        &mut self,
        requirements: &[DailyRequirement],
        additional_rest_days: Option<u32>,
    ) {
        self.one_task_per_staff_day();
        self.daily_requirements(requirements);
        self.nursing_exclusive();
        self.training_only_staff();
        self.driver_floor();
        self.facility_holidays();
        self.leadership_eligibility();
        self.vehicle_license_requirement();
        self.no_driving_for_part_timers();
        self.training_qualification();
        if let Some(additional_days) = additional_rest_days {
            self.monthly_rest_days(additional_days);
        }
    }

    /// Work-limit cap plus the preferred-day-off penalty set. Returns the
    /// penalty variables to be minimized.
    pub fn add_soft_constraints(&mut self, absences: &[AbsenceRequest]) -> Vec<VarId> {
        self.work_limit();
        self.absence_penalties(absences)
    }

    /// Each staff member performs at most one task per day.
    fn one_task_per_staff_day(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        for staff in staffs {
            for day in calendar.days() {
                let task_vars = self.vars.for_staff_day(staff.id, day, tasks);
                let worked = self.model.sum(&task_vars);
                self.model.new(worked.le(1));
            }
        }
    }

    /// Configured day/task staffing counts are met exactly. Facility
    /// holidays skip the equality; the closure rule zeroes those days
    /// anyway.
    fn daily_requirements(&mut self, requirements: &[DailyRequirement]) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        let requirement_map = self.requirement_map(requirements);
        for day in calendar.days() {
            if calendar.is_facility_holiday(day) {
                continue;
            }
            for task in tasks {
                if let Some(&count) = requirement_map.get(&(day, task.id)) {
                    let staff_vars = self.vars.for_day_task(staffs, day, task.id);
                    let assigned = self.model.sum(&staff_vars);
                    self.model.new(assigned.eq(count as i32));
                }
            }
        }
    }

    /// Nursing tasks take nurses only.
    fn nursing_exclusive(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        for task in tasks.iter().filter(|task| task.is_in(TaskCategory::Nursing)) {
            for staff in staffs.iter().filter(|staff| !staff.is_nurse) {
                for day in calendar.days() {
                    self.forbid(staff.id, day, task.id);
                }
            }
        }
    }

    /// Training-limited staff take nothing but training tasks.
    fn training_only_staff(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        let training_ids: HashSet<i32> = tasks
            .iter()
            .filter(|task| task.is_in(TaskCategory::Training))
            .map(|task| task.id)
            .collect();
        for staff in staffs.iter().filter(|staff| staff.can_only_train) {
            for task in tasks.iter().filter(|task| !training_ids.contains(&task.id)) {
                for day in calendar.days() {
                    self.forbid(staff.id, day, task.id);
                }
            }
        }
    }

    /// At least `DRIVER_MIN_COUNT` licensed full-timers working on every
    /// open day. Skipped entirely when the roster has fewer qualifying
    /// staff than the floor.
    fn driver_floor(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        let drivers: Vec<&Staff> = staffs.iter().filter(|staff| staff.is_driver()).collect();
        if drivers.len() < DRIVER_MIN_COUNT {
            return;
        }
        for day in calendar.days() {
            if calendar.is_facility_holiday(day) {
                continue;
            }
            let mut working = Vec::with_capacity(drivers.len());
            for staff in &drivers {
                let task_vars = self.vars.for_staff_day(staff.id, day, tasks);
                working.push(self.model.sum(&task_vars));
            }
            let total = self.model.sum(&working);
            self.model.new(total.ge(DRIVER_MIN_COUNT as i32));
        }
    }

    /// Facility holidays: nobody is scheduled for anything.
    fn facility_holidays(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        for day in calendar.days() {
            if !calendar.is_facility_holiday(day) {
                continue;
            }
            for staff in staffs {
                for task in tasks {
                    self.forbid(staff.id, day, task.id);
                }
            }
        }
    }

    /// Leader and sub-leader tasks exclude part-time and training-limited
    /// staff.
    fn leadership_eligibility(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        for task in tasks
            .iter()
            .filter(|task| task.is_in(TaskCategory::Leadership))
        {
            for staff in staffs
                .iter()
                .filter(|staff| staff.is_part_time || staff.can_only_train)
            {
                for day in calendar.days() {
                    self.forbid(staff.id, day, task.id);
                }
            }
        }
    }

    /// Driving tasks require the matching license class.
    fn vehicle_license_requirement(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        for task in tasks {
            let Some(class) = task.vehicle_class() else {
                continue;
            };
            for staff in staffs {
                let allowed = match class {
                    VehicleClass::Wagon => staff.license_type.allows_wagon(),
                    VehicleClass::StandardCar | VehicleClass::Generic => {
                        staff.license_type.can_drive()
                    }
                };
                if allowed {
                    continue;
                }
                for day in calendar.days() {
                    self.forbid(staff.id, day, task.id);
                }
            }
        }
    }

    /// Part-time staff are never put on transport duty.
    fn no_driving_for_part_timers(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        for task in tasks
            .iter()
            .filter(|task| task.is_in(TaskCategory::GenericDriving))
        {
            for staff in staffs.iter().filter(|staff| staff.is_part_time) {
                for day in calendar.days() {
                    self.forbid(staff.id, day, task.id);
                }
            }
        }
    }

    /// Training tasks take nurses or training-limited staff only.
    fn training_qualification(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        for task in tasks
            .iter()
            .filter(|task| task.is_in(TaskCategory::Training))
        {
            for staff in staffs
                .iter()
                .filter(|staff| !staff.is_nurse && !staff.can_only_train)
            {
                for day in calendar.days() {
                    self.forbid(staff.id, day, task.id);
                }
            }
        }
    }

    /// Fixed worked-day total per staff: month length minus Saturdays minus
    /// the configured additional rest days. Strict equality; incompatible
    /// requirements make the model infeasible.
    fn monthly_rest_days(&mut self, additional_days: u32) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        let required_rest = calendar.count_saturdays() + additional_days;
        let required_work = calendar.last_day() as i32 - required_rest as i32;
        for staff in staffs {
            let month_vars = self.vars.for_staff_month(staff.id, calendar, tasks);
            let total = self.model.sum(&month_vars);
            self.model.new(total.eq(required_work));
        }
    }

    /// Monthly worked-day cap per staff.
    fn work_limit(&mut self) {
        let (staffs, tasks, calendar) = (self.staffs, self.tasks, self.calendar);
        for staff in staffs {
            let month_vars = self.vars.for_staff_month(staff.id, calendar, tasks);
            let total = self.model.sum(&month_vars);
            self.model.new(total.le(staff.work_limit as i32));
        }
    }

    /// One penalty variable per in-month preferred day off, true exactly
    /// when the staff member works that day. Duplicate requests for the
    /// same staff-day collapse to one penalty.
    fn absence_penalties(&mut self, absences: &[AbsenceRequest]) -> Vec<VarId> {
        let (tasks, calendar) = (self.tasks, self.calendar);
        let mut seen = HashSet::new();
        let mut penalties = Vec::new();
        for absence in absences {
            let date = match NaiveDate::parse_from_str(&absence.date, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    tracing::debug!(date = %absence.date, "skipping absence with malformed date");
                    continue;
                }
            };
            if date.year() != calendar.year() || date.month() != calendar.month() {
                continue;
            }
            let day = date.day();
            if !seen.insert((absence.staff_id, day)) {
                continue;
            }
            let task_vars = self.vars.for_staff_day(absence.staff_id, day, tasks);
            if task_vars.is_empty() {
                continue;
            }
            penalties.push(self.model.bool_or(&task_vars));
        }
        penalties
    }

    /// In-month requirement rows keyed by (day, task id); later rows win,
    /// malformed dates are dropped.
    fn requirement_map(&self, requirements: &[DailyRequirement]) -> HashMap<(u32, i32), u32> {
        let calendar = self.calendar;
        let mut map = HashMap::new();
        for requirement in requirements {
            match NaiveDate::parse_from_str(&requirement.date, "%Y-%m-%d") {
                Ok(date) if date.year() == calendar.year() && date.month() == calendar.month() => {
                    map.insert((date.day(), requirement.task_id), requirement.count);
                }
                Ok(_) => {}
                Err(_) => {
                    tracing::debug!(date = %requirement.date, "skipping requirement with malformed date");
                }
            }
        }
        map
    }

    /// Pin one assignment variable to zero, ignoring unknown keys.
    fn forbid(&mut self, staff_id: i32, day: u32, task_id: i32) {
        if let Some(var) = self.vars.get(staff_id, day, task_id) {
            self.model.new(var.eq(0));
        }
    }
}
