use shared::DomainResult;

use crate::domain::entities::{GeneratedShift, ScheduleInput};
use crate::domain::services::{MonthCalendar, ShiftPlanner};
use crate::infrastructure::config::Settings;
use crate::infrastructure::exporter::ShiftWorkbook;

/// End-to-end generation: solve the month, export the workbook, return the
/// structured plan alongside the file path.
pub struct ShiftGenerator {
    settings: Settings,
}

impl ShiftGenerator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn generate(&self, input: &ScheduleInput) -> DomainResult<GeneratedShift> {
        tracing::info!(
            year = input.year,
            month = input.month,
            staffs = input.staffs.len(),
            tasks = input.tasks.len(),
            "starting shift generation"
        );

        let planner = ShiftPlanner::new(self.settings.solver.clone());
        let plan = planner.plan(input)?;

        let calendar = MonthCalendar::new(input.year, input.month, &input.holidays)?;
        let workbook = ShiftWorkbook::new(&self.settings.output);
        let spreadsheet_path = workbook.write(&plan, &calendar)?;
        tracing::info!(path = %spreadsheet_path, "shift workbook written");

        Ok(GeneratedShift {
            spreadsheet_path,
            plan,
        })
    }
}
