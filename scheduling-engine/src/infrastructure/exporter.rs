use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use shared::{DomainError, DomainResult};

use super::config::OutputSettings;
use crate::domain::entities::ShiftPlan;
use crate::domain::services::MonthCalendar;

const HEADER_FILL: Color = Color::RGB(0x007BFF);
const REST_FILL: Color = Color::RGB(0xDDDDDD);
const STAFF_COLUMN_FILL: Color = Color::RGB(0xF0F4FF);

const NAME_COLUMN_WIDTH: f64 = 14.0;
const DAY_COLUMN_WIDTH: f64 = 8.0;
const HEADER_ROW_HEIGHT: f64 = 28.0;
const BODY_ROW_HEIGHT: f64 = 20.0;

/// Renders the by-staff projection into a styled workbook on disk.
///
/// Staff names run down column A, days across the header; each body cell is
/// the assigned task name, or `休` on a gray fill for rest days.
pub struct ShiftWorkbook {
    output: OutputSettings,
}

impl ShiftWorkbook {
    pub fn new(output: &OutputSettings) -> Self {
        Self {
            output: output.clone(),
        }
    }

    /// Write the month sheet and return the relative file path.
    pub fn write(&self, plan: &ShiftPlan, calendar: &MonthCalendar) -> DomainResult<String> {
        std::fs::create_dir_all(&self.output.directory).map_err(|error| {
            DomainError::ExportError(format!(
                "cannot create output directory {}: {}",
                self.output.directory, error
            ))
        })?;
        self.render(plan, calendar)
            .map_err(|error| DomainError::ExportError(error.to_string()))
    }

    fn render(&self, plan: &ShiftPlan, calendar: &MonthCalendar) -> Result<String, XlsxError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(format!("{}月シフト", calendar.month()))?;

        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(HEADER_FILL)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);
        let staff_name_format = Format::new()
            .set_bold()
            .set_background_color(STAFF_COLUMN_FILL)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);
        let body_format = Format::new()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);
        let rest_format = body_format.clone().set_background_color(REST_FILL);

        sheet.write_string_with_format(0, 0, "氏名 \\ 日付", &header_format)?;
        sheet.set_column_width(0, NAME_COLUMN_WIDTH)?;

        for (index, day) in calendar.days().enumerate() {
            let column = (index + 1) as u16;
            let label = format!("{}日\n({})", day, calendar.weekday_kanji(day));
            sheet.write_string_with_format(0, column, &label, &header_format)?;
            sheet.set_column_width(column, DAY_COLUMN_WIDTH)?;
        }
        sheet.set_row_height(0, HEADER_ROW_HEIGHT)?;

        for (staff_index, staff_row) in plan.by_staff.iter().enumerate() {
            let row = (staff_index + 1) as u32;
            sheet.write_string_with_format(row, 0, &staff_row.staff_name, &staff_name_format)?;

            for (index, day) in calendar.days().enumerate() {
                let column = (index + 1) as u16;
                let task_name = staff_row
                    .shifts
                    .get(&calendar.date(day))
                    .map(String::as_str)
                    .unwrap_or("");
                if task_name.is_empty() {
                    sheet.write_string_with_format(row, column, "休", &rest_format)?;
                } else {
                    sheet.write_string_with_format(row, column, task_name, &body_format)?;
                }
            }
            sheet.set_row_height(row, BODY_ROW_HEIGHT)?;
        }

        let filename = format!(
            "{}/shift_{}_{}_{}.xlsx",
            self.output.directory,
            calendar.year(),
            calendar.month(),
            Local::now().format("%H%M%S")
        );
        workbook.save(&filename)?;
        Ok(filename)
    }
}
