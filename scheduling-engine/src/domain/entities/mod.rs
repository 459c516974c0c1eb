pub mod absence;
pub mod holiday;
pub mod requirement;
pub mod rest_setting;
pub mod schedule_input;
pub mod shift_plan;
pub mod staff;
pub mod task;

pub use absence::AbsenceRequest;
pub use holiday::Holiday;
pub use requirement::DailyRequirement;
pub use rest_setting::MonthlyRestSetting;
pub use schedule_input::ScheduleInput;
pub use shift_plan::{GeneratedShift, ShiftAssignment, ShiftPlan, StaffSchedule};
pub use staff::Staff;
pub use task::{Task, VehicleClass};
