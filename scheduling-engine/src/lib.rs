pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export the engine entry points
pub use domain::entities::{GeneratedShift, ScheduleInput, ShiftPlan};
pub use domain::services::ShiftPlanner;
pub use domain::ShiftGenerator;
pub use infrastructure::config::Settings;
