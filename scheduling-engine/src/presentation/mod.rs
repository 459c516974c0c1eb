pub mod shift_serializer;

pub use shift_serializer::{ShiftAssignmentSerialize, ShiftDataSerialize, StaffShiftsSerialize};
