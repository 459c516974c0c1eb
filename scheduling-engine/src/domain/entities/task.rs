use serde::{Deserialize, Serialize};
use shared::TaskCategory;

/// Vehicle class a driving task requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    Wagon,
    StandardCar,
    Generic,
}

/// Task entity
///
/// Rule semantics derive from keywords in the name, so renaming a task
/// changes how it is scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub name: String,
}

impl Task {
    /// Whether this task falls in the given category.
    pub fn is_in(&self, category: TaskCategory) -> bool {
        category.matches(&self.name)
    }

    /// Vehicle class for the licensing rule. Wagon keywords take precedence
    /// over standard car, which takes precedence over generic driving.
    pub fn vehicle_class(&self) -> Option<VehicleClass> {
        if self.is_in(TaskCategory::WagonDriving) {
            Some(VehicleClass::Wagon)
        } else if self.is_in(TaskCategory::StandardCarDriving) {
            Some(VehicleClass::StandardCar)
        } else if self.is_in(TaskCategory::GenericDriving) {
            Some(VehicleClass::Generic)
        } else {
            None
        }
    }
}
