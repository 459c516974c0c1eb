#![allow(dead_code)]

use chrono::NaiveDate;
use scheduling_engine::domain::entities::{
    AbsenceRequest, DailyRequirement, Holiday, ScheduleInput, ShiftPlan, Staff, Task,
};
use scheduling_engine::infrastructure::config::SolverSettings;
use shared::LicenseType;

/// Full-time staff member with no license and no special capabilities.
pub fn staff(id: i32, name: &str) -> Staff {
    Staff {
        id,
        name: name.to_string(),
        work_limit: 20,
        license_type: LicenseType::None,
        is_part_time: false,
        can_only_train: false,
        is_nurse: false,
    }
}

pub fn nurse(id: i32, name: &str) -> Staff {
    Staff {
        is_nurse: true,
        ..staff(id, name)
    }
}

pub fn task(id: i32, name: &str) -> Task {
    Task {
        id,
        name: name.to_string(),
    }
}

pub fn requirement(date: &str, task_id: i32, count: u32) -> DailyRequirement {
    DailyRequirement {
        date: date.to_string(),
        task_id,
        count,
    }
}

pub fn absence(staff_id: i32, date: &str) -> AbsenceRequest {
    AbsenceRequest {
        staff_id,
        date: date.to_string(),
    }
}

pub fn holiday(date: &str) -> Holiday {
    Holiday {
        date: date.to_string(),
        description: None,
    }
}

/// Empty snapshot for the given month; tests fill in what they need.
pub fn base_input(year: i32, month: u32) -> ScheduleInput {
    ScheduleInput {
        staffs: vec![],
        tasks: vec![],
        requirements: vec![],
        absences: vec![],
        holidays: vec![],
        rest_settings: vec![],
        year,
        month,
    }
}

pub fn solver_settings() -> SolverSettings {
    SolverSettings::default()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Ids of the staff assigned on a date, in extraction order.
pub fn assigned_staff_on(plan: &ShiftPlan, date: NaiveDate) -> Vec<i32> {
    plan.by_date
        .get(&date)
        .map(|assignments| {
            assignments
                .iter()
                .map(|assignment| assignment.staff_id)
                .collect()
        })
        .unwrap_or_default()
}

/// Both projections describe the same assignments.
pub fn assert_projections_consistent(plan: &ShiftPlan) {
    for (date, assignments) in &plan.by_date {
        for assignment in assignments {
            let row = plan
                .by_staff
                .iter()
                .find(|row| row.staff_id == assignment.staff_id)
                .expect("staff in by_date must have a by_staff row");
            assert_eq!(
                row.shifts.get(date),
                Some(&assignment.task_name),
                "by_staff disagrees with by_date for staff {} on {}",
                assignment.staff_id,
                date
            );
        }
    }

    for row in &plan.by_staff {
        for (date, task_name) in &row.shifts {
            if task_name.is_empty() {
                continue;
            }
            let listed = plan
                .by_date
                .get(date)
                .map(|assignments| {
                    assignments.iter().any(|assignment| {
                        assignment.staff_id == row.staff_id
                            && &assignment.task_name == task_name
                    })
                })
                .unwrap_or(false);
            assert!(
                listed,
                "by_date is missing staff {} on {}",
                row.staff_id, date
            );
        }
    }
}

/// The 17-staff roster, task catalog, daily requirements, preferred days
/// off and Sunday closures of the November 2025 planning data.
pub fn real_data_input() -> ScheduleInput {
    let mut input = base_input(2025, 11);

    input.staffs = vec![
        Staff {
            license_type: LicenseType::Wagon,
            ..staff(1, "A")
        },
        Staff {
            license_type: LicenseType::Wagon,
            ..staff(2, "B")
        },
        staff(3, "C"),
        Staff {
            license_type: LicenseType::Wagon,
            ..staff(4, "D")
        },
        Staff {
            license_type: LicenseType::Wagon,
            ..staff(5, "E")
        },
        Staff {
            license_type: LicenseType::Wagon,
            ..nurse(6, "F")
        },
        Staff {
            license_type: LicenseType::Wagon,
            ..nurse(7, "G")
        },
        nurse(8, "H"),
        Staff {
            license_type: LicenseType::Wagon,
            ..staff(9, "I")
        },
        Staff {
            license_type: LicenseType::StandardCar,
            ..staff(10, "J")
        },
        staff(11, "K"),
        staff(12, "L"),
        Staff {
            license_type: LicenseType::StandardCar,
            ..staff(13, "M")
        },
        Staff {
            work_limit: 16,
            is_part_time: true,
            ..staff(14, "N")
        },
        Staff {
            work_limit: 16,
            is_part_time: true,
            ..nurse(15, "O")
        },
        Staff {
            work_limit: 11,
            is_part_time: true,
            ..staff(16, "P")
        },
        Staff {
            work_limit: 12,
            is_part_time: true,
            ..staff(17, "Q")
        },
    ];

    input.tasks = vec![
        task(1, "相談"),
        task(2, "看護"),
        task(3, "訓練"),
        task(4, "特浴"),
        task(5, "風呂"),
        task(6, "リーダー"),
        task(7, "サブリーダー"),
    ];

    let task_counts = [(1, 1), (2, 1), (3, 1), (4, 1), (5, 5), (6, 1), (7, 1)];
    for day in 1..=30 {
        let date = format!("2025-11-{:02}", day);
        for (task_id, count) in task_counts {
            input.requirements.push(requirement(&date, task_id, count));
        }
    }

    let preferred_days_off: [(i32, &[u32]); 5] = [
        (1, &[4, 12, 14, 18, 22, 24]),
        (2, &[1, 10, 13, 19, 28]),
        (3, &[1, 3, 9, 22, 24]),
        (4, &[4, 12, 14, 18, 21, 26, 28]),
        (5, &[6, 8, 15, 19, 20, 26, 28]),
    ];
    for (staff_id, days) in preferred_days_off {
        for &day in days {
            input
                .absences
                .push(absence(staff_id, &format!("2025-11-{:02}", day)));
        }
    }

    // Sundays are facility closures.
    for day in [2, 9, 16, 23, 30] {
        input.holidays.push(holiday(&format!("2025-11-{:02}", day)));
    }

    input
}
