#[path = "common/mod.rs"]
mod common;

use common::{
    absence, assert_projections_consistent, assigned_staff_on, base_input, date, holiday, nurse,
    real_data_input, requirement, solver_settings, staff, task,
};
use scheduling_engine::domain::entities::{MonthlyRestSetting, Staff};
use scheduling_engine::domain::services::ShiftPlanner;
use scheduling_engine::infrastructure::config::SolverSettings;
use shared::DomainError;

#[test]
fn test_minimal_requirement_is_met() {
    let mut input = base_input(2024, 2);
    input.staffs = vec![staff(1, "Aさん"), nurse(2, "Bさん"), staff(3, "Cさん")];
    input.tasks = vec![task(1, "通常業務"), task(2, "看護業務")];
    input.requirements = vec![requirement("2024-02-01", 1, 1)];

    let plan = ShiftPlanner::new(solver_settings()).plan(&input).unwrap();

    let assignments = &plan.by_date[&date(2024, 2, 1)];
    assert!(!assignments.is_empty());
    assert_eq!(
        assignments.iter().filter(|a| a.task_id == 1).count(),
        1,
        "exactly one person covers the required slot"
    );
    assert_eq!(plan.by_staff.len(), 3);
    assert_projections_consistent(&plan);
}

#[test]
fn test_unsatisfiable_requirement_returns_no_solution() {
    let mut input = base_input(2024, 2);
    input.staffs = vec![nurse(1, "A"), nurse(2, "B"), nurse(3, "C"), staff(4, "D")];
    input.tasks = vec![task(1, "看護")];
    // Five nurses required, only three exist.
    input.requirements = vec![requirement("2024-02-01", 1, 5)];

    let result = ShiftPlanner::new(solver_settings()).plan(&input);
    assert!(matches!(result, Err(DomainError::NoSolution(_))));
}

#[test]
fn test_requirement_outside_month_is_ignored() {
    let mut input = base_input(2024, 2);
    input.staffs = vec![staff(1, "A")];
    input.tasks = vec![task(1, "風呂")];
    // Would be unsatisfiable if it were applied to February.
    input.requirements = vec![requirement("2024-03-01", 1, 5)];

    let result = ShiftPlanner::new(solver_settings()).plan(&input);
    assert!(result.is_ok());
}

#[test]
fn test_requirement_on_facility_holiday_is_ignored() {
    let mut input = base_input(2024, 2);
    input.staffs = vec![staff(1, "A"), staff(2, "B")];
    input.tasks = vec![task(1, "風呂")];
    input.requirements = vec![
        requirement("2024-02-05", 1, 1),
        requirement("2024-02-06", 1, 1),
    ];
    input.holidays = vec![holiday("2024-02-05")];

    let plan = ShiftPlanner::new(solver_settings()).plan(&input).unwrap();

    // The closure wins over the staffing requirement.
    assert!(assigned_staff_on(&plan, date(2024, 2, 5)).is_empty());
    assert_eq!(assigned_staff_on(&plan, date(2024, 2, 6)).len(), 1);
}

#[test]
fn test_zero_count_requirement_forces_empty_slot() {
    let mut input = base_input(2024, 2);
    input.staffs = vec![staff(1, "A"), staff(2, "B")];
    input.tasks = vec![task(1, "風呂"), task(2, "相談")];
    input.requirements = vec![
        requirement("2024-02-01", 1, 0),
        requirement("2024-02-01", 2, 1),
    ];

    let plan = ShiftPlanner::new(solver_settings()).plan(&input).unwrap();

    let assignments = &plan.by_date[&date(2024, 2, 1)];
    assert_eq!(assignments.len(), 1);
    assert!(assignments.iter().all(|a| a.task_id == 2));
}

#[test]
fn test_easily_avoidable_absence_is_honored() {
    let mut input = base_input(2023, 2);
    input.staffs = vec![staff(1, "A"), staff(2, "B"), staff(3, "C")];
    input.tasks = vec![task(1, "風呂")];
    for day in 1..=28 {
        input
            .requirements
            .push(requirement(&format!("2023-02-{:02}", day), 1, 1));
    }
    input.absences = vec![absence(1, "2023-02-15")];

    let plan = ShiftPlanner::new(solver_settings()).plan(&input).unwrap();

    // Another staff member can cover the 15th, so any optimum honors the
    // preference.
    assert_eq!(plan.by_staff[0].shifts[&date(2023, 2, 15)], "");
    assert_projections_consistent(&plan);
}

#[test]
fn test_absence_is_overridden_when_staffing_requires_it() {
    let mut input = base_input(2023, 2);
    input.staffs = vec![Staff {
        work_limit: 28,
        ..staff(1, "A")
    }];
    input.tasks = vec![task(1, "風呂")];
    for day in 1..=28 {
        input
            .requirements
            .push(requirement(&format!("2023-02-{:02}", day), 1, 1));
    }
    input.absences = vec![absence(1, "2023-02-15")];

    let plan = ShiftPlanner::new(solver_settings()).plan(&input).unwrap();

    // The only staff member must still cover the requested day.
    assert_eq!(plan.by_staff[0].shifts[&date(2023, 2, 15)], "風呂");
    assert_eq!(plan.by_staff[0].worked_days(), 28);
}

#[test]
fn test_work_limit_caps_worked_days() {
    let mut input = base_input(2024, 2);
    input.staffs = vec![Staff {
        work_limit: 2,
        ..staff(1, "A")
    }];
    input.tasks = vec![task(1, "風呂")];
    for day in 1..=3 {
        input
            .requirements
            .push(requirement(&format!("2024-02-{:02}", day), 1, 1));
    }

    let capped = ShiftPlanner::new(solver_settings()).plan(&input);
    assert!(matches!(capped, Err(DomainError::NoSolution(_))));

    input.staffs[0].work_limit = 3;
    let plan = ShiftPlanner::new(solver_settings()).plan(&input).unwrap();
    assert_eq!(plan.by_staff[0].worked_days(), 3);
}

#[test]
fn test_monthly_rest_day_equality() {
    // November 2025: 30 days, 5 Saturdays, 4 additional rest days -> every
    // staff member works exactly 21 days.
    let mut input = base_input(2025, 11);
    input.staffs = vec![
        Staff {
            work_limit: 31,
            ..staff(1, "A")
        },
        Staff {
            work_limit: 31,
            ..staff(2, "B")
        },
    ];
    input.tasks = vec![task(1, "風呂")];
    input.rest_settings = vec![
        MonthlyRestSetting {
            year: 2025,
            month: 10,
            additional_days: 9,
        },
        MonthlyRestSetting {
            year: 2025,
            month: 11,
            additional_days: 4,
        },
    ];

    let plan = ShiftPlanner::new(solver_settings()).plan(&input).unwrap();
    for row in &plan.by_staff {
        assert_eq!(row.worked_days(), 21, "staff {} total", row.staff_id);
    }
}

#[test]
fn test_malformed_dates_are_skipped() {
    let mut input = base_input(2024, 2);
    input.staffs = vec![staff(1, "A")];
    input.tasks = vec![task(1, "風呂")];
    input.requirements = vec![
        // Would be unsatisfiable if the malformed date were accepted.
        requirement("02-01-2024", 1, 5),
        requirement("2024-02-01", 1, 1),
    ];
    input.absences = vec![absence(1, "not-a-date")];
    input.holidays = vec![holiday("2024/02/03")];

    let plan = ShiftPlanner::new(solver_settings()).plan(&input).unwrap();
    assert_eq!(assigned_staff_on(&plan, date(2024, 2, 1)), vec![1]);
}

#[test]
fn test_real_data_scenario() {
    let input = real_data_input();
    let settings = SolverSettings {
        time_limit_ms: 300_000,
        ..SolverSettings::default()
    };

    let plan = ShiftPlanner::new(settings).plan(&input).unwrap();

    // Sundays are closed.
    for day in [2, 9, 16, 23, 30] {
        assert!(
            assigned_staff_on(&plan, date(2025, 11, day)).is_empty(),
            "staff assigned on closed Sunday {}",
            day
        );
    }

    let nurse_ids = [6, 7, 8, 15];
    let part_time_ids = [14, 15, 16, 17];
    let driver_ids = [1, 2, 4, 5, 6, 7, 9, 10, 13];

    for (day, assignments) in &plan.by_date {
        // Eleven slots filled on every open day.
        assert_eq!(assignments.len(), 11, "staffing on {}", day);

        for assignment in assignments {
            if assignment.task_name == "看護" || assignment.task_name == "訓練" {
                assert!(
                    nurse_ids.contains(&assignment.staff_id),
                    "{} assigned to {} on {}",
                    assignment.staff_name,
                    assignment.task_name,
                    day
                );
            }
            if assignment.task_name.contains("リーダー") {
                assert!(
                    !part_time_ids.contains(&assignment.staff_id),
                    "part-timer {} leads on {}",
                    assignment.staff_name,
                    day
                );
            }
        }

        let working_drivers = assignments
            .iter()
            .filter(|assignment| driver_ids.contains(&assignment.staff_id))
            .count();
        assert!(
            working_drivers >= 6,
            "only {} drivers working on {}",
            working_drivers,
            day
        );
    }

    assert_projections_consistent(&plan);
}
