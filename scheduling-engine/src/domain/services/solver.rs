use selen::prelude::*;
use shared::{DomainError, DomainResult};

use super::calendar::MonthCalendar;
use super::constraints::ShiftConstraints;
use super::extractor;
use super::variables::ShiftVariables;
use crate::domain::entities::{ScheduleInput, ShiftPlan};
use crate::infrastructure::config::SolverSettings;

/// Drives the CP solver over one month's model and extracts the plan.
///
/// The search is deterministic for a given input ordering: variables are
/// materialized in input order and the solver carries no randomized
/// branching.
pub struct ShiftPlanner {
    settings: SolverSettings,
}

impl ShiftPlanner {
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    /// Solve the month. Infeasible models surface as `NoSolution`; any
    /// other solver failure (time or memory limit, internal error) as
    /// `SolverFailure`.
    pub fn plan(&self, input: &ScheduleInput) -> DomainResult<ShiftPlan> {
        let calendar = MonthCalendar::new(input.year, input.month, &input.holidays)?;

        let config = SolverConfig::default()
            .with_timeout_ms(self.settings.time_limit_ms)
            .with_max_memory_mb(self.settings.max_memory_mb);
        let mut model = Model::with_config(config);

        let variables = ShiftVariables::build(&mut model, &input.staffs, &calendar, &input.tasks);
        tracing::debug!(
            variables = variables.len(),
            "decision variables materialized"
        );

        let mut constraints = ShiftConstraints::new(
            &mut model,
            &variables,
            &input.staffs,
            &input.tasks,
            &calendar,
        );
        constraints.add_hard_constraints(&input.requirements, input.additional_rest_days());
        let penalties = constraints.add_soft_constraints(&input.absences);
        tracing::debug!(penalties = penalties.len(), "soft constraints registered");

        let outcome = if penalties.is_empty() {
            model.solve()
        } else {
            let objective = model.sum(&penalties);
            model.minimize(objective)
        };

        match outcome {
            Ok(solution) => Ok(extractor::extract_plan(
                &solution,
                &variables,
                &input.staffs,
                &input.tasks,
                &calendar,
            )),
            Err(SolverError::NoSolution { .. } | SolverError::ConflictingConstraints { .. }) => {
                Err(DomainError::NoSolution(
                    "no assignment satisfies the staffing rules".to_string(),
                ))
            }
            Err(error) => {
                tracing::warn!(%error, "solver did not finish");
                Err(DomainError::SolverFailure(error.to_string()))
            }
        }
    }
}
