use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No feasible schedule: {0}")]
    NoSolution(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Solver error: {0}")]
    SolverFailure(String),

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
