use thiserror::Error;

/// The integrator could not produce a finite, converged trajectory. The
/// caller gets the whole solve as a failure; no partial data escapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("state became non-finite near t={t}")]
    NonFiniteState { t: f64 },
    #[error("step size underflowed near t={t} without meeting tolerance")]
    StepSizeUnderflow { t: f64 },
    #[error("step budget of {max_steps} exhausted at t={t}")]
    StepBudgetExhausted { t: f64, max_steps: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("time grid needs at least two points, got {0}")]
    TooFewPoints(usize),
    #[error("time grid must be strictly increasing (violated at index {index})")]
    NotIncreasing { index: usize },
}
