//! Core numerics for the Lorenz attractor viewer: domain types, the
//! Dormand-Prince 5(4) integrator with dense output, and the trajectory
//! solver seam the interactive controller drives.

pub mod domain;
pub mod dopri5;
pub mod error;

use crate::domain::{InitialCondition, ParameterSet, TimeGrid, Trajectory};
use crate::dopri5::Dopri5Options;
use crate::error::IntegrationError;

/// Evaluates the Lorenz vector field at `state` for the given parameters.
///
/// dx/dt = sigma (y - x)
/// dy/dt = x (rho - z) - y
/// dz/dt = x y - beta z
pub fn lorenz_field(params: &ParameterSet, state: &[f64; 3]) -> [f64; 3] {
    let [x, y, z] = *state;
    [
        params.sigma * (y - x),
        x * (params.rho - z) - y,
        x * y - params.beta * z,
    ]
}

/// Seam between the interactive controller and the numerics.
///
/// Implementations must be pure: no input mutation, no side effects, and
/// identical inputs produce identical trajectories. On failure the whole
/// solve is reported as an error; partial trajectories are never returned.
pub trait TrajectorySolver {
    fn solve(
        &self,
        params: &ParameterSet,
        initial: &InitialCondition,
        grid: &TimeGrid,
    ) -> Result<Trajectory, IntegrationError>;
}

/// Solves the Lorenz system with the adaptive Dormand-Prince integrator,
/// sampling the dense-output interpolant at exactly the caller's grid.
#[derive(Debug, Clone)]
pub struct LorenzSolver {
    options: Dopri5Options,
}

impl LorenzSolver {
    pub fn new(options: Dopri5Options) -> Self {
        Self { options }
    }
}

impl Default for LorenzSolver {
    fn default() -> Self {
        Self::new(Dopri5Options::default())
    }
}

impl TrajectorySolver for LorenzSolver {
    fn solve(
        &self,
        params: &ParameterSet,
        initial: &InitialCondition,
        grid: &TimeGrid,
    ) -> Result<Trajectory, IntegrationError> {
        dopri5::integrate(
            |_t, state| lorenz_field(params, state),
            initial.0,
            grid,
            &self.options,
        )
    }
}

#[cfg(test)]
mod tests;
