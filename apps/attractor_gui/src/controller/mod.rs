//! Controller layer: owns the parameter set and display state, and runs the
//! synchronous recompute-and-redraw loop on each slider edit.

pub mod events;

use std::time::Instant;

use lorenz_core::domain::{InitialCondition, ParameterSet, TimeGrid, Trajectory};
use lorenz_core::error::IntegrationError;
use lorenz_core::TrajectorySolver;

use self::events::{EditOutcome, ParamId};

/// What the canvas shows: the latest successfully solved trajectory and the
/// title rendering the parameters it was solved with. Always reflects a
/// completed solve, never a partial one.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub trajectory: Trajectory,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Solving,
}

pub struct AttractorController {
    solver: Box<dyn TrajectorySolver>,
    params: ParameterSet,
    initial: InitialCondition,
    grid: TimeGrid,
    display: DisplayState,
    phase: Phase,
}

impl AttractorController {
    /// Seeds the display with one solve of the starting parameters. A
    /// failure here is fatal; there is nothing sensible to show instead.
    pub fn new(
        solver: Box<dyn TrajectorySolver>,
        params: ParameterSet,
        initial: InitialCondition,
        grid: TimeGrid,
    ) -> Result<Self, IntegrationError> {
        let trajectory = solver.solve(&params, &initial, &grid)?;
        let title = title_for(&params);
        Ok(Self {
            solver,
            params,
            initial,
            grid,
            display: DisplayState { trajectory, title },
            phase: Phase::Idle,
        })
    }

    pub fn params(&self) -> ParameterSet {
        self.params
    }

    pub fn param(&self, which: ParamId) -> f64 {
        match which {
            ParamId::Sigma => self.params.sigma,
            ParamId::Rho => self.params.rho,
            ParamId::Beta => self.params.beta,
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// True outside of a solve. With one thread of control this is always
    /// true from the UI's point of view; edits re-enter only after the
    /// previous one completed.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Handles one parameter edit from the widgets. Widget ranges already
    /// clamp, but the bound is re-checked here rather than trusted.
    ///
    /// Edits are processed strictly in arrival order and each one blocks
    /// until its solve finishes; rapid slider drags therefore solve every
    /// intermediate value rather than only the last.
    pub fn on_parameter_changed(&mut self, which: ParamId, value: f64) -> EditOutcome {
        if !value.is_finite() || !which.range().contains(&value) {
            tracing::warn!(
                param = which.label(),
                value,
                "rejected out-of-range parameter edit"
            );
            return EditOutcome::Rejected;
        }

        match which {
            ParamId::Sigma => self.params.sigma = value,
            ParamId::Rho => self.params.rho = value,
            ParamId::Beta => self.params.beta = value,
        }

        self.phase = Phase::Solving;
        let started = Instant::now();
        let result = self.solver.solve(&self.params, &self.initial, &self.grid);
        self.phase = Phase::Idle;

        match result {
            Ok(trajectory) => {
                self.display = DisplayState {
                    trajectory,
                    title: title_for(&self.params),
                };
                tracing::debug!(
                    param = which.label(),
                    value,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "trajectory recomputed"
                );
                EditOutcome::Applied
            }
            Err(err) => {
                // Silent degrade: keep showing the last good trajectory and
                // its title untouched.
                tracing::error!(
                    param = which.label(),
                    value,
                    error = %err,
                    "integration failed; previous trajectory retained"
                );
                EditOutcome::SolveFailed
            }
        }
    }
}

fn title_for(params: &ParameterSet) -> String {
    format!(
        "Lorenz Attractor  σ={:.2}, ρ={:.2}, β={:.2}",
        params.sigma, params.rho, params.beta
    )
}
