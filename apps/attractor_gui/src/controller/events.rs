//! Parameter-edit events flowing from the input widgets to the controller.

use std::ops::RangeInclusive;

use lorenz_core::domain::{BETA_RANGE, RHO_RANGE, SIGMA_RANGE};

/// Names one of the three Lorenz parameters a slider is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamId {
    Sigma,
    Rho,
    Beta,
}

impl ParamId {
    pub const ALL: [ParamId; 3] = [ParamId::Sigma, ParamId::Rho, ParamId::Beta];

    pub fn label(self) -> &'static str {
        match self {
            ParamId::Sigma => "σ (sigma)",
            ParamId::Rho => "ρ (rho)",
            ParamId::Beta => "β (beta)",
        }
    }

    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            ParamId::Sigma => SIGMA_RANGE,
            ParamId::Rho => RHO_RANGE,
            ParamId::Beta => BETA_RANGE,
        }
    }
}

/// What a single parameter edit did to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Solve succeeded; geometry and title were replaced.
    Applied,
    /// Value was outside the parameter's bounds; nothing changed and no
    /// solve ran.
    Rejected,
    /// The integrator failed; the previous display is retained unchanged.
    SolveFailed,
}
