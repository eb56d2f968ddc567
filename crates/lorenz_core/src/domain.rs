//! Domain types shared between the solver and the interactive controller.

use std::ops::RangeInclusive;

use crate::error::GridError;

/// Bounds for each Lorenz parameter. Sliders and controller validation read
/// the same constants so the two can never disagree.
pub const SIGMA_RANGE: RangeInclusive<f64> = 0.1..=50.0;
pub const RHO_RANGE: RangeInclusive<f64> = 0.1..=100.0;
pub const BETA_RANGE: RangeInclusive<f64> = 0.1..=20.0;

/// The (sigma, rho, beta) triple controlling the Lorenz dynamics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for ParameterSet {
    /// The canonical chaotic regime: sigma=10, rho=28, beta=8/3.
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

/// Starting state (x0, y0, z0); fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialCondition(pub [f64; 3]);

impl Default for InitialCondition {
    fn default() -> Self {
        Self([0.0, 1.0, 1.05])
    }
}

/// Strictly increasing sample times. The integrator conforms its output to
/// this grid rather than choosing its own.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid(Vec<f64>);

impl TimeGrid {
    pub fn new(points: Vec<f64>) -> Result<Self, GridError> {
        if points.len() < 2 {
            return Err(GridError::TooFewPoints(points.len()));
        }
        for (index, pair) in points.windows(2).enumerate() {
            if !(pair[1] > pair[0]) {
                return Err(GridError::NotIncreasing { index: index + 1 });
            }
        }
        Ok(Self(points))
    }

    /// `samples` evenly spaced points over `[start, end]`, endpoints included.
    pub fn linspace(start: f64, end: f64, samples: usize) -> Result<Self, GridError> {
        if samples < 2 {
            return Err(GridError::TooFewPoints(samples));
        }
        let step = (end - start) / (samples - 1) as f64;
        let points = (0..samples).map(|i| start + step * i as f64).collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn span(&self) -> (f64, f64) {
        (self.0[0], self.0[self.0.len() - 1])
    }
}

/// Sampled solution: three coordinate sequences aligned index-for-index with
/// the grid that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, state: [f64; 3]) {
        self.x.push(state[0]);
        self.y.push(state[1]);
        self.z.push(state[2]);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().all(|v| v.is_finite())
            && self.y.iter().all(|v| v.is_finite())
            && self.z.iter().all(|v| v.is_finite())
    }
}
