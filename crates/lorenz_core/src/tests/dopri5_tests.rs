use crate::domain::{InitialCondition, ParameterSet, TimeGrid};
use crate::dopri5::{integrate, Dopri5Options};
use crate::error::{GridError, IntegrationError};
use crate::{LorenzSolver, TrajectorySolver};

#[test]
fn exponential_decay_matches_closed_form() {
    let grid = TimeGrid::linspace(0.0, 5.0, 101).expect("valid grid");
    let y0 = [1.0, 2.0, -0.5];

    let trajectory = integrate(
        |_t, y| [-y[0], -y[1], -y[2]],
        y0,
        &grid,
        &Dopri5Options::default(),
    )
    .expect("linear decay integrates");

    for (i, &t) in grid.points().iter().enumerate() {
        let decay = (-t).exp();
        assert!((trajectory.x[i] - y0[0] * decay).abs() < 1e-5);
        assert!((trajectory.y[i] - y0[1] * decay).abs() < 1e-5);
        assert!((trajectory.z[i] - y0[2] * decay).abs() < 1e-5);
    }
}

#[test]
fn harmonic_oscillator_matches_closed_form() {
    let grid = TimeGrid::linspace(0.0, 10.0, 201).expect("valid grid");

    let trajectory = integrate(
        |_t, y| [y[1], -y[0], 0.0],
        [1.0, 0.0, 0.0],
        &grid,
        &Dopri5Options::default(),
    )
    .expect("oscillator integrates");

    for (i, &t) in grid.points().iter().enumerate() {
        assert!(
            (trajectory.x[i] - t.cos()).abs() < 1e-4,
            "x({t}) drifted from cos"
        );
        assert!(
            (trajectory.y[i] + t.sin()).abs() < 1e-4,
            "x'({t}) drifted from -sin"
        );
    }
}

#[test]
fn dense_output_is_sampled_between_internal_steps() {
    // A grid far finer than any accepted step forces interpolation rather
    // than stepping to each output point.
    let grid = TimeGrid::linspace(0.0, 1.0, 10_001).expect("valid grid");

    let trajectory = integrate(
        |_t, y| [-y[0], -y[1], -y[2]],
        [1.0, 1.0, 1.0],
        &grid,
        &Dopri5Options::default(),
    )
    .expect("integrates");

    assert_eq!(trajectory.len(), grid.len());
    for (i, &t) in grid.points().iter().enumerate() {
        assert!((trajectory.x[i] - (-t).exp()).abs() < 1e-6);
    }
}

#[test]
fn exhausting_the_step_budget_is_an_error() {
    let grid = TimeGrid::linspace(0.0, 50.0, 5000).expect("valid grid");
    let options = Dopri5Options {
        max_steps: 5,
        ..Dopri5Options::default()
    };
    let solver = LorenzSolver::new(options);

    let result = solver.solve(
        &ParameterSet::default(),
        &InitialCondition::default(),
        &grid,
    );

    assert!(matches!(
        result,
        Err(IntegrationError::StepBudgetExhausted { max_steps: 5, .. })
    ));
}

#[test]
fn grid_construction_rejects_degenerate_inputs() {
    assert_eq!(TimeGrid::new(vec![]), Err(GridError::TooFewPoints(0)));
    assert_eq!(TimeGrid::new(vec![0.0]), Err(GridError::TooFewPoints(1)));
    assert_eq!(
        TimeGrid::new(vec![0.0, 0.0, 1.0]),
        Err(GridError::NotIncreasing { index: 1 })
    );
    assert_eq!(
        TimeGrid::new(vec![0.0, 1.0, 0.5]),
        Err(GridError::NotIncreasing { index: 2 })
    );
    assert!(TimeGrid::linspace(0.0, 1.0, 1).is_err());
}
