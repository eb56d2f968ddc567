use crate::domain::{InitialCondition, ParameterSet, TimeGrid};
use crate::{LorenzSolver, TrajectorySolver};

fn default_grid() -> TimeGrid {
    TimeGrid::linspace(0.0, 50.0, 5000).expect("default grid is valid")
}

#[test]
fn default_parameters_yield_full_length_finite_trajectory() {
    let solver = LorenzSolver::default();
    let grid = default_grid();
    let initial = InitialCondition::default();

    let trajectory = solver
        .solve(&ParameterSet::default(), &initial, &grid)
        .expect("canonical chaotic regime integrates");

    assert_eq!(trajectory.x.len(), grid.len());
    assert_eq!(trajectory.y.len(), grid.len());
    assert_eq!(trajectory.z.len(), grid.len());
    assert!(trajectory.is_finite());

    // The t=0 sample is the initial condition itself, bit-exact.
    assert_eq!(trajectory.x[0], initial.0[0]);
    assert_eq!(trajectory.y[0], initial.0[1]);
    assert_eq!(trajectory.z[0], initial.0[2]);
}

#[test]
fn identical_inputs_produce_identical_trajectories() {
    let solver = LorenzSolver::default();
    let grid = default_grid();
    let params = ParameterSet::default();
    let initial = InitialCondition::default();

    let first = solver.solve(&params, &initial, &grid).expect("solves");
    let second = solver.solve(&params, &initial, &grid).expect("solves");

    assert_eq!(first, second);
}

#[test]
fn minimum_bound_parameters_decay_without_blowup() {
    let solver = LorenzSolver::default();
    let grid = default_grid();
    let params = ParameterSet {
        sigma: 0.1,
        rho: 0.1,
        beta: 0.1,
    };

    let trajectory = solver
        .solve(&params, &InitialCondition::default(), &grid)
        .expect("subcritical regime integrates");

    assert!(trajectory.is_finite());

    // rho < 1 makes the origin attracting; by t=50 the state is well inside
    // the unit ball.
    let last = trajectory.len() - 1;
    let norm = (trajectory.x[last].powi(2)
        + trajectory.y[last].powi(2)
        + trajectory.z[last].powi(2))
    .sqrt();
    assert!(norm < 1.0, "expected decay toward the origin, got norm {norm}");
}

#[test]
fn solver_conforms_to_an_uneven_caller_grid() {
    let solver = LorenzSolver::default();
    let grid = TimeGrid::new(vec![0.0, 0.013, 0.4, 1.0, 2.5, 2.6, 7.0]).expect("valid grid");

    let trajectory = solver
        .solve(
            &ParameterSet::default(),
            &InitialCondition::default(),
            &grid,
        )
        .expect("solves");

    assert_eq!(trajectory.len(), grid.len());
    assert!(trajectory.is_finite());
}
