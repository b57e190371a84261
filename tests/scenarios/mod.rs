//! Small problems with a known outcome.
use approx::assert_relative_eq;

use twophase::{
    solve, CanonicalForm, ConstraintType, GeneralForm, Objective, Settings, SettingsBuilder,
    SolveError, VariableSign,
};
use twophase::algorithm::two_phase::tableau::Tableau;
use twophase::data::number_types::tolerance::Tolerance;

fn nonnegative(
    objective: Objective,
    augmented: Vec<Vec<f64>>,
    constraint_types: Vec<ConstraintType>,
) -> GeneralForm<f64> {
    let nr_variables = augmented[0].len() - 1;
    GeneralForm::new(objective, augmented, vec![VariableSign::NonNegative; nr_variables], constraint_types)
        .unwrap()
}

fn assert_values(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (&actual, &expected) in actual.iter().zip(expected) {
        assert_relative_eq!(actual, expected, epsilon = 1e-9);
    }
}

/// All constraints are `<=`, so no first phase is needed.
#[test]
fn maximize_without_auxiliary() {
    let problem = nonnegative(
        Objective::Maximize,
        vec![
            vec![0.4, 0.5, 0.0],
            vec![0.3, 0.1, 2.7],
            vec![0.5, 0.5, 6.0],
            vec![0.6, 0.4, 6.0],
        ],
        vec![ConstraintType::Less; 3],
    );

    let solution = problem.solve(&Settings::default()).unwrap();
    assert_values(solution.values(), &[0.0, 12.0]);
    assert_relative_eq!(solution.objective_value(), 6.0, epsilon = 1e-9);
}

/// The same data, as a tableau in canonical form provided directly.
#[test]
fn tableau_without_auxiliary() {
    let tableau = Tableau::from_data(
        vec![
            vec![-0.4, -0.5, 0.0, 0.0, 0.0, 0.0],
            vec![0.3, 0.1, 1.0, 0.0, 0.0, 2.7],
            vec![0.5, 0.5, 0.0, 1.0, 0.0, 6.0],
            vec![0.6, 0.4, 0.0, 0.0, 1.0, 6.0],
        ],
        vec![2, 3, 4],
        Tolerance::default(),
    ).unwrap();
    let problem = CanonicalForm::with_identity_variables(tableau, 2, vec![]).unwrap();

    let solution = solve(problem, &Settings::default()).unwrap();
    assert_values(solution.values(), &[0.0, 12.0]);
    assert_relative_eq!(solution.objective_value(), -6.0, epsilon = 1e-9);
}

#[test]
fn all_greater() {
    let problem = nonnegative(
        Objective::Minimize,
        vec![
            vec![5.0, 3.0, 0.0],
            vec![1.0, 2.0, 3.0],
            vec![2.0, 1.0, 3.0],
            vec![2.0, 0.0, 3.0],
        ],
        vec![ConstraintType::Greater; 3],
    );

    let solution = problem.solve(&Settings::default()).unwrap();
    assert_values(solution.values(), &[1.5, 0.75]);
    assert_relative_eq!(solution.objective_value(), 9.75, epsilon = 1e-9);
}

#[test]
fn one_of_each_constraint_type() {
    let problem = nonnegative(
        Objective::Minimize,
        vec![
            vec![0.4, 0.5, 0.0],
            vec![0.3, 0.1, 2.7],
            vec![0.5, 0.5, 6.0],
            vec![0.6, 0.4, 6.0],
        ],
        vec![ConstraintType::Less, ConstraintType::Equal, ConstraintType::Greater],
    );

    let solution = problem.solve(&Settings::default()).unwrap();
    assert_values(solution.values(), &[7.5, 4.5]);
    assert_relative_eq!(solution.objective_value(), 5.25, epsilon = 1e-9);
}

#[test]
fn infeasible() {
    let problem = nonnegative(
        Objective::Minimize,
        vec![
            vec![1.0, 1.0, 0.0],
            vec![1.0, 1.0, -1.0],
        ],
        vec![ConstraintType::Less],
    );

    match problem.solve(&Settings::default()) {
        Err(SolveError::Infeasible { cost }) => assert_relative_eq!(cost, 1.0),
        other => panic!("expected infeasibility, got {:?}", other),
    }
}

#[test]
fn unbounded() {
    let problem = nonnegative(
        Objective::Maximize,
        vec![
            vec![1.0, 0.0, 0.0],
            vec![1.0, -1.0, 1.0],
        ],
        vec![ConstraintType::Less],
    );

    assert!(matches!(problem.solve(&Settings::default()), Err(SolveError::Unbounded { .. })));
}

#[test]
fn unbounded_tableau() {
    let tableau = Tableau::from_data(
        vec![
            vec![-1.0, 0.0, 0.0],
            vec![-1.0, 1.0, 2.0],
        ],
        vec![1],
        Tolerance::default(),
    ).unwrap();
    let problem = CanonicalForm::with_identity_variables(tableau, 1, vec![]).unwrap();

    assert_eq!(solve(problem, &Settings::default()), Err(SolveError::Unbounded { column: 0 }));
}

#[test]
fn three_variables() {
    let problem = nonnegative(
        Objective::Maximize,
        vec![
            vec![3.0, 1.0, 2.0, 0.0],
            vec![1.0, 1.0, 3.0, 30.0],
            vec![2.0, 2.0, 5.0, 24.0],
            vec![4.0, 1.0, 2.0, 36.0],
        ],
        vec![ConstraintType::Less; 3],
    );

    let solution = problem.solve(&Settings::default()).unwrap();
    assert_values(solution.values(), &[8.0, 4.0, 0.0]);
    assert_relative_eq!(solution.objective_value(), 28.0, epsilon = 1e-9);
}

#[test]
fn negative_right_hand_sides() {
    let problem = nonnegative(
        Objective::Maximize,
        vec![
            vec![1.0, -1.0, 1.0, 0.0],
            vec![2.0, -1.0, 2.0, 4.0],
            vec![2.0, -3.0, 1.0, -5.0],
            vec![-1.0, 1.0, -2.0, -1.0],
        ],
        vec![ConstraintType::Less; 3],
    );

    let solution = problem.solve(&Settings::default()).unwrap();
    assert_values(solution.values(), &[0.0, 2.8, 3.4]);
    assert_relative_eq!(solution.objective_value(), 0.6, epsilon = 1e-9);
}

#[test]
fn redundant_equalities() {
    let problem = nonnegative(
        Objective::Minimize,
        vec![
            vec![1.0, 1.0, 0.0],
            vec![1.0, 1.0, 2.0],
            vec![2.0, 2.0, 4.0],
        ],
        vec![ConstraintType::Equal; 2],
    );

    let solution = problem.solve(&Settings::default()).unwrap();
    assert_values(solution.values(), &[2.0, 0.0]);
    assert_relative_eq!(solution.objective_value(), 2.0, epsilon = 1e-9);
}

#[test]
fn single_precision() {
    let problem = GeneralForm::new(
        Objective::Minimize,
        vec![
            vec![5f32, 3f32, 0f32],
            vec![1f32, 2f32, 3f32],
            vec![2f32, 1f32, 3f32],
            vec![2f32, 0f32, 3f32],
        ],
        vec![VariableSign::NonNegative; 2],
        vec![ConstraintType::Greater; 3],
    ).unwrap();

    // The default tolerance is below the precision of f32
    let settings = SettingsBuilder::default().tolerance(1e-5f32).build().unwrap();
    let solution = problem.solve(&settings).unwrap();
    assert_relative_eq!(solution.objective_value(), 9.75f32, epsilon = 1e-4);
}
