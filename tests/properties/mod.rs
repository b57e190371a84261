//! Properties every solve should satisfy, checked on a collection of feasible, bounded problems.
use approx::assert_abs_diff_eq;

use twophase::{ConstraintType, GeneralForm, Objective, Settings, SettingsBuilder, VariableSign};
use twophase::algorithm::two_phase::{phase_one, phase_two};
use twophase::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use twophase::algorithm::two_phase::tableau::Tableau;
use twophase::data::number_types::tolerance::{EPSILON, Tolerance};

fn problems() -> Vec<GeneralForm<f64>> {
    use ConstraintType::{Equal, Greater, Less};
    use VariableSign::{Free, NonNegative, NonPositive};

    vec![
        GeneralForm::new(
            Objective::Maximize,
            vec![vec![0.4, 0.5, 0.0], vec![0.3, 0.1, 2.7], vec![0.5, 0.5, 6.0], vec![0.6, 0.4, 6.0]],
            vec![NonNegative; 2],
            vec![Less; 3],
        ),
        GeneralForm::new(
            Objective::Minimize,
            vec![vec![0.4, 0.5, 0.0], vec![0.3, 0.1, 2.7], vec![0.5, 0.5, 6.0], vec![0.6, 0.4, 6.0]],
            vec![NonNegative; 2],
            vec![Less, Equal, Greater],
        ),
        GeneralForm::new(
            Objective::Minimize,
            vec![vec![5.0, 3.0, 0.0], vec![1.0, 2.0, 3.0], vec![2.0, 1.0, 3.0], vec![2.0, 0.0, 3.0]],
            vec![NonNegative; 2],
            vec![Greater; 3],
        ),
        GeneralForm::new(
            Objective::Maximize,
            vec![
                vec![1.0, -1.0, 1.0, 0.0],
                vec![2.0, -1.0, 2.0, 4.0],
                vec![2.0, -3.0, 1.0, -5.0],
                vec![-1.0, 1.0, -2.0, -1.0],
            ],
            vec![NonNegative; 3],
            vec![Less; 3],
        ),
        GeneralForm::new(
            Objective::Maximize,
            vec![vec![2.0, -1.0, 3.0, 0.0], vec![1.0, 1.0, 1.0, 4.0], vec![1.0, -1.0, 0.0, 1.0]],
            vec![NonNegative, Free, NonPositive],
            vec![Less, Equal],
        ),
        GeneralForm::new(
            Objective::Minimize,
            vec![vec![1.0, 1.0, 0.0], vec![1.0, 1.0, 2.0], vec![2.0, 2.0, 4.0]],
            vec![NonNegative; 2],
            vec![Equal; 2],
        ),
    ]
    .into_iter()
    .map(Result::unwrap)
    .collect()
}

/// Run both phases by hand, returning the final tableau.
fn optimal_tableau(problem: &GeneralForm<f64>) -> Tableau<f64> {
    let settings = Settings::default();
    let (mut tableau, _, auxiliary_columns) = problem.standardize(settings.tolerance()).unwrap().into_parts();

    if !auxiliary_columns.is_empty() {
        phase_one::primal::<_, FirstProfitable>(&mut tableau, &auxiliary_columns, &settings).unwrap();
    }
    phase_two::primal::<_, FirstProfitable>(&mut tableau, &settings).unwrap();

    tableau
}

#[test]
fn no_negative_reduced_cost_at_optimum() {
    for problem in problems() {
        let tableau = optimal_tableau(&problem);
        assert!((0..tableau.nr_columns()).all(|j| tableau.relative_cost(j) >= -EPSILON));
    }
}

#[test]
fn solution_is_feasible() {
    for problem in problems() {
        let solution = problem.solve(&Settings::default()).unwrap();
        assert!(problem.is_feasible(solution.values(), Tolerance::new(1e-6)), "{}", problem);
    }
}

#[test]
fn objective_value_is_consistent() {
    for problem in problems() {
        let solution = problem.solve(&Settings::default()).unwrap();
        assert_abs_diff_eq!(problem.objective_value(solution.values()), solution.objective_value(), epsilon = 1e-6);
    }
}

#[test]
fn phase_one_hands_over_a_canonical_tableau() {
    for problem in problems() {
        let (mut tableau, _, auxiliary_columns) = problem.standardize(Tolerance::default()).unwrap().into_parts();
        if auxiliary_columns.is_empty() {
            continue;
        }

        phase_one::primal::<_, FirstProfitable>(&mut tableau, &auxiliary_columns, &Settings::default()).unwrap();

        assert!(tableau.check_canonical().is_ok());
        for &j in &auxiliary_columns {
            assert!(!tableau.is_in_basis(j));
            assert_eq!(tableau.relative_cost(j), 0.0);
            assert!((0..tableau.nr_rows()).all(|i| tableau.generate_element(i, j) == 0.0));
        }
        assert!((0..tableau.nr_rows()).all(|i| tableau.constraint_value(i) >= -EPSILON));
    }
}

#[test]
fn solving_an_optimal_tableau_changes_nothing() {
    let no_pivots = SettingsBuilder::default().max_iterations(0).build().unwrap();

    for problem in problems() {
        let mut tableau = optimal_tableau(&problem);
        let before = tableau.clone();

        let first = phase_two::primal::<_, FirstProfitable>(&mut tableau, &no_pivots).unwrap();
        let second = phase_two::primal::<_, FirstProfitable>(&mut tableau, &no_pivots).unwrap();
        assert_eq!(first, second);
        assert_eq!(tableau, before);
    }
}
