use proptest::{
    prelude::*,
    collection::vec,
    bool::weighted,
};
use satsolver::{
    check_valuation, Bruteforce, BranchingStrategy, CNFClause, CNFVar, SATSolution, SatisfactionSolver, Solver, CNF,
    DLCS, DLIS, JeroslawWang, MOM, NaiveBranching,
};

const MAX_NUM_VARIABLES: usize = 6;
const MAX_NUM_LITERALS: usize = 4;
const MAX_NUM_CLAUSES: usize = 14;

fn formula(clauses: &[Vec<(usize, bool)>]) -> CNF {
    let lists = clauses.iter()
        .map(|clause| clause.iter()
            .map(|&(variable, sign)| if sign { variable as i32 } else { -(variable as i32) })
            .collect::<Vec<i32>>());
    CNF::from_lists(lists, MAX_NUM_VARIABLES)
}

/// Compares against exhaustive search and checks every returned model
fn agrees_with_bruteforce(strategy: impl BranchingStrategy + 'static, formula: &CNF) -> Result<(), TestCaseError> {
    let custom = SatisfactionSolver::new(strategy).solve(formula);
    let reference = Bruteforce.solve(formula);

    prop_assert_eq!(custom.is_sat(), reference.is_sat());
    if let SATSolution::Satisfiable(valuation) = &custom {
        prop_assert_eq!(valuation.len(), formula.num_variables);
        prop_assert!(check_valuation(formula, valuation), "{:?} does not satisfy\n{}", custom, formula);
    }
    Ok(())
}

fn solve(clauses: Vec<Vec<i32>>, num_variables: usize) -> SATSolution {
    SatisfactionSolver::dlcs().solve(&CNF::from_lists(clauses, num_variables))
}

proptest! {
    #[test]
    fn only_unit_clauses(signs in vec(weighted(0.5), 1..=MAX_NUM_VARIABLES)) {
        let clauses: Vec<Vec<i32>> = signs.iter()
            .enumerate()
            .map(|(variable, &sign)| {
                let id = variable as i32 + 1;
                vec![if sign { id } else { -id }]
            }).collect();

        let solution = solve(clauses, signs.len());
        prop_assert_eq!(solution, SATSolution::Satisfiable(signs));
    }

    #[test]
    fn dlcs_is_sound_and_complete(clauses in vec(vec((1..=MAX_NUM_VARIABLES, weighted(0.5)), 1..=MAX_NUM_LITERALS), 0..=MAX_NUM_CLAUSES)) {
        agrees_with_bruteforce(DLCS, &formula(&clauses))?;
    }

    #[test]
    fn dlis_is_sound_and_complete(clauses in vec(vec((1..=MAX_NUM_VARIABLES, weighted(0.5)), 1..=MAX_NUM_LITERALS), 0..=MAX_NUM_CLAUSES)) {
        agrees_with_bruteforce(DLIS, &formula(&clauses))?;
    }

    #[test]
    fn naive_is_sound_and_complete(clauses in vec(vec((1..=MAX_NUM_VARIABLES, weighted(0.5)), 1..=MAX_NUM_LITERALS), 0..=MAX_NUM_CLAUSES)) {
        agrees_with_bruteforce(NaiveBranching, &formula(&clauses))?;
    }

    #[test]
    fn mom_is_sound_and_complete(clauses in vec(vec((1..=MAX_NUM_VARIABLES, weighted(0.5)), 1..=MAX_NUM_LITERALS), 0..=MAX_NUM_CLAUSES)) {
        agrees_with_bruteforce(MOM, &formula(&clauses))?;
    }

    #[test]
    fn jeroslaw_wang_is_sound_and_complete(clauses in vec(vec((1..=MAX_NUM_VARIABLES, weighted(0.5)), 1..=MAX_NUM_LITERALS), 0..=MAX_NUM_CLAUSES)) {
        agrees_with_bruteforce(JeroslawWang, &formula(&clauses))?;
    }
}

#[test]
fn unit_clause_forces_implication() {
    let solution = solve(vec![vec![1], vec![-1, 2]], 2);
    assert_eq!(solution, SATSolution::Satisfiable(vec![true, true]));
}

#[test]
fn complementary_units_are_unsatisfiable() {
    assert_eq!(solve(vec![vec![1], vec![-1]], 1), SATSolution::Unsatisfiable);
}

#[test]
fn pure_literals_satisfy_single_clause() {
    assert_eq!(solve(vec![vec![1, 2]], 2), SATSolution::Satisfiable(vec![true, true]));
}

#[test]
fn empty_formula_is_satisfied_by_empty_valuation() {
    assert_eq!(solve(vec![], 0), SATSolution::Satisfiable(vec![]));
}

#[test]
fn all_sign_combinations_are_unsatisfiable() {
    let clauses = vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]];
    assert_eq!(solve(clauses.clone(), 2), SATSolution::Unsatisfiable);
    assert_eq!(SatisfactionSolver::new(NaiveBranching).solve(&CNF::from_lists(clauses, 2)), SATSolution::Unsatisfiable);
}

#[test]
fn empty_clause_is_unsatisfiable() {
    assert_eq!(solve(vec![vec![], vec![1]], 1), SATSolution::Unsatisfiable);
}

#[test]
fn unconstrained_variables_are_false() {
    assert_eq!(solve(vec![vec![2]], 4), SATSolution::Satisfiable(vec![false, true, false, false]));
}

#[test]
fn tautologies_constrain_nothing() {
    assert_eq!(solve(vec![vec![1, -1], vec![-2]], 2), SATSolution::Satisfiable(vec![false, false]));
}

#[test]
fn valuation_covers_variables_beyond_declared_count() {
    let solution = solve(vec![vec![3]], 1);
    assert_eq!(solution.valuation().map(Vec::len), Some(3));
}

#[test]
fn pigeonhole_three_into_two_is_unsatisfiable() {
    // p_ij: pigeon i in hole j, variable 2*(i-1)+j
    let var = |pigeon: i32, hole: i32| 2 * (pigeon - 1) + hole;
    let mut clauses: Vec<Vec<i32>> = (1..=3).map(|p| vec![var(p, 1), var(p, 2)]).collect();
    for hole in 1..=2 {
        for a in 1..=3 {
            for b in a + 1..=3 {
                clauses.push(vec![-var(a, hole), -var(b, hole)]);
            }
        }
    }
    assert_eq!(solve(clauses, 6), SATSolution::Unsatisfiable);
}

#[test]
fn chain_of_implications_needs_search() {
    // x1 xor x2, x2 xor x3, x3 xor x4 and x1 \/ x4
    let clauses = vec![
        vec![1, 2], vec![-1, -2],
        vec![2, 3], vec![-2, -3],
        vec![3, 4], vec![-3, -4],
        vec![1, 4],
    ];
    let cnf = CNF::from_lists(clauses, 4);
    let solution = SatisfactionSolver::dlcs().solve(&cnf);

    assert_eq!(solution, SATSolution::Satisfiable(vec![true, false, true, false]));
    assert!(check_valuation(&cnf, solution.valuation().unwrap()));
}

#[test]
fn variable_zero_satisfies_no_clause() {
    let cnf = CNF {
        clauses: vec![CNFClause { vars: vec![CNFVar::pos(0)] }],
        num_variables: 1,
    };

    assert!(!check_valuation(&cnf, &vec![true]));
    assert_eq!(Bruteforce.solve(&cnf), SATSolution::Unsatisfiable);
}

#[test]
fn bruteforce_returns_first_model_in_counting_order() {
    let cnf = CNF::from_lists(vec![vec![1, 2, 3], vec![-3], vec![-2, 1]], 3);
    assert_eq!(Bruteforce.solve(&cnf), SATSolution::Satisfiable(vec![true, false, false]));
}
