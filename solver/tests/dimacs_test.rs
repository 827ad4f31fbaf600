use satsolver::{Bruteforce, Error, SATSolution, SatisfactionSolver, Solver, CNF, UNSAT_TOKEN};

fn parse_error_line(input: &str) -> Option<usize> {
    match CNF::from_dimacs(input) {
        Err(Error::Parse { line, .. }) => Some(line),
        _ => None,
    }
}

#[test]
fn parses_header_comments_and_clauses() {
    let input = "c an example\nc with two comment lines\np cnf 3 2\n1 -3 0\n2 3 -1 0\n";

    let cnf = CNF::from_dimacs(input).unwrap();

    assert_eq!(cnf, CNF::from_lists(vec![vec![1, -3], vec![2, 3, -1]], 3));
}

#[test]
fn declared_count_covers_unused_variables() {
    let cnf = CNF::from_dimacs("p cnf 5 1\n1 2 0\n").unwrap();

    assert_eq!(cnf.num_variables, 5);
    assert_eq!(cnf.len(), 1);
}

#[test]
fn count_without_header_is_largest_identifier() {
    let cnf = CNF::from_dimacs("1 -4 0\n2 0\n").unwrap();
    assert_eq!(cnf.num_variables, 4);
}

#[test]
fn clauses_before_header_widen_the_count() {
    let cnf = CNF::from_dimacs("3 0\np cnf 1 1\n").unwrap();

    assert_eq!(cnf.num_variables, 3);
    let expected = SATSolution::Satisfiable(vec![false, false, true]);
    assert_eq!(Bruteforce.solve(&cnf), expected);
    assert_eq!(SatisfactionSolver::dlcs().solve(&cnf), expected);
}

#[test]
fn skips_blank_lines_and_stops_at_trailer() {
    let input = "p cnf 2 2\n\n1 2 0\n   \n-1 0\n%\n0\n\n";

    let cnf = CNF::from_dimacs(input).unwrap();

    assert_eq!(cnf, CNF::from_lists(vec![vec![1, 2], vec![-1]], 2));
}

#[test]
fn terminator_is_optional() {
    let cnf = CNF::from_dimacs("p cnf 2 1\n1 -2\n").unwrap();
    assert_eq!(cnf, CNF::from_lists(vec![vec![1, -2]], 2));
}

#[test]
fn lone_terminator_is_an_empty_clause() {
    let cnf = CNF::from_dimacs("p cnf 1 2\n1 0\n0\n").unwrap();

    assert_eq!(cnf.clauses[1].len(), 0);
    assert_eq!(SatisfactionSolver::dlcs().solve(&cnf), SATSolution::Unsatisfiable);
}

#[test]
fn rejects_malformed_input() {
    assert_eq!(parse_error_line("p cnf\n1 0\n"), Some(1));
    assert_eq!(parse_error_line("p cnf many 1\n1 0\n"), Some(1));
    assert_eq!(parse_error_line("p cnf 2 1\n1 two 0\n"), Some(2));
    assert_eq!(parse_error_line("p cnf 2 1\n1 0 2 0\n"), Some(2));
    assert_eq!(parse_error_line("c\np cnf 2 1\n1 3 0\n"), Some(3));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = CNF::from_file("/nonexistent/formula.cnf");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn solution_line_lists_every_variable() {
    let solution = SATSolution::Satisfiable(vec![true, false, true]);
    assert_eq!(solution.to_line(), "1 -2 3");
    assert_eq!(SATSolution::Satisfiable(vec![]).to_line(), "");
}

#[test]
fn unsatisfiable_line_is_a_dedicated_token() {
    assert_eq!(SATSolution::Unsatisfiable.to_line(), UNSAT_TOKEN);
    assert_eq!(UNSAT_TOKEN, "UNSAT");
}

#[test]
fn competition_output() {
    assert_eq!(SATSolution::Unsatisfiable.to_dimacs(), "s UNSATISFIABLE\n");
    assert_eq!(
        SATSolution::Satisfiable(vec![true, false]).to_dimacs(),
        "s SATISFIABLE\nv 1 -2\nv 0\n"
    );

    let wide: SATSolution = std::iter::repeat(true).take(9).collect();
    assert_eq!(wide.to_dimacs(), "s SATISFIABLE\nv 1 2 3 4 5 6 7 8\nv 9\nv 0\n");
}

#[test]
fn solving_parsed_formula() {
    let input = "c implication chain\np cnf 3 3\n1 0\n-1 2 0\n-2 3 0\n";

    let cnf = CNF::from_dimacs(input).unwrap();

    assert_eq!(SatisfactionSolver::dlcs().solve(&cnf).to_line(), "1 2 3");
}

#[test]
fn formula_text_reads_back() {
    let cnf = CNF::from_lists(vec![vec![1, -2], vec![3]], 4);
    assert_eq!(CNF::from_dimacs(&cnf.to_dimacs()).unwrap(), cnf);
}
