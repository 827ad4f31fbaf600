mod config;

use anyhow::Context;
use clap::{App, Arg};
use config::{Config, OutputFormat};
use satsolver::{Bruteforce, SATSolution, SatisfactionSolver, Solver, CNF};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status for a satisfiable formula with `--return-code`
const EXIT_SAT: i32 = 10;
/// Exit status for an unsatisfiable formula with `--return-code`
const EXIT_UNSAT: i32 = 20;
const EXIT_FAILURE: i32 = 1;

fn make_config() -> Config {
    let matches = App::new("satsolver")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("A tool to satisfy all your desires (or prove they are impossible)")
        .arg(
            Arg::with_name("input")
                .required(true)
                .index(1)
                .help("Formula in DIMACS CNF format"),
        )
        .arg(
            Arg::with_name("output")
                .required(true)
                .index(2)
                .help("File the solution is written to"),
        )
        .arg(
            Arg::with_name("algorithm")
                .long("algorithm")
                .value_name("ALGORITHM")
                .help("SAT solving algorithm")
                .takes_value(true)
                .possible_values(&["bruteforce", "dpll"])
                .default_value("dpll"),
        )
        .arg(
            Arg::with_name("branching")
                .long("branching")
                .help("DPLL branching strategy")
                .takes_value(true)
                .possible_values(&["naive", "DLIS", "DLCS", "MOM", "Jeroslaw-Wang"])
                .default_value("DLCS"),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .help("Output format of the solution")
                .takes_value(true)
                .possible_values(&["line", "dimacs"])
                .default_value("line"),
        )
        .arg(
            Arg::with_name("return_code")
                .long("return-code")
                .short("r")
                .help("Will return 10 if satisfiable and 20 if not (useful for scripting)")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Verbosity level (-v, -vv, -vvv)"),
        )
        .get_matches();

    let solver: Box<dyn Solver> = match matches.value_of("algorithm") {
        Some("bruteforce") => Box::new(Bruteforce),
        Some("dpll") => match matches.value_of("branching") {
            Some("naive") => Box::new(SatisfactionSolver::new(satsolver::NaiveBranching)),
            Some("DLIS") => Box::new(SatisfactionSolver::new(satsolver::DLIS)),
            Some("DLCS") => Box::new(SatisfactionSolver::new(satsolver::DLCS)),
            Some("MOM") => Box::new(SatisfactionSolver::new(satsolver::MOM)),
            Some("Jeroslaw-Wang") => Box::new(SatisfactionSolver::new(satsolver::JeroslawWang)),
            _ => unreachable!(), // already handled by clap
        },
        _ => unreachable!(), // already handled by clap
    };

    let format = match matches.value_of("format") {
        Some("dimacs") => OutputFormat::Dimacs,
        _ => OutputFormat::Line,
    };

    Config {
        // both are required, clap exits before reaching this point otherwise
        input: matches.value_of("input").map(PathBuf::from).unwrap_or_default(),
        output: matches.value_of("output").map(PathBuf::from).unwrap_or_default(),
        format,
        return_code: matches.is_present("return_code"),
        verbosity: matches.occurrences_of("verbose"),
        solver,
    }
}

/// `RUST_LOG` wins over `-v` when it is set
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads, solves and writes. The encoded solution is complete before the
/// output file is touched.
fn run(config: &Config) -> anyhow::Result<SATSolution> {
    let formula = CNF::from_file(&config.input)
        .with_context(|| format!("cannot read formula from {}", config.input.display()))?;
    info!(clauses = formula.len(), variables = formula.num_variables, "formula loaded");

    let start = Instant::now();
    let solution = config.solver.solve(&formula);
    info!(duration = ?start.elapsed(), sat = solution.is_sat(), "solved");

    let encoded = config.format.encode(&solution);
    std::fs::write(&config.output, encoded)
        .with_context(|| format!("cannot write solution to {}", config.output.display()))?;

    Ok(solution)
}

fn main() {
    let config = make_config();
    init_logging(config.verbosity);

    match run(&config) {
        Ok(solution) if config.return_code => {
            exit(if solution.is_sat() { EXIT_SAT } else { EXIT_UNSAT })
        }
        Ok(_) => (),
        Err(error) => {
            eprintln!("error: {:#}", error);
            exit(EXIT_FAILURE)
        }
    }
}
