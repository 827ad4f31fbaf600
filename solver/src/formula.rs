use std::collections::BTreeMap;
use std::fmt;
use itertools::Itertools;

use crate::cnf::{CNFClause, CNFVar, VarId, CNF};
use crate::util::{HashMap, IndexSet};

/// Values assigned to variables so far, merged by the caller
pub type Assignment = HashMap<VarId, bool>;

/// A disjunction of literals with at most one literal per variable,
/// sorted by variable identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<CNFVar>,
}

impl Clause {
    /// Removes duplicated literals. Returns `None` for a tautology,
    /// i.e. a clause containing both `x` and `-x`.
    pub fn new(cnf_clause: &CNFClause) -> Option<Clause> {
        let mut literals = cnf_clause.vars.clone();
        literals.sort();
        literals.dedup();

        if literals.iter().tuple_windows().any(|(a, b)| a.id == b.id) {
            return None;
        }

        Some(Clause { literals })
    }

    pub fn literals(&self) -> &[CNFVar] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Polarity of `var` in this clause, if it occurs at all
    pub fn sign_of(&self, var: VarId) -> Option<bool> {
        self.position(var).ok().map(|index| self.literals[index].sign)
    }

    /// Resolves `var` away, returns whether it was present
    pub(crate) fn remove(&mut self, var: VarId) -> bool {
        match self.position(var) {
            Ok(index) => {
                self.literals.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    fn position(&self, var: VarId) -> Result<usize, usize> {
        self.literals.binary_search_by_key(&var, CNFVar::id)
    }
}

/// Number of live clauses a variable appears in, per polarity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occurrences {
    pub neg: usize,
    pub pos: usize,
}

impl Occurrences {
    pub fn total(&self) -> usize {
        self.neg + self.pos
    }

    pub fn count(&self, sign: bool) -> usize {
        if sign { self.pos } else { self.neg }
    }

    pub(crate) fn increment(&mut self, sign: bool) {
        if sign { self.pos += 1 } else { self.neg += 1 }
    }

    pub(crate) fn decrement(&mut self, sign: bool) {
        if sign { self.pos -= 1 } else { self.neg -= 1 }
    }
}

/// A CNF formula under simplification.
///
/// Every variable stored in the occurrence index appears in at least one
/// live clause and its counters match the live clauses exactly. Variables
/// which do not occur anymore are absent from the index. The index is
/// ordered by variable identifier.
///
/// Cloning copies every clause and the whole index, so a clone handed to
/// one branch of the search never observes mutations of another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    pub(crate) clauses: Vec<Clause>,
    pub(crate) occurrences: BTreeMap<VarId, Occurrences>,
    num_variables: usize,
}

impl Formula {
    pub fn new(cnf: &CNF) -> Formula {
        let clauses: IndexSet<Clause> = cnf.clauses.iter()
            .filter_map(Clause::new)
            .collect();
        let clauses: Vec<Clause> = clauses.into_iter().collect();

        let occurrences = count_occurrences(&clauses);
        let num_variables = occurrences.keys()
            .next_back()
            .map_or(cnf.num_variables, |&max| max.max(cnf.num_variables));

        Formula { clauses, occurrences, num_variables }
    }

    /// See [`CNF::from_lists`]
    pub fn from_lists<C, L>(clauses: C, num_variables: usize) -> Formula
    where
        C: IntoIterator<Item = L>,
        L: IntoIterator<Item = i32>,
    {
        Formula::new(&CNF::from_lists(clauses, num_variables))
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn occurrences(&self) -> &BTreeMap<VarId, Occurrences> {
        &self.occurrences
    }

    pub fn occurrences_of(&self, var: VarId) -> Option<Occurrences> {
        self.occurrences.get(&var).copied()
    }

    /// Declared number of variables of the formula this one was built from
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Number of live clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// No live clauses are left, every clause has been satisfied
    pub fn is_satisfied(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Recounts the occurrence index from scratch.
    /// Always equal to [`Formula::occurrences`].
    pub fn count_occurrences(&self) -> BTreeMap<VarId, Occurrences> {
        count_occurrences(&self.clauses)
    }
}

fn count_occurrences(clauses: &[Clause]) -> BTreeMap<VarId, Occurrences> {
    let mut occurrences: BTreeMap<VarId, Occurrences> = BTreeMap::new();
    for literal in clauses.iter().flat_map(Clause::literals) {
        occurrences.entry(literal.id)
            .or_default()
            .increment(literal.sign);
    }
    occurrences
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.literals.iter().join(" \\/ "))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clauses.iter().join(" /\\ "))
    }
}
