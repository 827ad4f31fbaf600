use std::fmt;
use std::iter::FromIterator;
use std::path::Path;
use itertools::Itertools;

use crate::error::{Error, Result};

/// Type used for referencing logical variables
pub type VarId = usize;

/// Representation of logical formulae in CNF form
/// (conjunction of clauses)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CNF {
    /// Vector of inner clauses
    pub clauses: Vec<CNFClause>,
    /// Declared number of variables, identifiers range over `1..=num_variables`
    pub num_variables: usize,
}

/// Representation of a clause (disjunction of variables)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CNFClause {
    /// Vector of inner variables
    pub vars: Vec<CNFVar>,
}

/// Logical variable
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct CNFVar {
    /// Identifier of a variable
    pub id: VarId,
    /// Variable is negated iff `sign == false`
    pub sign: bool,
}

impl CNF {
    /// Builds a formula from clauses given as signed integers.
    /// The absolute value is the variable identifier, the sign its polarity.
    /// Zeros are terminators and are skipped.
    pub fn from_lists<C, L>(clauses: C, num_variables: usize) -> CNF
    where
        C: IntoIterator<Item = L>,
        L: IntoIterator<Item = i32>,
    {
        let clauses: Vec<CNFClause> = clauses.into_iter()
            .map(|clause| clause.into_iter()
                .filter(|&literal| literal != 0)
                .map(CNFVar::from_i32)
                .collect())
            .collect();
        let num_variables = largest_id(&clauses).max(num_variables);

        CNF { clauses, num_variables }
    }

    /// Returns number of clauses in the formula
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Prints formula in DIMACS compatible form
    pub fn to_dimacs(&self) -> String {
        let mut out = format!("p cnf {} {}\n", self.num_variables, self.clauses.len());

        for clause in &self.clauses {
            for var in &clause.vars {
                out.push_str(&var.to_i32().to_string());
                out.push(' ');
            }
            out.push_str("0\n");
        }
        out
    }

    /// Parses the line oriented DIMACS dialect: one clause per line,
    /// `c` comments, a `p cnf <vars> <clauses>` header and an optional
    /// `%` trailer which ends the input.
    pub fn from_dimacs(input: &str) -> Result<CNF> {
        let mut declared: Option<usize> = None;
        let mut clauses = Vec::new();

        for (index, line) in input.lines().enumerate() {
            let number = index + 1;
            let line = line.trim();

            if line.is_empty() || line.starts_with('c') {
                continue;
            }
            if line.starts_with('%') {
                break;
            }
            if line.starts_with('p') {
                let count = line.split_whitespace()
                    .nth(2)
                    .ok_or_else(|| Error::parse(number, "problem line lacks the variable count"))?;
                let count = count.parse()
                    .map_err(|_| Error::parse(number, format!("invalid variable count `{}`", count)))?;
                declared = Some(count);
                continue;
            }

            clauses.push(parse_clause(line, number, declared)?);
        }

        // clauses ahead of the problem line are not checked against it
        let largest = largest_id(&clauses);
        let num_variables = declared.map_or(largest, |count| count.max(largest));

        Ok(CNF { clauses, num_variables })
    }

    /// Reads and parses a formula file
    pub fn from_file(path: impl AsRef<Path>) -> Result<CNF> {
        let input = std::fs::read_to_string(path)?;
        CNF::from_dimacs(&input)
    }
}

fn largest_id(clauses: &[CNFClause]) -> VarId {
    clauses.iter()
        .flat_map(|clause| clause.vars.iter().map(CNFVar::id))
        .max()
        .unwrap_or(0)
}

fn parse_clause(line: &str, number: usize, declared: Option<usize>) -> Result<CNFClause> {
    let mut literals = line.split_whitespace()
        .map(|token| token.parse::<i32>()
            .map_err(|_| Error::parse(number, format!("invalid literal `{}`", token))))
        .collect::<Result<Vec<i32>>>()?;

    // terminator
    if literals.last() == Some(&0) {
        literals.pop();
    }

    literals.into_iter()
        .map(|literal| {
            if literal == 0 {
                return Err(Error::parse(number, "literal 0 before the end of the clause"));
            }
            let var = CNFVar::from_i32(literal);
            match declared {
                Some(count) if var.id > count => Err(Error::parse(number,
                    format!("variable {} exceeds the declared count {}", var.id, count))),
                _ => Ok(var),
            }
        })
        .collect()
}

impl CNFClause {
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<CNFVar> for CNFClause {
    fn from_iter<I: IntoIterator<Item=CNFVar>>(iter: I) -> Self {
        CNFClause { vars: iter.into_iter().collect() }
    }
}

impl CNFVar {
    /// Creates a positive variable with given identifier
    pub fn pos(id: VarId) -> CNFVar {
        CNFVar { id, sign: true }
    }

    /// Creates a negative variable with given identifier
    pub fn neg(id: VarId) -> CNFVar {
        CNFVar { id, sign: false }
    }

    /// Reads a signed literal, `-3` is the negation of variable 3.
    pub fn from_i32(literal: i32) -> CNFVar {
        CNFVar { id: literal.unsigned_abs() as VarId, sign: literal > 0 }
    }

    /// Gets the identifier of a variable
    pub fn id(&self) -> VarId {
        self.id
    }

    /// Checks if the variable is positive
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Converts to signed integer. The absolute value indicates
    /// the identifier and sign states for positivity.
    ///
    /// **NOTE** it is not integer-overflow friendly.
    pub fn to_i32(&self) -> i32 {
        if self.sign {
            self.id as i32
        } else {
            -(self.id as i32)
        }
    }
}

impl std::ops::Neg for CNFVar {
    type Output = CNFVar;

    fn neg(self) -> Self::Output {
        CNFVar { id: self.id, sign: !self.sign }
    }
}

impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.clauses {
            writeln!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for CNFClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vars.iter().join(" \\/ "))
    }
}

impl fmt::Display for CNFVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i32())
    }
}
