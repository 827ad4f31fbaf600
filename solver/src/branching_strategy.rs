use crate::cnf::{CNFVar, VarId};
use crate::formula::Formula;
use crate::util::HashMap;

pub trait BranchingStrategy: Clone {
    /// Function that picks the next variable to be chosen for branching,
    /// together with the value to try first.
    /// Returns None if no variable occurs in the formula anymore.
    fn pick_branching_variable(&mut self, formula: &Formula) -> Option<CNFVar>;
}

/// First variable still occurring, tried positive first
#[derive(Clone, Default)]
pub struct NaiveBranching;

impl BranchingStrategy for NaiveBranching {
    fn pick_branching_variable(&mut self, formula: &Formula) -> Option<CNFVar> {
        formula.occurrences()
            .keys()
            .next()
            .map(|&id| CNFVar::pos(id))
    }
}

/// Dynamic largest individual sum: the literal occurring in most clauses
#[derive(Clone, Default)]
pub struct DLIS;

impl BranchingStrategy for DLIS {
    fn pick_branching_variable(&mut self, formula: &Formula) -> Option<CNFVar> {
        let mut max = 0;
        let mut cnf_var: Option<CNFVar> = None;
        for (&id, occurrences) in formula.occurrences() {
            let mut local_max = occurrences.pos;
            let mut local_cnf_var = CNFVar { id, sign: true };
            if occurrences.pos < occurrences.neg {
                local_max = occurrences.neg;
                local_cnf_var.sign = false;
            }
            if local_max > max {
                max = local_max;
                cnf_var = Some(local_cnf_var);
            }
        }
        cnf_var
    }
}

/// Dynamic largest combined sum: the variable occurring in most clauses,
/// tried with its more frequent polarity. Ties go to the smaller identifier.
#[derive(Clone, Default)]
pub struct DLCS;

impl BranchingStrategy for DLCS {
    fn pick_branching_variable(&mut self, formula: &Formula) -> Option<CNFVar> {
        let mut max = 0;
        let mut cnf_var: Option<CNFVar> = None;
        for (&id, occurrences) in formula.occurrences() {
            let h = occurrences.total();
            if h > max {
                max = h;
                cnf_var = Some(CNFVar { id, sign: occurrences.pos > occurrences.neg });
            }
        }
        cnf_var
    }
}

/// Maximum occurrences in clauses of minimum size
#[derive(Clone, Default)]
pub struct MOM;

impl BranchingStrategy for MOM {
    fn pick_branching_variable(&mut self, formula: &Formula) -> Option<CNFVar> {
        let min_len = formula.clauses()
            .iter()
            .map(|clause| clause.len())
            .filter(|&len| len > 0)
            .min()?;

        let mut counts: HashMap<VarId, (usize, usize)> = HashMap::default();
        for clause in formula.clauses().iter().filter(|clause| clause.len() == min_len) {
            for literal in clause.literals() {
                let (neg, pos) = counts.entry(literal.id).or_default();
                if literal.sign { *pos += 1 } else { *neg += 1 }
            }
        }

        let weight = 1usize.checked_shl(min_len as u32).unwrap_or(usize::MAX);
        let mut max = 0;
        let mut cnf_var: Option<CNFVar> = None;
        // index order keeps ties reproducible
        for &id in formula.occurrences().keys() {
            let (neg, pos) = match counts.get(&id) {
                Some(&count) => count,
                None => continue,
            };
            let score = (pos + neg).saturating_mul(weight).saturating_add(pos * neg);
            if score > max {
                max = score;
                cnf_var = Some(CNFVar { id, sign: pos >= neg });
            }
        }
        cnf_var
    }
}

/// Jeroslow-Wang: every clause containing a literal votes for it with
/// weight `2^-len`
#[derive(Clone, Default)]
pub struct JeroslawWang;

impl BranchingStrategy for JeroslawWang {
    fn pick_branching_variable(&mut self, formula: &Formula) -> Option<CNFVar> {
        let mut scores: HashMap<CNFVar, f64> = HashMap::default();
        for clause in formula.clauses() {
            let weight = 2f64.powi(-(clause.len() as i32));
            for &literal in clause.literals() {
                *scores.entry(literal).or_default() += weight;
            }
        }

        let mut max = 0.0;
        let mut cnf_var: Option<CNFVar> = None;
        for &id in formula.occurrences().keys() {
            for &sign in &[true, false] {
                let literal = CNFVar { id, sign };
                let score = scores.get(&literal).copied().unwrap_or(0.0);
                if score > max {
                    max = score;
                    cnf_var = Some(literal);
                }
            }
        }
        cnf_var
    }
}
