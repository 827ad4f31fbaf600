use std::iter;
use tracing::trace;

use crate::cnf::{CNFVar, VarId};
use crate::error::Contradiction;
use crate::formula::{Assignment, Clause, Formula};
use crate::util::IndexMap;

/// Assignments waiting to be applied. The most recently queued one is
/// applied first.
type Queue = IndexMap<VarId, bool>;

/// Queues `literal` unless it is already queued. Queuing the opposite
/// value of a queued variable is a contradiction.
fn enqueue(queue: &mut Queue, literal: CNFVar) -> Result<(), Contradiction> {
    match queue.get(&literal.id) {
        None => {
            queue.insert(literal.id, literal.sign);
            Ok(())
        }
        Some(&sign) if sign == literal.sign => Ok(()),
        Some(_) => {
            trace!(variable = literal.id, "conflicting forced values");
            Err(Contradiction)
        }
    }
}

impl Formula {
    /// Applies unit clauses until none is left.
    ///
    /// Returns every assignment made on the way. Fails if an empty clause is
    /// present or the forced assignments contradict each other.
    pub fn unit_propagate(&mut self) -> Result<Assignment, Contradiction> {
        let mut assigned = Assignment::default();

        loop {
            if self.clauses.is_empty() {
                return Ok(assigned);
            }
            if self.clauses.iter().any(Clause::is_empty) {
                return Err(Contradiction);
            }

            let unit = match self.clauses.iter().find(|clause| clause.is_unit()) {
                Some(clause) => clause.literals()[0],
                None => return Ok(assigned),
            };

            let propagated = self.propagate(iter::once((unit.id, unit.sign)))?;
            assigned.extend(propagated);
        }
    }

    /// Applies the given assignments and everything they force.
    ///
    /// A clause containing a literal made true is dropped. A literal made
    /// false is removed from its clause; a clause left with a single literal
    /// forces it. A variable whose remaining occurrences all have the same
    /// polarity is forced to that polarity. Stops early, accepting whatever
    /// is still queued, once no clause is left.
    ///
    /// Conflicting values among the given assignments are a contradiction.
    /// After a contradiction the formula is left half simplified and must be
    /// discarded.
    pub fn propagate<I>(&mut self, assignments: I) -> Result<Assignment, Contradiction>
    where
        I: IntoIterator<Item = (VarId, bool)>,
    {
        let mut queue = Queue::default();
        for (var, value) in assignments {
            enqueue(&mut queue, CNFVar { id: var, sign: value })?;
        }
        let mut assigned = Assignment::default();

        while let Some((var, value)) = queue.pop() {
            assigned.insert(var, value);

            // absent variables occur in no live clause
            if self.occurrences.remove(&var).is_none() {
                continue;
            }

            let clauses = std::mem::take(&mut self.clauses);
            let mut kept = Vec::with_capacity(clauses.len());

            for mut clause in clauses {
                match clause.sign_of(var) {
                    None => kept.push(clause),
                    Some(sign) if sign == value => self.drop_satisfied(&clause, var, &mut queue)?,
                    Some(_) => {
                        clause.remove(var);
                        match clause.len() {
                            0 => {
                                trace!(variable = var, "clause falsified");
                                return Err(Contradiction);
                            }
                            // stays live until its own variable is applied,
                            // which keeps the counters exact
                            1 => {
                                enqueue(&mut queue, clause.literals()[0])?;
                                kept.push(clause);
                            }
                            _ => kept.push(clause),
                        }
                    }
                }
            }

            self.clauses = kept;

            if self.clauses.is_empty() {
                assigned.extend(queue.drain(..));
                return Ok(assigned);
            }
        }

        Ok(assigned)
    }

    /// Updates the counters of every other variable in a satisfied clause
    /// and queues the variables that become pure.
    fn drop_satisfied(&mut self, clause: &Clause, assigned: VarId, queue: &mut Queue) -> Result<(), Contradiction> {
        for &literal in clause.literals() {
            if literal.id == assigned {
                continue;
            }

            let occurrences = match self.occurrences.get_mut(&literal.id) {
                Some(occurrences) => occurrences,
                None => continue,
            };
            occurrences.decrement(literal.sign);

            if occurrences.total() == 0 {
                self.occurrences.remove(&literal.id);
            } else if occurrences.count(literal.sign) == 0 {
                enqueue(queue, -literal)?;
            }
        }
        Ok(())
    }

    /// Variables occurring with a single polarity, mapped to that polarity.
    /// Found in one pass over the index, variables becoming pure later on
    /// are not searched for.
    pub fn pure_literals(&self) -> IndexMap<VarId, bool> {
        self.occurrences.iter()
            .filter_map(|(&var, occurrences)| {
                if occurrences.pos == 0 {
                    Some((var, false))
                } else if occurrences.neg == 0 {
                    Some((var, true))
                } else {
                    None
                }
            })
            .collect()
    }
}
