// Constraints: the evaluator trait and violation profiles
//
// A constraint assigns a nonnegative violation count to a completed word.
// Systems hold an ordered constraint list; candidates record one count per
// constraint in that order.

mod stress_length;

pub use stress_length::{
    IdentLength, IdentStress, MainLeft, MainRight, NoClash, NoLapse, NoLong, Wsp,
    base_constraints, clash_extension, lapse_extension,
};

use std::fmt;
use std::sync::Arc;

use ot_core::element::Element;

use crate::word::Word;

/// Whether a constraint looks at the output alone or at the IO mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Markedness,
    Faithfulness,
}

/// A named violation-counting evaluator.
///
/// `eval` is invoked once per completed word and must handle an empty
/// output.
pub trait Constraint<E: Element>: Send + Sync {
    fn name(&self) -> &str;

    fn kind(&self) -> ConstraintKind;

    fn eval(&self, word: &Word<E>) -> u32;
}

/// Shared handle to a constraint, as stored in constraint lists.
pub type ConstraintRef<E> = Arc<dyn Constraint<E>>;

// ---------------------------------------------------------------------------
// ViolationProfile
// ---------------------------------------------------------------------------

/// Violation counts of one candidate, in constraint-list order.
///
/// The name table is shared by every candidate of a competition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationProfile {
    names: Arc<[String]>,
    counts: Vec<u32>,
}

impl ViolationProfile {
    /// Evaluate every constraint against `word`, naming each count after
    /// its constraint.
    pub fn evaluate<E: Element>(constraints: &[ConstraintRef<E>], word: &Word<E>) -> Self {
        Self::evaluate_shared(&Self::names_of(constraints), constraints, word)
    }

    /// As [`evaluate`](Self::evaluate), reusing a name table built by
    /// [`names_of`](Self::names_of) from the same `constraints`.
    pub(crate) fn evaluate_shared<E: Element>(
        names: &Arc<[String]>,
        constraints: &[ConstraintRef<E>],
        word: &Word<E>,
    ) -> Self {
        debug_assert_eq!(names.len(), constraints.len());
        Self {
            names: Arc::clone(names),
            counts: constraints.iter().map(|c| c.eval(word)).collect(),
        }
    }

    /// Name table for a constraint list, shared across profiles.
    pub(crate) fn names_of<E: Element>(constraints: &[ConstraintRef<E>]) -> Arc<[String]> {
        constraints.iter().map(|c| c.name().to_string()).collect()
    }

    /// Count for the constraint called `name`.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.counts.get(i).copied())
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}

/// `Name:count` pairs separated by spaces.
impl fmt::Display for ViolationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}:{count}")?;
        }
        Ok(())
    }
}
