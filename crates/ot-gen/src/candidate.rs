// Candidates and competitions
//
// A Candidate is created once per completed word at the end of GEN and is
// never mutated afterward. A Competition owns every candidate generated for
// one input.

use std::fmt;
use std::sync::Arc;

use ot_core::element::Element;
use ot_core::form::{Input, Output};

use crate::constraint::ViolationProfile;
use crate::word::{Correspondence, Word};

/// One hypothesized output for an input, with its violation counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<E: Element> {
    input: Arc<Input<E>>,
    output: Output<E>,
    correspondence: Correspondence,
    violations: ViolationProfile,
}

impl<E: Element> Candidate<E> {
    /// Freeze a completed word together with its evaluation.
    pub fn new(word: Word<E>, violations: ViolationProfile) -> Self {
        let (input, output, correspondence) = word.into_parts();
        Self {
            input,
            output,
            correspondence,
            violations,
        }
    }

    pub fn input(&self) -> &Input<E> {
        &self.input
    }

    pub fn output(&self) -> &Output<E> {
        &self.output
    }

    pub fn correspondence(&self) -> &Correspondence {
        &self.correspondence
    }

    pub fn violations(&self) -> &ViolationProfile {
        &self.violations
    }

    /// Violation count for the constraint called `name`.
    pub fn violations_of(&self, name: &str) -> Option<u32> {
        self.violations.get(name)
    }
}

/// `input -> output [Name:count ...]`
impl<E: Element> fmt::Display for Candidate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [{}]", self.input, self.output, self.violations)
    }
}

// ---------------------------------------------------------------------------
// Competition
// ---------------------------------------------------------------------------

/// Every candidate generated for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competition<E: Element> {
    input: Arc<Input<E>>,
    candidates: Vec<Candidate<E>>,
}

impl<E: Element> Competition<E> {
    pub(crate) fn new(input: Arc<Input<E>>, candidates: Vec<Candidate<E>>) -> Self {
        Self { input, candidates }
    }

    pub fn input(&self) -> &Input<E> {
        &self.input
    }

    pub fn candidates(&self) -> &[Candidate<E>] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate<E>> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The candidate whose output equals `output`.
    pub fn candidate_for(&self, output: &Output<E>) -> Option<&Candidate<E>> {
        self.candidates.iter().find(|c| c.output() == output)
    }
}

impl<'a, E: Element> IntoIterator for &'a Competition<E> {
    type Item = &'a Candidate<E>;
    type IntoIter = std::slice::Iter<'a, Candidate<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl<E: Element> IntoIterator for Competition<E> {
    type Item = Candidate<E>;
    type IntoIter = std::vec::IntoIter<Candidate<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

/// Input label line followed by one candidate per line.
impl<E: Element> fmt::Display for Competition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let morph_word = self.input.morph_word();
        if morph_word.is_empty() {
            writeln!(f, "/{}/", self.input)?;
        } else {
            writeln!(f, "{morph_word} /{}/", self.input)?;
        }
        for candidate in &self.candidates {
            writeln!(f, "  {candidate}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{ConstraintRef, NoLong, Wsp};
    use ot_core::element::Syllable;
    use ot_core::feature::FeatureValue::{Long, MainStress, Short, Unstressed};

    fn candidate(output: Syllable) -> Candidate<Syllable> {
        let input: Input<Syllable> = [Syllable::with_values(Unstressed, Short).unwrap()]
            .into_iter()
            .collect();
        let mut word = Word::new(Arc::new(input));
        word.push(0, output);
        let constraints: Vec<ConstraintRef<Syllable>> = vec![Arc::new(Wsp), Arc::new(NoLong)];
        let profile = ViolationProfile::evaluate(&constraints, &word);
        Candidate::new(word, profile)
    }

    #[test]
    fn candidate_renders_mapping_and_counts() {
        let c = candidate(Syllable::with_values(Unstressed, Long).unwrap());
        assert_eq!(c.to_string(), "s. -> l. [WSP:1 NoLong:1]");
        assert_eq!(c.violations_of("WSP"), Some(1));
        assert_eq!(c.correspondence().output_for(0), Some(0));
    }

    #[test]
    fn competition_lookup_by_output() {
        let a = candidate(Syllable::with_values(MainStress, Short).unwrap());
        let b = candidate(Syllable::with_values(MainStress, Long).unwrap());
        let input = Arc::clone(&a.input);
        let wanted = b.output().clone();
        let competition = Competition::new(input, vec![a, b]);
        assert_eq!(competition.len(), 2);
        let found = competition.candidate_for(&wanted).unwrap();
        assert_eq!(found.violations_of("NoLong"), Some(1));
        assert!(competition.to_string().starts_with("/s./\n"));
    }
}
