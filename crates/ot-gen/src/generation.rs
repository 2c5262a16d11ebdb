// GEN: incremental, policy-parameterized candidate generation
//
// Input elements are consumed left to right. Partially built words live in
// buckets defined by the stress policy. At each position every word in
// every bucket is extended once per output feature assignment; the policy
// routes each extension into a bucket or prunes it on the spot, so the
// forbidden part of the space is never materialized.

use std::sync::Arc;

use ot_core::element::Element;
use ot_core::feature::{FeatureType, FeatureValue};
use ot_core::form::Input;

use crate::candidate::{Candidate, Competition};
use crate::constraint::{ConstraintRef, ViolationProfile};
use crate::generator::ElementGenerator;
use crate::policy::StressPolicy;
use crate::word::Word;

/// One output feature assignment: a fully specified template whose
/// features are copied onto a clone of the input element.
#[derive(Debug)]
pub(crate) struct Assignment<E: Element> {
    template: E,
    stressed: bool,
}

impl<E: Element> Assignment<E> {
    /// The cross product of every output-relevant feature domain.
    pub(crate) fn all() -> Arc<[Self]> {
        ElementGenerator::<E>::for_kind()
            .into_elements()
            .into_iter()
            .map(|template| Self {
                stressed: template.has(FeatureType::Stress, FeatureValue::MainStress),
                template,
            })
            .collect()
    }

    /// Output correspondent of `element`: a clone (same morpheme) carrying
    /// this assignment's feature values.
    fn apply(&self, element: &E) -> E {
        let mut output = element.clone();
        output.features_mut().copy_from_slice(self.template.features());
        output
    }
}

/// Generate the competition for `input` under `policy`, evaluating each
/// candidate against `constraints` in list order.
///
/// Total over any input. A zero-length input yields exactly one candidate
/// with an empty output, whatever the policy.
pub fn generate<E: Element>(
    input: &Input<E>,
    constraints: &[ConstraintRef<E>],
    policy: StressPolicy,
) -> Competition<E> {
    generate_with(input, constraints, policy, &Assignment::all())
}

/// [`generate`] over a precomputed assignment table.
pub(crate) fn generate_with<E: Element>(
    input: &Input<E>,
    constraints: &[ConstraintRef<E>],
    policy: StressPolicy,
    assignments: &[Assignment<E>],
) -> Competition<E> {
    let input = Arc::new(input.clone());
    let words = extend_words(&input, policy, assignments);

    let names = ViolationProfile::names_of(constraints);
    let candidates: Vec<Candidate<E>> = words
        .into_iter()
        .map(|word| {
            let violations = ViolationProfile::evaluate_shared(&names, constraints, &word);
            Candidate::new(word, violations)
        })
        .collect();

    log::debug!(
        "gen /{}/ under {:?}: {} candidates",
        input,
        policy,
        candidates.len()
    );
    Competition::new(input, candidates)
}

/// Build every admissible complete word over `input`, bucket by bucket in
/// bucket order.
pub fn generate_words<E: Element>(input: &Arc<Input<E>>, policy: StressPolicy) -> Vec<Word<E>> {
    extend_words(input, policy, &Assignment::all())
}

fn extend_words<E: Element>(
    input: &Arc<Input<E>>,
    policy: StressPolicy,
    assignments: &[Assignment<E>],
) -> Vec<Word<E>> {
    if input.is_empty() {
        return vec![Word::new(Arc::clone(input))];
    }

    let mut buckets: Vec<Vec<Word<E>>> = vec![Vec::new(); policy.bucket_count()];
    buckets[0].push(Word::new(Arc::clone(input)));

    for (position, element) in input.iter().enumerate() {
        let mut next: Vec<Vec<Word<E>>> = vec![Vec::new(); policy.bucket_count()];
        for (bucket, words) in buckets.iter().enumerate() {
            for word in words {
                for assignment in assignments {
                    let Some(target) = policy.route(bucket, assignment.stressed) else {
                        continue;
                    };
                    let mut extended = word.clone();
                    extended.push(position, assignment.apply(element));
                    next[target].push(extended);
                }
            }
        }
        log::trace!(
            "gen position {}: bucket sizes {:?}",
            position,
            next.iter().map(Vec::len).collect::<Vec<_>>()
        );
        buckets = next;
    }

    buckets
        .into_iter()
        .enumerate()
        .filter(|(bucket, _)| policy.accepts(*bucket))
        .flat_map(|(_, words)| words)
        .collect()
}
