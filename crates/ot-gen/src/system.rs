// Systems: an ordered constraint list plus a stress policy
//
// Every system runs the same GEN; variants differ only in which constraints
// are appended to the base list and in the policy value they carry.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use ot_core::element::{Element, Syllable};
use ot_core::form::Input;

use crate::candidate::Competition;
use crate::constraint::{ConstraintRef, base_constraints, clash_extension, lapse_extension};
use crate::generation::{self, Assignment};
use crate::policy::StressPolicy;

/// A constraint list with the stress policy GEN runs under.
///
/// The output feature assignments GEN extends words with are enumerated
/// once per system and shared by its clones.
#[derive(Clone)]
pub struct System<E: Element> {
    constraints: Vec<ConstraintRef<E>>,
    policy: StressPolicy,
    assignments: Arc<[Assignment<E>]>,
}

impl<E: Element> System<E> {
    pub fn new(constraints: Vec<ConstraintRef<E>>, policy: StressPolicy) -> Self {
        Self {
            constraints,
            policy,
            assignments: Assignment::all(),
        }
    }

    /// This system with `extension` appended to its constraint list.
    pub fn with_extensions(mut self, extension: Vec<ConstraintRef<E>>) -> Self {
        self.constraints.extend(extension);
        self
    }

    /// This system under a different stress policy.
    pub fn with_policy(mut self, policy: StressPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn constraints(&self) -> &[ConstraintRef<E>] {
        &self.constraints
    }

    pub fn constraint_names(&self) -> Vec<&str> {
        self.constraints.iter().map(|c| c.name()).collect()
    }

    pub fn policy(&self) -> StressPolicy {
        self.policy
    }

    /// GEN: every admissible candidate for `input`, evaluated against this
    /// system's constraints.
    pub fn generate(&self, input: &Input<E>) -> Competition<E> {
        generation::generate_with(input, &self.constraints, self.policy, &self.assignments)
    }
}

impl<E: Element> fmt::Debug for System<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("System")
            .field("constraints", &self.constraint_names())
            .field("policy", &self.policy)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Stress-length variants
// ---------------------------------------------------------------------------

/// The stock stress-length systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemVariant {
    /// Base constraints, exactly one main stress.
    #[default]
    StressLength,
    /// Base constraints, at most one stress.
    AtMostOne,
    /// Base constraints, any number of stresses.
    Unbounded,
    /// Base plus *Clash, any number of stresses.
    Clash,
    /// Base plus *Clash and *Lapse, any number of stresses.
    ClashLapse,
}

impl<E: Element> System<E> {
    pub fn stress_length() -> Self {
        Self::new(base_constraints(), StressPolicy::Culminative)
    }

    pub fn stress_length_at_most_one() -> Self {
        Self::new(base_constraints(), StressPolicy::AtMostOne)
    }

    pub fn stress_length_unbounded() -> Self {
        Self::new(base_constraints(), StressPolicy::Unbounded)
    }

    pub fn stress_length_clash() -> Self {
        Self::stress_length_unbounded().with_extensions(clash_extension())
    }

    pub fn stress_length_clash_lapse() -> Self {
        Self::stress_length_clash().with_extensions(lapse_extension())
    }

    pub fn from_variant(variant: SystemVariant) -> Self {
        match variant {
            SystemVariant::StressLength => Self::stress_length(),
            SystemVariant::AtMostOne => Self::stress_length_at_most_one(),
            SystemVariant::Unbounded => Self::stress_length_unbounded(),
            SystemVariant::Clash => Self::stress_length_clash(),
            SystemVariant::ClashLapse => Self::stress_length_clash_lapse(),
        }
    }
}

impl Default for System<Syllable> {
    fn default() -> Self {
        Self::stress_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ot_core::feature::FeatureValue::{Long, Short, Unstressed};

    fn input() -> Input<Syllable> {
        [
            Syllable::with_values(Unstressed, Short).unwrap(),
            Syllable::with_values(Unstressed, Long).unwrap(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn variant_shapes() {
        let cases = [
            (SystemVariant::StressLength, 6, StressPolicy::Culminative),
            (SystemVariant::AtMostOne, 6, StressPolicy::AtMostOne),
            (SystemVariant::Unbounded, 6, StressPolicy::Unbounded),
            (SystemVariant::Clash, 7, StressPolicy::Unbounded),
            (SystemVariant::ClashLapse, 8, StressPolicy::Unbounded),
        ];
        for (variant, size, policy) in cases {
            let system = System::<Syllable>::from_variant(variant);
            assert_eq!(system.constraints().len(), size, "{variant:?}");
            assert_eq!(system.policy(), policy, "{variant:?}");
        }
    }

    #[test]
    fn extensions_append_after_base() {
        let system = System::<Syllable>::stress_length_clash_lapse();
        assert_eq!(
            system.constraint_names(),
            vec![
                "WSP",
                "MainLeft",
                "MainRight",
                "NoLong",
                "Ident[stress]",
                "Ident[length]",
                "*Clash",
                "*Lapse"
            ]
        );
    }

    #[test]
    fn variants_share_gen() {
        let base = System::<Syllable>::stress_length_unbounded().generate(&input());
        let extended = System::<Syllable>::stress_length_clash_lapse().generate(&input());
        assert_eq!(base.len(), extended.len());
        for (a, b) in base.iter().zip(extended.iter()) {
            assert_eq!(a.output(), b.output());
            assert_eq!(&b.violations().counts()[..6], a.violations().counts());
        }
    }

    #[test]
    fn with_policy_swaps_only_the_policy() {
        let system = System::<Syllable>::stress_length().with_policy(StressPolicy::AtMostOne);
        assert_eq!(system.generate(&input()).len(), 12);
        assert_eq!(system.constraints().len(), 6);
    }

    #[test]
    fn default_system_is_culminative() {
        let system: System<Syllable> = System::default();
        assert_eq!(system.policy(), StressPolicy::Culminative);
        assert_eq!(system.generate(&input()).len(), 8);
    }

    #[test]
    fn debug_lists_constraint_names() {
        let rendered = format!("{:?}", System::<Syllable>::stress_length_clash());
        assert!(rendered.contains("*Clash"));
        assert!(rendered.contains("Unbounded"));
    }

    #[test]
    fn derived_systems_share_assignments() {
        let base = System::<Syllable>::stress_length_unbounded();
        let derived = base
            .clone()
            .with_extensions(clash_extension())
            .with_policy(StressPolicy::AtMostOne);
        assert!(Arc::ptr_eq(&base.assignments, &derived.assignments));
        assert_eq!(
            derived.generate(&input()),
            generation::generate(&input(), derived.constraints(), StressPolicy::AtMostOne)
        );
    }
}
