// Elements: the Element capability trait and the Syllable element kind
//
// GEN and the combinatorial generators are written against `Element`, not
// against a concrete kind. An element kind fixes the arity and order of its
// features; the morpheme affiliation starts out empty.

use std::fmt;

use crate::feature::{Feature, FeatureType, FeatureValue};
use crate::morphology::Morpheme;
use crate::{OtError, Result};

/// Capability interface of an element kind.
///
/// `Clone` must deep-copy every feature and share (not duplicate) the
/// morpheme reference; derived `Clone` on a struct holding `Feature`s and an
/// `Option<Morpheme>` does exactly that. Equality is structural over the
/// ordered features and the morpheme identity.
pub trait Element: Clone + PartialEq + Eq + fmt::Debug + fmt::Display + Send + Sync {
    /// Name of the element kind, used in error messages.
    const KIND: &'static str;

    /// A fresh element with every feature unset and no morpheme.
    fn prototype() -> Self;

    /// Features in declared order.
    fn features(&self) -> &[Feature];

    fn features_mut(&mut self) -> &mut [Feature];

    fn morpheme(&self) -> Option<&Morpheme>;

    fn set_morpheme(&mut self, morpheme: Option<Morpheme>);

    /// Iterate features in declared order.
    fn each_feature(&self) -> std::slice::Iter<'_, Feature> {
        self.features().iter()
    }

    /// Declared feature types, in order.
    fn feature_types(&self) -> Vec<FeatureType> {
        self.features().iter().map(Feature::feature_type).collect()
    }

    /// Fails with `InvalidFeatureType` if `feature_type` is not declared by
    /// this element kind.
    fn feature(&self, feature_type: FeatureType) -> Result<&Feature> {
        self.features()
            .iter()
            .find(|f| f.feature_type() == feature_type)
            .ok_or_else(|| invalid_feature_type::<Self>(feature_type))
    }

    /// Set (or with `None`, reset) a declared feature.
    ///
    /// Fails with `InvalidFeatureType` for an undeclared feature and with
    /// `InvalidFeatureValue` for a value outside the feature's domain.
    fn set_feature(&mut self, feature_type: FeatureType, value: Option<FeatureValue>) -> Result<()> {
        self.features_mut()
            .iter_mut()
            .find(|f| f.feature_type() == feature_type)
            .ok_or_else(|| invalid_feature_type::<Self>(feature_type))?
            .set(value)
    }

    /// Whether the declared feature holds `value`. Undeclared features never
    /// hold anything.
    fn has(&self, feature_type: FeatureType, value: FeatureValue) -> bool {
        self.feature(feature_type).is_ok_and(|f| f.is(value))
    }

    fn is_fully_specified(&self) -> bool {
        self.features().iter().all(Feature::is_set)
    }
}

fn invalid_feature_type<E: Element>(feature_type: FeatureType) -> OtError {
    OtError::InvalidFeatureType {
        feature: feature_type.name().to_string(),
        element: E::KIND.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Syllable
// ---------------------------------------------------------------------------

/// A syllable with stress and length, in that declared order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syllable {
    features: [Feature; 2],
    morpheme: Option<Morpheme>,
}

impl Syllable {
    pub const fn new() -> Self {
        Self {
            features: [
                Feature::unset(FeatureType::Stress),
                Feature::unset(FeatureType::Length),
            ],
            morpheme: None,
        }
    }

    /// Build an unaffiliated syllable with both features set.
    pub fn with_values(stress: FeatureValue, length: FeatureValue) -> Result<Self> {
        let mut syllable = Self::new();
        syllable.set_feature(FeatureType::Stress, Some(stress))?;
        syllable.set_feature(FeatureType::Length, Some(length))?;
        Ok(syllable)
    }

    pub fn is_stressed(&self) -> bool {
        self.features[0].is(FeatureValue::MainStress)
    }

    pub fn is_long(&self) -> bool {
        self.features[1].is(FeatureValue::Long)
    }
}

impl Default for Syllable {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Syllable {
    const KIND: &'static str = "syllable";

    fn prototype() -> Self {
        Self::new()
    }

    fn features(&self) -> &[Feature] {
        &self.features
    }

    fn features_mut(&mut self) -> &mut [Feature] {
        &mut self.features
    }

    fn morpheme(&self) -> Option<&Morpheme> {
        self.morpheme.as_ref()
    }

    fn set_morpheme(&mut self, morpheme: Option<Morpheme>) {
        self.morpheme = morpheme;
    }
}

/// Renders length then stress: `s.`, `l'`, `??` when unset.
impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.features[1].symbol(), self.features[0].symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::MorphemeType;

    #[test]
    fn prototype_is_unset_and_untyped() {
        let s = Syllable::prototype();
        assert!(s.morpheme().is_none());
        assert!(!s.is_fully_specified());
        assert_eq!(s.to_string(), "??");
        assert_eq!(s.feature_types(), vec![FeatureType::Stress, FeatureType::Length]);
    }

    #[test]
    fn set_and_get_feature() {
        let mut s = Syllable::new();
        s.set_feature(FeatureType::Length, Some(FeatureValue::Long)).unwrap();
        assert!(s.feature(FeatureType::Length).unwrap().is(FeatureValue::Long));
        assert!(s.is_long());
        assert!(!s.is_stressed());
        assert_eq!(s.to_string(), "l?");
    }

    #[test]
    fn set_feature_rejects_out_of_domain_value() {
        let mut s = Syllable::new();
        let err = s
            .set_feature(FeatureType::Stress, Some(FeatureValue::Short))
            .unwrap_err();
        assert!(matches!(err, OtError::InvalidFeatureValue { .. }));
    }

    #[test]
    fn set_feature_accepts_unset_as_reset() {
        let mut s = Syllable::with_values(FeatureValue::MainStress, FeatureValue::Short).unwrap();
        s.set_feature(FeatureType::Stress, None).unwrap();
        assert!(!s.feature(FeatureType::Stress).unwrap().is_set());
    }

    /// An element kind with only a stress slot, to reach the undeclared
    /// feature path.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Mora {
        features: [Feature; 1],
        morpheme: Option<Morpheme>,
    }

    impl fmt::Display for Mora {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.features[0].symbol())
        }
    }

    impl Element for Mora {
        const KIND: &'static str = "mora";
        fn prototype() -> Self {
            Self {
                features: [Feature::unset(FeatureType::Stress)],
                morpheme: None,
            }
        }
        fn features(&self) -> &[Feature] {
            &self.features
        }
        fn features_mut(&mut self) -> &mut [Feature] {
            &mut self.features
        }
        fn morpheme(&self) -> Option<&Morpheme> {
            self.morpheme.as_ref()
        }
        fn set_morpheme(&mut self, morpheme: Option<Morpheme>) {
            self.morpheme = morpheme;
        }
    }

    #[test]
    fn undeclared_feature_is_invalid_type() {
        let mut m = Mora::prototype();
        assert_eq!(
            m.feature(FeatureType::Length).unwrap_err(),
            OtError::InvalidFeatureType {
                feature: "length".into(),
                element: "mora".into(),
            }
        );
        assert!(m.set_feature(FeatureType::Length, None).is_err());
        assert!(!m.has(FeatureType::Length, FeatureValue::Long));
    }

    #[test]
    fn clone_copies_features_and_shares_morpheme() {
        let m = Morpheme::new(MorphemeType::Root, "r1");
        let mut original =
            Syllable::with_values(FeatureValue::Unstressed, FeatureValue::Short).unwrap();
        original.set_morpheme(Some(m.clone()));

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_feature(FeatureType::Stress, Some(FeatureValue::MainStress))
            .unwrap();
        assert!(!original.is_stressed());
        assert!(copy.is_stressed());
        assert_ne!(copy, original);

        // Same identity, not an equal-looking duplicate.
        assert_eq!(copy.morpheme(), Some(&m));
        assert_eq!(copy.morpheme(), original.morpheme());
    }

    #[test]
    fn equality_includes_morpheme_identity() {
        let a = Syllable::with_values(FeatureValue::Unstressed, FeatureValue::Long).unwrap();
        let mut b = a.clone();
        b.set_morpheme(Some(Morpheme::new(MorphemeType::Suffix, "s1")));
        assert_ne!(a, b);
    }

    #[test]
    fn each_feature_in_declared_order() {
        let s = Syllable::with_values(FeatureValue::MainStress, FeatureValue::Long).unwrap();
        let rendered: Vec<String> = s.each_feature().map(|f| f.to_string()).collect();
        assert_eq!(rendered, vec!["main-stress", "long"]);
        assert_eq!(s.to_string(), "l'");
    }
}
