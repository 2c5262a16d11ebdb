// Typed feature slots: feature types, their value domains, and Feature
//
// A Feature is one value slot of an element. Its value is either unset or
// drawn from the domain of its type; domains are enumerated in a fixed
// declared order that the element generator relies on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{OtError, Result};

// ---------------------------------------------------------------------------
// FeatureType / FeatureValue
// ---------------------------------------------------------------------------

/// Identifier of a feature slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureType {
    /// Main stress of a syllable.
    Stress,
    /// Vowel length of a syllable.
    Length,
}

impl FeatureType {
    /// The values this feature may take, in declared order.
    pub const fn domain(self) -> &'static [FeatureValue] {
        match self {
            FeatureType::Stress => &[FeatureValue::Unstressed, FeatureValue::MainStress],
            FeatureType::Length => &[FeatureValue::Short, FeatureValue::Long],
        }
    }

    /// Lowercase name used in error messages and reports.
    pub const fn name(self) -> &'static str {
        match self {
            FeatureType::Stress => "stress",
            FeatureType::Length => "length",
        }
    }

    /// Whether `value` belongs to this feature's domain.
    pub fn admits(self, value: FeatureValue) -> bool {
        self.domain().contains(&value)
    }

    /// A feature of this type set to each domain value, in declared order.
    pub fn settings(self) -> impl Iterator<Item = Feature> {
        self.domain().iter().map(move |&value| Feature {
            feature_type: self,
            value: Some(value),
        })
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete feature value. Each value belongs to exactly one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureValue {
    Unstressed,
    MainStress,
    Short,
    Long,
}

impl FeatureValue {
    /// Single-character rendering used by element `Display` impls.
    pub const fn symbol(self) -> char {
        match self {
            FeatureValue::Unstressed => '.',
            FeatureValue::MainStress => '\'',
            FeatureValue::Short => 's',
            FeatureValue::Long => 'l',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FeatureValue::Unstressed => "unstressed",
            FeatureValue::MainStress => "main-stress",
            FeatureValue::Short => "short",
            FeatureValue::Long => "long",
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marker rendered in place of an unset value.
pub const UNSET_SYMBOL: char = '?';

// ---------------------------------------------------------------------------
// Feature
// ---------------------------------------------------------------------------

/// A typed value slot. `None` is the unset state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feature {
    feature_type: FeatureType,
    value: Option<FeatureValue>,
}

impl Feature {
    /// Create an unset feature of the given type.
    pub const fn unset(feature_type: FeatureType) -> Self {
        Self {
            feature_type,
            value: None,
        }
    }

    pub const fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    pub const fn value(&self) -> Option<FeatureValue> {
        self.value
    }

    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Set the value, or reset it with `None`.
    ///
    /// Fails with `InvalidFeatureValue` if the value lies outside this
    /// feature's domain; the feature is left unchanged in that case.
    pub fn set(&mut self, value: Option<FeatureValue>) -> Result<()> {
        if let Some(v) = value {
            if !self.feature_type.admits(v) {
                return Err(OtError::InvalidFeatureValue {
                    feature: self.feature_type.name().to_string(),
                    value: v.name().to_string(),
                });
            }
        }
        self.value = value;
        Ok(())
    }

    /// Whether the feature currently holds `value`.
    pub fn is(&self, value: FeatureValue) -> bool {
        self.value == Some(value)
    }

    /// Domain values of this feature, in declared order.
    pub fn each_value(&self) -> std::iter::Copied<std::slice::Iter<'static, FeatureValue>> {
        self.feature_type.domain().iter().copied()
    }

    /// The rendering symbol of the value, or [`UNSET_SYMBOL`].
    pub fn symbol(&self) -> char {
        self.value.map_or(UNSET_SYMBOL, FeatureValue::symbol)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("unset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_are_in_declared_order() {
        assert_eq!(
            FeatureType::Stress.domain(),
            &[FeatureValue::Unstressed, FeatureValue::MainStress]
        );
        assert_eq!(
            FeatureType::Length.domain(),
            &[FeatureValue::Short, FeatureValue::Long]
        );
    }

    #[test]
    fn new_feature_is_unset() {
        let f = Feature::unset(FeatureType::Length);
        assert!(!f.is_set());
        assert_eq!(f.to_string(), "unset");
        assert_eq!(f.symbol(), UNSET_SYMBOL);
    }

    #[test]
    fn set_accepts_domain_value() {
        let mut f = Feature::unset(FeatureType::Stress);
        f.set(Some(FeatureValue::MainStress)).unwrap();
        assert!(f.is(FeatureValue::MainStress));
        assert!(!f.is(FeatureValue::Unstressed));
        assert_eq!(f.to_string(), "main-stress");
    }

    #[test]
    fn set_rejects_foreign_value() {
        let mut f = Feature::unset(FeatureType::Stress);
        f.set(Some(FeatureValue::Unstressed)).unwrap();
        let err = f.set(Some(FeatureValue::Long)).unwrap_err();
        assert!(matches!(err, OtError::InvalidFeatureValue { .. }));
        // Unchanged after a failed set.
        assert!(f.is(FeatureValue::Unstressed));
    }

    #[test]
    fn set_none_resets() {
        let mut f = Feature::unset(FeatureType::Length);
        f.set(Some(FeatureValue::Long)).unwrap();
        f.set(None).unwrap();
        assert!(!f.is_set());
    }

    #[test]
    fn settings_cover_the_domain() {
        let settings: Vec<Feature> = FeatureType::Stress.settings().collect();
        assert_eq!(settings.len(), 2);
        assert!(settings[0].is(FeatureValue::Unstressed));
        assert!(settings[1].is(FeatureValue::MainStress));
        assert!(settings.iter().all(|f| f.feature_type() == FeatureType::Stress));
    }

    #[test]
    fn each_value_follows_domain() {
        let f = Feature::unset(FeatureType::Length);
        let values: Vec<_> = f.each_value().collect();
        assert_eq!(values, vec![FeatureValue::Short, FeatureValue::Long]);
    }
}
