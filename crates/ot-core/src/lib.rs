//! Core representation types for Optimality-Theoretic analysis.
//!
//! This crate holds the data model shared by candidate generation and the
//! typology generators: typed features, elements built from them, ordered
//! forms, and the morphology (morphemes, lexical entries, lexicons) that
//! inputs are resolved from.
//!
//! # Architecture
//!
//! - [`feature`] -- Feature types, values, domains and the `Feature` slot
//! - [`element`] -- The `Element` capability trait and the `Syllable` kind
//! - [`form`] -- `UnderlyingForm`, `Input` and `Output` containers
//! - [`morphology`] -- Morphemes, morphological words, entries and lexicons

pub mod element;
pub mod feature;
pub mod form;
pub mod morphology;

/// Error type for misuse of the representation layer.
///
/// Every variant signals a caller programming error and is raised at the
/// point of the offending call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtError {
    #[error("invalid underlying form length: {0}")]
    InvalidLength(i32),
    #[error("invalid morphological type: {0}")]
    InvalidMorphologicalType(String),
    #[error("element kind {element} has no feature {feature}")]
    InvalidFeatureType { feature: String, element: String },
    #[error("value {value} is not in the domain of feature {feature}")]
    InvalidFeatureValue { feature: String, value: String },
    #[error("no lexical entry for morpheme {0}")]
    UnknownMorpheme(String),
    #[error("lexical entry for morpheme {0} has unset features")]
    UnderspecifiedEntry(String),
    #[error("{count} morpheme ids after {id_base} exceed the id range")]
    IdOverflow { id_base: u32, count: usize },
}

pub type Result<T> = std::result::Result<T, OtError>;
