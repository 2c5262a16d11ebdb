//! Candidate generation (GEN) and combinatorial typology generators for
//! Optimality-Theoretic stress-length systems.
//!
//! GEN maps an input to its competition: every structurally possible output,
//! with one violation count per constraint of the system. The generators
//! build the exhaustive search space GEN is run over, from single elements
//! up to the full root+suffix typology.
//!
//! # Architecture
//!
//! - [`word`] -- GEN's working object and the IO correspondence
//! - [`candidate`] -- Immutable candidates and competitions
//! - [`constraint`] -- The constraint trait and the stress-length family
//! - [`policy`] -- Stress-count policies as bucket automata
//! - [`generation`] -- The GEN engine
//! - [`system`] -- Constraint lists plus policy, and the stock variants
//! - [`generator`] -- Element, underlying form, lexical entry, competition
//!   and typology generators

pub mod candidate;
pub mod constraint;
pub mod generation;
pub mod generator;
pub mod policy;
pub mod system;
pub mod word;

pub use candidate::{Candidate, Competition};
pub use policy::StressPolicy;
pub use system::{System, SystemVariant};
