// The stress-length constraint family
//
// Markedness constraints read only the output; faithfulness constraints
// compare corresponding input/output elements. All of them are written
// against the Element capability interface and read the stress and length
// features by type.

use std::sync::Arc;

use ot_core::element::Element;
use ot_core::feature::{FeatureType, FeatureValue};

use super::{Constraint, ConstraintKind, ConstraintRef};
use crate::word::Word;

fn stressed<E: Element>(e: &E) -> bool {
    e.has(FeatureType::Stress, FeatureValue::MainStress)
}

fn long<E: Element>(e: &E) -> bool {
    e.has(FeatureType::Length, FeatureValue::Long)
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Adjacent output pairs satisfying `pred`.
fn adjacent_pairs<E: Element>(word: &Word<E>, pred: impl Fn(&E, &E) -> bool) -> u32 {
    count(
        word.output()
            .elements()
            .windows(2)
            .filter(|w| pred(&w[0], &w[1]))
            .count(),
    )
}

/// Corresponding pairs that disagree on `feature_type`.
fn ident<E: Element>(word: &Word<E>, feature_type: FeatureType) -> u32 {
    count(
        word.corresponding_elements()
            .filter(|(i, o)| {
                let iv = i.feature(feature_type).ok().and_then(|f| f.value());
                let ov = o.feature(feature_type).ok().and_then(|f| f.value());
                iv != ov
            })
            .count(),
    )
}

// ---------------------------------------------------------------------------
// Markedness
// ---------------------------------------------------------------------------

/// Weight-to-stress: one violation per long unstressed syllable.
pub struct Wsp;

impl<E: Element> Constraint<E> for Wsp {
    fn name(&self) -> &str {
        "WSP"
    }

    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Markedness
    }

    fn eval(&self, word: &Word<E>) -> u32 {
        count(word.output().iter().filter(|e| long(*e) && !stressed(*e)).count())
    }
}

/// One violation per syllable preceding the leftmost stressed syllable.
pub struct MainLeft;

impl<E: Element> Constraint<E> for MainLeft {
    fn name(&self) -> &str {
        "MainLeft"
    }

    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Markedness
    }

    fn eval(&self, word: &Word<E>) -> u32 {
        word.output()
            .iter()
            .position(|e| stressed(e))
            .map_or(0, count)
    }
}

/// One violation per syllable following the rightmost stressed syllable.
pub struct MainRight;

impl<E: Element> Constraint<E> for MainRight {
    fn name(&self) -> &str {
        "MainRight"
    }

    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Markedness
    }

    fn eval(&self, word: &Word<E>) -> u32 {
        let output = word.output();
        output
            .iter()
            .rposition(|e| stressed(e))
            .map_or(0, |p| count(output.len() - p - 1))
    }
}

/// One violation per long syllable.
pub struct NoLong;

impl<E: Element> Constraint<E> for NoLong {
    fn name(&self) -> &str {
        "NoLong"
    }

    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Markedness
    }

    fn eval(&self, word: &Word<E>) -> u32 {
        count(word.output().iter().filter(|e| long(*e)).count())
    }
}

/// One violation per pair of adjacent stressed syllables.
pub struct NoClash;

impl<E: Element> Constraint<E> for NoClash {
    fn name(&self) -> &str {
        "*Clash"
    }

    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Markedness
    }

    fn eval(&self, word: &Word<E>) -> u32 {
        adjacent_pairs(word, |a, b| stressed(a) && stressed(b))
    }
}

/// One violation per pair of adjacent unstressed syllables.
pub struct NoLapse;

impl<E: Element> Constraint<E> for NoLapse {
    fn name(&self) -> &str {
        "*Lapse"
    }

    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Markedness
    }

    fn eval(&self, word: &Word<E>) -> u32 {
        adjacent_pairs(word, |a, b| !stressed(a) && !stressed(b))
    }
}

// ---------------------------------------------------------------------------
// Faithfulness
// ---------------------------------------------------------------------------

pub struct IdentStress;

impl<E: Element> Constraint<E> for IdentStress {
    fn name(&self) -> &str {
        "Ident[stress]"
    }

    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Faithfulness
    }

    fn eval(&self, word: &Word<E>) -> u32 {
        ident(word, FeatureType::Stress)
    }
}

pub struct IdentLength;

impl<E: Element> Constraint<E> for IdentLength {
    fn name(&self) -> &str {
        "Ident[length]"
    }

    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Faithfulness
    }

    fn eval(&self, word: &Word<E>) -> u32 {
        ident(word, FeatureType::Length)
    }
}

// ---------------------------------------------------------------------------
// Constraint lists
// ---------------------------------------------------------------------------

/// The six constraints every stress-length system starts from.
pub fn base_constraints<E: Element>() -> Vec<ConstraintRef<E>> {
    vec![
        Arc::new(Wsp),
        Arc::new(MainLeft),
        Arc::new(MainRight),
        Arc::new(NoLong),
        Arc::new(IdentStress),
        Arc::new(IdentLength),
    ]
}

pub fn clash_extension<E: Element>() -> Vec<ConstraintRef<E>> {
    vec![Arc::new(NoClash)]
}

pub fn lapse_extension<E: Element>() -> Vec<ConstraintRef<E>> {
    vec![Arc::new(NoLapse)]
}
