// Morphology: morphemes, morphological words, lexical entries and lexicons
//
// A Morpheme is an identity. It is created by the lexical entry generator,
// owned by the LexicalEntry that pairs it with an underlying form, and
// referenced by every element bound to it. Equality and hashing are by
// identity, not by label.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::form::UnderlyingForm;
use crate::{OtError, Result};

// ---------------------------------------------------------------------------
// MorphemeType
// ---------------------------------------------------------------------------

/// Morphological category of a morpheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphemeType {
    Root,
    Suffix,
    Prefix,
}

impl MorphemeType {
    /// Letter prefixed to generated labels (`r1`, `s3`, `p2`).
    pub const fn letter(self) -> char {
        match self {
            MorphemeType::Root => 'r',
            MorphemeType::Suffix => 's',
            MorphemeType::Prefix => 'p',
        }
    }

    pub fn from_letter(letter: char) -> Result<Self> {
        match letter {
            'r' => Ok(MorphemeType::Root),
            's' => Ok(MorphemeType::Suffix),
            'p' => Ok(MorphemeType::Prefix),
            other => Err(OtError::InvalidMorphologicalType(other.to_string())),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MorphemeType::Root => "root",
            MorphemeType::Suffix => "suffix",
            MorphemeType::Prefix => "prefix",
        }
    }
}

impl FromStr for MorphemeType {
    type Err = OtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "root" => Ok(MorphemeType::Root),
            "suffix" => Ok(MorphemeType::Suffix),
            "prefix" => Ok(MorphemeType::Prefix),
            other => Err(OtError::InvalidMorphologicalType(other.to_string())),
        }
    }
}

impl fmt::Display for MorphemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Morpheme
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct MorphemeData {
    morpheme_type: MorphemeType,
    label: String,
}

/// Shared handle to a morpheme identity.
///
/// Cloning the handle does not create a new morpheme: all clones compare
/// equal to each other and to nothing else, even a fresh morpheme with the
/// same type and label.
#[derive(Debug, Clone)]
pub struct Morpheme(Arc<MorphemeData>);

impl Morpheme {
    pub fn new(morpheme_type: MorphemeType, label: impl Into<String>) -> Self {
        Self(Arc::new(MorphemeData {
            morpheme_type,
            label: label.into(),
        }))
    }

    pub fn morpheme_type(&self) -> MorphemeType {
        self.0.morpheme_type
    }

    pub fn label(&self) -> &str {
        &self.0.label
    }
}

impl PartialEq for Morpheme {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Morpheme {}

impl std::hash::Hash for Morpheme {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.label)
    }
}

// ---------------------------------------------------------------------------
// MorphWord
// ---------------------------------------------------------------------------

/// Ordered morpheme sequence describing how a surface word is composed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MorphWord {
    morphemes: Vec<Morpheme>,
}

impl MorphWord {
    pub fn new(morphemes: Vec<Morpheme>) -> Self {
        Self { morphemes }
    }

    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }
}

impl fmt::Display for MorphWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.morphemes.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// LexicalEntry
// ---------------------------------------------------------------------------

/// A morpheme paired with its underlying form.
///
/// Every element of the form is bound to the entry's morpheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry<E: Element> {
    morpheme: Morpheme,
    underlying_form: UnderlyingForm<E>,
}

impl<E: Element> LexicalEntry<E> {
    /// Pair `morpheme` with `underlying_form`, rebinding each element of
    /// the form to `morpheme`.
    pub fn new(morpheme: Morpheme, mut underlying_form: UnderlyingForm<E>) -> Self {
        for element in underlying_form.iter_mut() {
            element.set_morpheme(Some(morpheme.clone()));
        }
        Self {
            morpheme,
            underlying_form,
        }
    }

    pub fn morpheme(&self) -> &Morpheme {
        &self.morpheme
    }

    pub fn underlying_form(&self) -> &UnderlyingForm<E> {
        &self.underlying_form
    }
}

impl<E: Element> fmt::Display for LexicalEntry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}/", self.morpheme, self.underlying_form)
    }
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// Collection of lexical entries keyed by morpheme.
///
/// Iteration follows insertion order. Adding an entry for a morpheme that
/// is already present replaces the earlier entry in place.
#[derive(Debug, Clone)]
pub struct Lexicon<E: Element> {
    entries: Vec<LexicalEntry<E>>,
    index: HashMap<Morpheme, usize>,
}

impl<E: Element> Lexicon<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn add(&mut self, entry: LexicalEntry<E>) {
        match self.index.get(entry.morpheme()) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(entry.morpheme().clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Look up the entry registered for `morpheme`.
    pub fn entry_for(&self, morpheme: &Morpheme) -> Option<&LexicalEntry<E>> {
        self.index.get(morpheme).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[LexicalEntry<E>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every registered underlying form has all features set.
    pub fn is_fully_specified(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.underlying_form().is_fully_specified())
    }
}

impl<E: Element> Default for Lexicon<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> Extend<LexicalEntry<E>> for Lexicon<E> {
    fn extend<I: IntoIterator<Item = LexicalEntry<E>>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}
