// Ordered element containers: UnderlyingForm, Input, Output
//
// All three are append-only sequences of elements with elementwise
// equality. Once built (by a generator or by morphological resolution) they
// are treated as immutable by candidate generation.

use std::fmt;

use crate::element::Element;
use crate::morphology::{Lexicon, MorphWord};
use crate::{OtError, Result};

/// Shared sequence API for the element containers.
macro_rules! element_sequence {
    ($name:ident) => {
        impl<E: Element> $name<E> {
            pub fn push(&mut self, element: E) {
                self.elements.push(element);
            }

            pub fn len(&self) -> usize {
                self.elements.len()
            }

            pub fn is_empty(&self) -> bool {
                self.elements.is_empty()
            }

            pub fn get(&self, index: usize) -> Option<&E> {
                self.elements.get(index)
            }

            pub fn elements(&self) -> &[E] {
                &self.elements
            }

            pub fn iter(&self) -> std::slice::Iter<'_, E> {
                self.elements.iter()
            }

            /// Whether every element has all of its features set.
            pub fn is_fully_specified(&self) -> bool {
                self.elements.iter().all(Element::is_fully_specified)
            }
        }

        impl<E: Element> PartialEq for $name<E> {
            fn eq(&self, other: &Self) -> bool {
                self.elements == other.elements
            }
        }

        impl<E: Element> Eq for $name<E> {}

        /// Elements joined with `-`.
        impl<E: Element> fmt::Display for $name<E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (i, e) in self.elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str("-")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
        }

        impl<'a, E: Element> IntoIterator for &'a $name<E> {
            type Item = &'a E;
            type IntoIter = std::slice::Iter<'a, E>;

            fn into_iter(self) -> Self::IntoIter {
                self.elements.iter()
            }
        }
    };
}

// ---------------------------------------------------------------------------
// UnderlyingForm
// ---------------------------------------------------------------------------

/// The lexically stored form of a morpheme.
#[derive(Debug, Clone)]
pub struct UnderlyingForm<E: Element> {
    elements: Vec<E>,
}

impl<E: Element> UnderlyingForm<E> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.elements.iter_mut()
    }

    /// A copy of this form with `element` appended.
    pub fn extended(&self, element: E) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.extend(self.elements.iter().cloned());
        elements.push(element);
        Self { elements }
    }
}

impl<E: Element> Default for UnderlyingForm<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> FromIterator<E> for UnderlyingForm<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

element_sequence!(UnderlyingForm);

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The input to GEN: concatenated underlying forms plus the morphological
/// word they were resolved from. The label does not take part in equality.
#[derive(Debug, Clone)]
pub struct Input<E: Element> {
    elements: Vec<E>,
    morph_word: MorphWord,
}

impl<E: Element> Input<E> {
    pub fn new(morph_word: MorphWord) -> Self {
        Self {
            elements: Vec::new(),
            morph_word,
        }
    }

    /// Resolve `morph_word` against `lexicon`, concatenating the underlying
    /// forms of its morphemes in order.
    ///
    /// Fails with `UnknownMorpheme` if a morpheme has no entry, and with
    /// `UnderspecifiedEntry` if its underlying form still has unset features.
    pub fn resolve(morph_word: &MorphWord, lexicon: &Lexicon<E>) -> Result<Self> {
        let mut input = Self::new(morph_word.clone());
        for morpheme in morph_word.morphemes() {
            let entry = lexicon
                .entry_for(morpheme)
                .ok_or_else(|| OtError::UnknownMorpheme(morpheme.label().to_string()))?;
            let form = entry.underlying_form();
            if !form.is_fully_specified() {
                return Err(OtError::UnderspecifiedEntry(morpheme.label().to_string()));
            }
            input.elements.extend(form.iter().cloned());
        }
        Ok(input)
    }

    pub fn morph_word(&self) -> &MorphWord {
        &self.morph_word
    }
}

impl<E: Element> From<UnderlyingForm<E>> for Input<E> {
    fn from(form: UnderlyingForm<E>) -> Self {
        Self {
            elements: form.elements,
            morph_word: MorphWord::default(),
        }
    }
}

impl<E: Element> FromIterator<E> for Input<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
            morph_word: MorphWord::default(),
        }
    }
}

element_sequence!(Input);

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A hypothesized surface form.
#[derive(Debug, Clone, Hash)]
pub struct Output<E: Element> {
    elements: Vec<E>,
}

impl<E: Element> Output<E> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }
}

impl<E: Element> Default for Output<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> FromIterator<E> for Output<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

element_sequence!(Output);
