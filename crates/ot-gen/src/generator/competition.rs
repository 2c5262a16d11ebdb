// CompetitionGenerator: one competition per morphological word

use ot_core::element::Element;
use ot_core::form::Input;
use ot_core::morphology::{Lexicon, MorphWord};
use ot_core::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::candidate::Competition;
use crate::system::System;

/// Resolves morphological words to inputs and runs GEN on each.
#[derive(Debug, Clone)]
pub struct CompetitionGenerator<'a, E: Element> {
    system: &'a System<E>,
}

impl<'a, E: Element> CompetitionGenerator<'a, E> {
    pub fn new(system: &'a System<E>) -> Self {
        Self { system }
    }

    /// The competition of a single morphological word.
    pub fn competition(&self, morph_word: &MorphWord, lexicon: &Lexicon<E>) -> Result<Competition<E>> {
        let input = Input::resolve(morph_word, lexicon)?;
        Ok(self.system.generate(&input))
    }

    /// One competition per entry of `morph_words`, in the same order.
    ///
    /// Fails with `UnknownMorpheme` or `UnderspecifiedEntry` if a morpheme
    /// lacks a fully specified entry in `lexicon`.
    #[cfg(not(feature = "parallel"))]
    pub fn competitions(&self, morph_words: &[MorphWord], lexicon: &Lexicon<E>) -> Result<Vec<Competition<E>>> {
        morph_words
            .iter()
            .map(|mw| self.competition(mw, lexicon))
            .collect()
    }

    /// One competition per entry of `morph_words`, in the same order.
    ///
    /// Words are resolved and generated in parallel; each call touches only
    /// its own input.
    #[cfg(feature = "parallel")]
    pub fn competitions(&self, morph_words: &[MorphWord], lexicon: &Lexicon<E>) -> Result<Vec<Competition<E>>> {
        morph_words
            .par_iter()
            .map(|mw| self.competition(mw, lexicon))
            .collect()
    }
}
