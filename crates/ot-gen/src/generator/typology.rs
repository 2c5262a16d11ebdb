// Root+suffix typology builder
//
// Generates all root and suffix entries, registers them in one lexicon,
// forms every (root, suffix) morphological word and hands the lot to the
// competition generator. The resulting competition list is the raw search
// space of a factorial typology.

use serde::{Deserialize, Serialize};

use ot_core::element::Element;
use ot_core::morphology::{Lexicon, MorphWord, MorphemeType};
use ot_core::Result;

use super::{CompetitionGenerator, ElementGenerator, LexicalEntryGenerator, UnderlyingFormGenerator};
use crate::candidate::Competition;
use crate::system::System;

/// Sizes and label numbering of a root+suffix typology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypologyOptions {
    /// Elements per root underlying form.
    pub root_length: i32,
    /// Elements per suffix underlying form.
    pub suffix_length: i32,
    /// Root labels start at `root_id_base + 1`.
    pub root_id_base: u32,
    /// Suffix labels start at `suffix_id_base + 1`.
    pub suffix_id_base: u32,
}

impl Default for TypologyOptions {
    /// One-element roots and suffixes, both numbered from 1.
    fn default() -> Self {
        Self {
            root_length: 1,
            suffix_length: 1,
            root_id_base: 0,
            suffix_id_base: 0,
        }
    }
}

/// A generated typology: the lexicon, the morphological words formed from
/// it, and one competition per word (same order).
#[derive(Debug, Clone)]
pub struct Typology<E: Element> {
    pub lexicon: Lexicon<E>,
    pub morph_words: Vec<MorphWord>,
    pub competitions: Vec<Competition<E>>,
}

impl<E: Element> Typology<E> {
    /// Total number of candidates across all competitions.
    pub fn candidate_count(&self) -> usize {
        self.competitions.iter().map(Competition::len).sum()
    }
}

/// Build the root+suffix typology of `system` over the element kind `E`.
///
/// Roots and suffixes get independent label sequences. Morphological words
/// are ordered root-major: every suffix of the first root, then of the
/// second, and so on.
pub fn root_suffix_typology<E: Element>(
    system: &System<E>,
    options: &TypologyOptions,
) -> Result<Typology<E>> {
    let entry_generator = LexicalEntryGenerator::new(UnderlyingFormGenerator::new(
        ElementGenerator::<E>::for_kind(),
    ));
    let roots = entry_generator.lexical_entries(
        options.root_length,
        MorphemeType::Root,
        options.root_id_base,
    )?;
    let suffixes = entry_generator.lexical_entries(
        options.suffix_length,
        MorphemeType::Suffix,
        options.suffix_id_base,
    )?;

    let morph_words: Vec<MorphWord> = roots
        .iter()
        .flat_map(|root| {
            suffixes.iter().map(move |suffix| {
                MorphWord::new(vec![root.morpheme().clone(), suffix.morpheme().clone()])
            })
        })
        .collect();

    let mut lexicon = Lexicon::new();
    lexicon.extend(roots);
    lexicon.extend(suffixes);

    let competitions = CompetitionGenerator::new(system).competitions(&morph_words, &lexicon)?;

    let typology = Typology {
        lexicon,
        morph_words,
        competitions,
    };
    log::info!(
        "root+suffix typology: {} entries, {} words, {} candidates",
        typology.lexicon.len(),
        typology.morph_words.len(),
        typology.candidate_count()
    );
    Ok(typology)
}
