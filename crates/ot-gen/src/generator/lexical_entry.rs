// LexicalEntryGenerator: one fresh morpheme per underlying form

use ot_core::element::Element;
use ot_core::morphology::{LexicalEntry, Morpheme, MorphemeType};
use ot_core::{OtError, Result};

use super::UnderlyingFormGenerator;

/// Pairs every underlying form of a length with a newly created morpheme.
#[derive(Debug, Clone)]
pub struct LexicalEntryGenerator<E: Element> {
    uf_generator: UnderlyingFormGenerator<E>,
}

impl<E: Element> LexicalEntryGenerator<E> {
    pub fn new(uf_generator: UnderlyingFormGenerator<E>) -> Self {
        Self { uf_generator }
    }

    /// One entry per underlying form of `length`, in form order.
    ///
    /// Morphemes are labelled `{type letter}{id}` with ids running from
    /// `id_base + 1`. Fails with `InvalidLength` for a negative length and
    /// with `IdOverflow` if the last id would not fit in a `u32`.
    pub fn lexical_entries(
        &self,
        length: i32,
        morpheme_type: MorphemeType,
        id_base: u32,
    ) -> Result<Vec<LexicalEntry<E>>> {
        let forms = self.uf_generator.underlying_forms(length)?;
        u32::try_from(forms.len())
            .ok()
            .and_then(|count| id_base.checked_add(count))
            .ok_or(OtError::IdOverflow {
                id_base,
                count: forms.len(),
            })?;

        // Offsets stay within the checked range above.
        let entries: Vec<LexicalEntry<E>> = forms
            .into_iter()
            .zip(1u32..)
            .map(|(form, offset)| {
                let label = format!("{}{}", morpheme_type.letter(), id_base + offset);
                LexicalEntry::new(Morpheme::new(morpheme_type, label), form)
            })
            .collect();

        log::debug!(
            "lexical entries: {} {} morphemes of length {}",
            entries.len(),
            morpheme_type,
            length
        );
        Ok(entries)
    }

    /// As [`lexical_entries`](Self::lexical_entries), with the morphological
    /// type given by name (`root`, `suffix`, `prefix`).
    ///
    /// Fails with `InvalidMorphologicalType` for any other name.
    pub fn lexical_entries_named(
        &self,
        length: i32,
        morpheme_type: &str,
        id_base: u32,
    ) -> Result<Vec<LexicalEntry<E>>> {
        self.lexical_entries(length, morpheme_type.parse()?, id_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ElementGenerator;
    use ot_core::element::Syllable;
    use ot_core::OtError;

    fn generator() -> LexicalEntryGenerator<Syllable> {
        LexicalEntryGenerator::new(UnderlyingFormGenerator::new(ElementGenerator::for_kind()))
    }

    #[test]
    fn labels_run_from_id_base() {
        let entries = generator()
            .lexical_entries(1, MorphemeType::Suffix, 4)
            .unwrap();
        let labels: Vec<&str> = entries.iter().map(|e| e.morpheme().label()).collect();
        assert_eq!(labels, vec!["s5", "s6", "s7", "s8"]);
    }

    #[test]
    fn entries_follow_form_order_and_bind_elements() {
        let entries = generator().lexical_entries(2, MorphemeType::Root, 0).unwrap();
        assert_eq!(entries.len(), 16);
        assert_eq!(entries[0].to_string(), "r1 /s.-s./");
        for entry in &entries {
            assert_eq!(entry.morpheme().morpheme_type(), MorphemeType::Root);
            assert!(
                entry
                    .underlying_form()
                    .iter()
                    .all(|e| e.morpheme() == Some(entry.morpheme()))
            );
        }
    }

    #[test]
    fn morphemes_are_distinct() {
        let entries = generator().lexical_entries(1, MorphemeType::Prefix, 0).unwrap();
        assert_ne!(entries[0].morpheme(), entries[1].morpheme());
        assert_eq!(entries[3].morpheme().label(), "p4");
    }

    #[test]
    fn named_type_is_validated() {
        assert!(generator().lexical_entries_named(1, "root", 0).is_ok());
        assert_eq!(
            generator().lexical_entries_named(1, "clitic", 0).unwrap_err(),
            OtError::InvalidMorphologicalType("clitic".into())
        );
    }

    #[test]
    fn ids_up_to_u32_max_are_accepted() {
        let entries = generator()
            .lexical_entries(1, MorphemeType::Root, u32::MAX - 4)
            .unwrap();
        assert_eq!(entries[3].morpheme().label(), format!("r{}", u32::MAX));
    }

    #[test]
    fn ids_past_u32_max_are_rejected() {
        for id_base in [u32::MAX - 3, u32::MAX - 1, u32::MAX] {
            assert_eq!(
                generator()
                    .lexical_entries(1, MorphemeType::Suffix, id_base)
                    .unwrap_err(),
                OtError::IdOverflow { id_base, count: 4 }
            );
        }
    }

    #[test]
    fn negative_length_propagates() {
        assert_eq!(
            generator()
                .lexical_entries(-2, MorphemeType::Root, 0)
                .unwrap_err(),
            OtError::InvalidLength(-2)
        );
    }
}
