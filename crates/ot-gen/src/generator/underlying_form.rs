// UnderlyingFormGenerator: every underlying form of a given length

use ot_core::element::Element;
use ot_core::form::UnderlyingForm;
use ot_core::{OtError, Result};

use super::ElementGenerator;

/// Enumerates underlying forms as sequences over an element generator.
#[derive(Debug, Clone)]
pub struct UnderlyingFormGenerator<E: Element> {
    element_generator: ElementGenerator<E>,
}

impl<E: Element> UnderlyingFormGenerator<E> {
    pub fn new(element_generator: ElementGenerator<E>) -> Self {
        Self { element_generator }
    }

    pub fn element_generator(&self) -> &ElementGenerator<E> {
        &self.element_generator
    }

    /// Every form of exactly `length` elements.
    ///
    /// Starting from the empty form, each round replaces the working set
    /// with {forms} x {elements}, appending one element per pair. The result
    /// has `element_count ^ length` forms; length 0 yields one empty form.
    ///
    /// Fails with `InvalidLength` if `length` is negative.
    pub fn underlying_forms(&self, length: i32) -> Result<Vec<UnderlyingForm<E>>> {
        if length < 0 {
            return Err(OtError::InvalidLength(length));
        }

        let elements = self.element_generator.elements();
        let mut forms = vec![UnderlyingForm::new()];
        for _ in 0..length {
            forms = forms
                .iter()
                .flat_map(|form| elements.iter().map(move |e| form.extended(e.clone())))
                .collect();
        }

        log::debug!("underlying forms of length {}: {}", length, forms.len());
        Ok(forms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ot_core::element::Syllable;
    use ot_core::feature::{Feature, FeatureType};
    use ot_core::morphology::Morpheme;

    /// A one-feature element kind, so each position has two choices.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Beat {
        features: [Feature; 1],
        morpheme: Option<Morpheme>,
    }

    impl std::fmt::Display for Beat {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.features[0].symbol())
        }
    }

    impl Element for Beat {
        const KIND: &'static str = "beat";
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

    fn beats() -> UnderlyingFormGenerator<Beat> {
        UnderlyingFormGenerator::new(ElementGenerator::for_kind())
    }

    #[test]
    fn form_counts_grow_as_powers() {
        let generator = beats();
        for (length, expected) in [(0, 1), (1, 2), (2, 4)] {
            let forms = generator.underlying_forms(length).unwrap();
            assert_eq!(forms.len(), expected);
            assert!(forms.iter().all(|f| f.len() == length as usize));
        }
    }

    #[test]
    fn length_zero_is_one_empty_form() {
        let forms = beats().underlying_forms(0).unwrap();
        assert_eq!(forms.len(), 1);
        assert!(forms[0].is_empty());
    }

    #[test]
    fn negative_length_is_rejected() {
        assert_eq!(
            beats().underlying_forms(-1).unwrap_err(),
            OtError::InvalidLength(-1)
        );
    }

    #[test]
    fn forms_are_in_lexicographic_order() {
        let forms = beats().underlying_forms(2).unwrap();
        let rendered: Vec<String> = forms.iter().map(|f| f.to_string()).collect();
        assert_eq!(rendered, vec![".-.", ".-'", "'-.", "'-'"]);
    }

    #[test]
    fn syllable_forms_of_length_two() {
        let generator = UnderlyingFormGenerator::new(ElementGenerator::<Syllable>::for_kind());
        let forms = generator.underlying_forms(2).unwrap();
        assert_eq!(forms.len(), 16);
        assert_eq!(forms[0].to_string(), "s.-s.");
        assert!(forms.iter().all(UnderlyingForm::is_fully_specified));
    }
}
