// ElementGenerator: every fully specified element of a kind
//
// An n-ary Cartesian product over the declared features, built by repeated
// one-feature fan-out: start from one all-unset element, and for each
// feature in declared order replace the working list with
// {working elements} x {that feature's domain values}.

use ot_core::element::Element;
use ot_core::feature::Feature;

/// The complete, ordered set of element value combinations for one kind.
#[derive(Debug, Clone)]
pub struct ElementGenerator<E: Element> {
    elements: Vec<E>,
}

impl<E: Element> ElementGenerator<E> {
    /// Enumerate every element reachable from `prototype` by fixing each of
    /// its declared features. The prototype's current values are ignored;
    /// its morpheme affiliation is carried by every generated element.
    pub fn new(prototype: E) -> Self {
        let mut blank = prototype;
        for feature in blank.features_mut() {
            *feature = Feature::unset(feature.feature_type());
        }

        let mut elements = vec![blank];
        for k in 0..elements[0].features().len() {
            let feature_type = elements[0].features()[k].feature_type();
            elements = elements
                .iter()
                .flat_map(|element| {
                    feature_type.settings().map(move |setting| {
                        let mut next = element.clone();
                        next.features_mut()[k] = setting;
                        next
                    })
                })
                .collect();
        }

        log::debug!("element generator: {} {} combinations", elements.len(), E::KIND);
        Self { elements }
    }

    /// Generator over the kind's own prototype.
    pub fn for_kind() -> Self {
        Self::new(E::prototype())
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<E> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
