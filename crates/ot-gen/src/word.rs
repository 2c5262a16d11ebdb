// GEN's working object: an input, a growing output, and the IO correspondence
//
// Words are extended one position at a time. Each extension appends one
// output element and records one input/output correspondence pair.

use std::sync::Arc;

use ot_core::element::Element;
use ot_core::form::{Input, Output};

// ---------------------------------------------------------------------------
// Correspondence
// ---------------------------------------------------------------------------

/// Bidirectional input/output index correspondence.
///
/// Built incrementally, one pair at a time. Positions without a recorded
/// pair map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correspondence {
    input_to_output: Vec<Option<usize>>,
    output_to_input: Vec<Option<usize>>,
}

impl Correspondence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that input position `input` corresponds to the fresh output
    /// position `output`, dropping any pair previously recorded for `input`.
    pub(crate) fn add(&mut self, input: usize, output: usize) {
        if let Some(Some(old)) = self.input_to_output.get(input).copied() {
            self.output_to_input[old] = None;
        }
        set_at(&mut self.input_to_output, input, output);
        set_at(&mut self.output_to_input, output, input);
    }

    /// Output position corresponding to input position `input`.
    pub fn output_for(&self, input: usize) -> Option<usize> {
        self.input_to_output.get(input).copied().flatten()
    }

    /// Input position corresponding to output position `output`.
    pub fn input_for(&self, output: usize) -> Option<usize> {
        self.output_to_input.get(output).copied().flatten()
    }

    /// Recorded pairs as `(input, output)`, ordered by input position.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.input_to_output
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.map(|o| (i, o)))
    }

    /// Number of recorded pairs.
    pub fn len(&self) -> usize {
        self.input_to_output.iter().filter(|o| o.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every one of `inputs` input positions and `outputs` output
    /// positions takes part in exactly one pair.
    pub fn is_bijection(&self, inputs: usize, outputs: usize) -> bool {
        inputs == outputs
            && (0..inputs).all(|i| self.output_for(i).is_some_and(|o| o < outputs))
            && (0..outputs).all(|o| self.input_for(o).is_some_and(|i| i < inputs))
    }
}

fn set_at(map: &mut Vec<Option<usize>>, index: usize, value: usize) {
    if map.len() <= index {
        map.resize(index + 1, None);
    }
    map[index] = Some(value);
}

// ---------------------------------------------------------------------------
// Word
// ---------------------------------------------------------------------------

/// A partially (or fully) built candidate.
#[derive(Debug, Clone)]
pub struct Word<E: Element> {
    input: Arc<Input<E>>,
    output: Output<E>,
    correspondence: Correspondence,
}

impl<E: Element> Word<E> {
    /// A word with an empty output over `input`.
    pub fn new(input: Arc<Input<E>>) -> Self {
        let output = Output::with_capacity(input.len());
        Self {
            input,
            output,
            correspondence: Correspondence::new(),
        }
    }

    pub fn input(&self) -> &Input<E> {
        &self.input
    }

    pub fn shared_input(&self) -> &Arc<Input<E>> {
        &self.input
    }

    pub fn output(&self) -> &Output<E> {
        &self.output
    }

    pub fn correspondence(&self) -> &Correspondence {
        &self.correspondence
    }

    /// Whether every input position has been given an output element.
    pub fn is_complete(&self) -> bool {
        self.output.len() == self.input.len()
    }

    /// Append `element` to the output as the correspondent of input
    /// position `input_index`. An input position has at most one
    /// correspondent; pushing another one for it replaces the earlier pair.
    pub fn push(&mut self, input_index: usize, element: E) {
        let output_index = self.output.len();
        self.output.push(element);
        self.correspondence.add(input_index, output_index);
    }

    /// The output element corresponding to input position `input_index`.
    pub fn output_correspondent(&self, input_index: usize) -> Option<&E> {
        self.correspondence
            .output_for(input_index)
            .and_then(|o| self.output.get(o))
    }

    /// The input element corresponding to output position `output_index`.
    pub fn input_correspondent(&self, output_index: usize) -> Option<&E> {
        self.correspondence
            .input_for(output_index)
            .and_then(|i| self.input.get(i))
    }

    /// Corresponding `(input, output)` element pairs in input order.
    pub fn corresponding_elements(&self) -> impl Iterator<Item = (&E, &E)> + '_ {
        self.correspondence
            .pairs()
            .filter_map(|(i, o)| Some((self.input.get(i)?, self.output.get(o)?)))
    }

    pub(crate) fn into_parts(self) -> (Arc<Input<E>>, Output<E>, Correspondence) {
        (self.input, self.output, self.correspondence)
    }
}
