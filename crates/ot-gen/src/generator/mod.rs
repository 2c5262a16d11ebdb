// Combinatorial generators building the exhaustive search space
//
// Each stage enumerates a Cartesian product over the one before it:
// elements -> underlying forms -> lexical entries -> competitions, composed
// by the root+suffix typology builder.

mod competition;
mod element;
mod lexical_entry;
mod typology;
mod underlying_form;

pub use competition::CompetitionGenerator;
pub use element::ElementGenerator;
pub use lexical_entry::LexicalEntryGenerator;
pub use typology::{Typology, TypologyOptions, root_suffix_typology};
pub use underlying_form::UnderlyingFormGenerator;
