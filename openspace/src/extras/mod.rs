//! Extra functionalities that can be used with the map widget showing OpenSpace tiles.

mod terms;

pub use terms::{TermsLayout, TermsOfUse};
