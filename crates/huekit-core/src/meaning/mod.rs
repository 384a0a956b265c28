// crates/huekit-core/src/meaning/mod.rs

pub mod interpret;
pub mod table;

pub use interpret::{classify, Interpreter, Tone, INVALID_COLOR_MESSAGE, UNDETERMINED_MESSAGE};
pub use table::MeaningTable;

use serde::Serialize;

use crate::color::Color;

/// A color paired with its interpretation, as handed to the boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorItem {
    pub hex: String,
    pub meaning: String,
}

impl ColorItem {
    pub fn new(color: Color, meaning: impl Into<String>) -> Self {
        Self {
            hex: color.to_hex(),
            meaning: meaning.into(),
        }
    }
}
