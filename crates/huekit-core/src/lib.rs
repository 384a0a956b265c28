// crates/huekit-core/src/lib.rs

pub mod error;

pub mod color;
pub mod contrast;
pub mod export;
pub mod extract;
pub mod harmony;
pub mod meaning;

pub use crate::color::{Color, Hsl};
pub use crate::contrast::{contrast, ContrastReport};
pub use crate::error::{ColorError, Result};
pub use crate::export::{export, ExportFormat};
pub use crate::harmony::{generate, HarmonySet};
pub use crate::meaning::{ColorItem, Interpreter, MeaningTable};
