// crates/huekit-core/src/extract/mod.rs
//
// Dominant-color extraction. The extractor itself is a pluggable collaborator:
// pixel buffer in, ranked packed 0xRRGGBB integers out (most dominant first).

pub mod histogram;

pub use histogram::HistogramExtractor;
pub use image::RgbaImage;

use log::debug;

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::meaning::{ColorItem, Interpreter};

pub const DEFAULT_COUNT: usize = 5;

pub trait PaletteExtractor {
    /// At most `count` colors, most dominant first.
    fn extract(&self, pixels: &RgbaImage, count: usize) -> Result<Vec<u32>>;
}

/// Decode PNG/JPEG bytes into an RGBA buffer.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(|e| ColorError::Extraction(e.to_string()))?;
    debug!("decoded image {}x{}", img.width(), img.height());
    Ok(img.to_rgba8())
}

pub fn extract_palette<E>(
    extractor: &E,
    interpreter: &Interpreter,
    pixels: &RgbaImage,
    count: usize,
) -> Result<Vec<ColorItem>>
where
    E: PaletteExtractor + ?Sized,
{
    let packed = extractor.extract(pixels, count)?;
    Ok(interpreter.annotate_all(packed.into_iter().map(Color::from_packed)))
}
