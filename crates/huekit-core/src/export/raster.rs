// crates/huekit-core/src/export/raster.rs
//
// Flat-color PNG: one vertical band per color over a white canvas.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use super::{band_edge, band_step, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::color::Color;
use crate::error::{ColorError, Result};

/// Band i covers columns `floor(i*step) ..= floor((i+1)*step)`, clipped to the
/// canvas. Bands are painted in order, so the shared edge column goes to the
/// later band.
pub fn render_bands(colors: &[Color]) -> RgbImage {
    let mut img = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgb([255, 255, 255]));
    if colors.is_empty() {
        return img;
    }

    let step = band_step(colors.len());
    let last_col = CANVAS_WIDTH - 1;
    for (i, c) in colors.iter().enumerate() {
        let x0 = band_edge(i, step).min(last_col);
        let x1 = band_edge(i + 1, step).min(last_col);
        let px = Rgb([c.r, c.g, c.b]);
        for x in x0..=x1 {
            for y in 0..CANVAS_HEIGHT {
                img.put_pixel(x, y, px);
            }
        }
    }
    img
}

pub fn png(colors: &[Color]) -> Result<Vec<u8>> {
    let img = render_bands(colors);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| ColorError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}
