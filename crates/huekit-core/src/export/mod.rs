// crates/huekit-core/src/export/mod.rs
//
// Palette serialization. Pure: returns bytes, never touches disk.
// Color order is significant (variable index, left-to-right band position).

pub mod raster;
pub mod text;
pub mod vector;

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::color::Color;
use crate::error::{ColorError, Result};

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 100;

const FILE_STEM: &str = "palette";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Css,
    Scss,
    Png,
    Svg,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [Self::Css, Self::Scss, Self::Png, Self::Svg];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Css => "text/css",
            Self::Scss => "text/scss",
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }

    /// Attachment filename, `palette.{ext}`.
    pub fn filename(self) -> String {
        format!("{FILE_STEM}.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.extension() == s)
            .ok_or_else(|| ColorError::UnsupportedFormat(s.to_string()))
    }
}

/// Rendered payload plus the metadata the boundary needs to ship it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl Export {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    pub fn filename(&self) -> String {
        self.format.filename()
    }
}

/// Validate every color, then render.
pub fn export<S: AsRef<str>>(colors: &[S], format: ExportFormat) -> Result<Export> {
    let parsed = colors
        .iter()
        .map(|s| Color::parse(s.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    render(&parsed, format)
}

pub fn render(colors: &[Color], format: ExportFormat) -> Result<Export> {
    if colors.is_empty() {
        return Err(ColorError::EmptyPalette);
    }
    let bytes = match format {
        ExportFormat::Css => text::css(colors).into_bytes(),
        ExportFormat::Scss => text::scss(colors).into_bytes(),
        ExportFormat::Png => raster::png(colors)?,
        ExportFormat::Svg => vector::svg(colors)?.into_bytes(),
    };
    debug!("export {format}: {} colors -> {} bytes", colors.len(), bytes.len());
    Ok(Export { format, bytes })
}

/// Band width on the canvas; fractional when the width does not divide evenly.
#[inline]
pub(crate) fn band_step(count: usize) -> f64 {
    CANVAS_WIDTH as f64 / count as f64
}

#[inline]
pub(crate) fn band_edge(i: usize, step: f64) -> u32 {
    (i as f64 * step).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        for f in ExportFormat::ALL {
            assert_eq!(f.extension().parse::<ExportFormat>().unwrap(), f);
        }
        assert_eq!(ExportFormat::Svg.filename(), "palette.svg");
        assert_eq!(
            "pdf".parse::<ExportFormat>(),
            Err(ColorError::UnsupportedFormat("pdf".into()))
        );
    }

    #[test]
    fn band_edges() {
        let step = band_step(7);
        assert_eq!(band_edge(0, step), 0);
        assert_eq!(band_edge(1, step), 85);
        assert_eq!(band_edge(7, step), CANVAS_WIDTH);
    }
}
