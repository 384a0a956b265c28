// crates/huekit-core/src/contrast.rs
//
// WCAG 2.x contrast ratio. Lighter/darker are picked by luminance, not by
// argument position.

use serde::Serialize;

use crate::color::Color;
use crate::error::Result;

pub const AA_LARGE: f64 = 3.0;
pub const AA: f64 = 4.5;
pub const AAA: f64 = 7.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Rounded to 2 decimals.
    #[serde(rename = "contrast_ratio")]
    pub ratio: f64,
    #[serde(rename = "wcag_aa_large")]
    pub aa_large: bool,
    #[serde(rename = "wcag_aa")]
    pub aa: bool,
    #[serde(rename = "wcag_aaa")]
    pub aaa: bool,
}

impl ContrastReport {
    /// Flags are judged on the unrounded ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio: (ratio * 100.0).round() / 100.0,
            aa_large: ratio >= AA_LARGE,
            aa: ratio >= AA,
            aaa: ratio >= AAA,
        }
    }
}

pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (a.luminance(), b.luminance());
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn contrast(fg_hex: &str, bg_hex: &str) -> Result<ContrastReport> {
    let fg = Color::parse(fg_hex)?;
    let bg = Color::parse(bg_hex)?;
    Ok(ContrastReport::from_ratio(contrast_ratio(fg, bg)))
}
