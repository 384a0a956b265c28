// crates/huekit-core/src/color/hsl.rs
//
// RGB <-> HSL with integer-truncated components.
// Truncation (not rounding) is load-bearing: the interpretation cascade
// compares against band edges like lightness == 20.

use super::Color;

/// Hue in [0, 360), saturation and lightness in [0, 100].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    #[inline]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Same saturation/lightness, hue rotated by `deg` (may be negative).
    #[inline]
    pub fn rotate(self, deg: i32) -> Self {
        let h = (self.h as i32 + deg).rem_euclid(360) as u16;
        Self { h, ..self }
    }

    pub fn to_color(self) -> Color {
        hsl_to_color(self.h, self.s, self.l)
    }
}

pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    let (h, s) = if d == 0.0 {
        (0.0, 0.0)
    } else {
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        // Branch priority on ties: red, then green, then blue.
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: ((h * 360.0) as u16).min(359),
        s: (s * 100.0) as u8,
        l: (l * 100.0) as u8,
    }
}

/// Chroma/intermediate/match inverse. Channels are floored, not rounded.
pub fn hsl_to_color(h: u16, s: u8, l: u8) -> Color {
    let h = (h % 360) as f64 / 360.0;
    let s = s.min(100) as f64 / 100.0;
    let l = l.min(100) as f64 / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Color::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// `#rrggbb`, lowercase.
pub fn hsl_to_hex(h: u16, s: u8, l: u8) -> String {
    hsl_to_color(h, s, l).to_hex()
}

#[inline]
fn to_channel(v: f64) -> u8 {
    // `as` saturates, which also absorbs tiny negative float error.
    (v * 255.0) as u8
}
