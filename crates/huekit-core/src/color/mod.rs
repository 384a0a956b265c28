// crates/huekit-core/src/color/mod.rs
//
// 24-bit RGB color value plus the HSL / luminance views derived from it.

pub mod hsl;
pub mod luminance;

pub use hsl::{hsl_to_hex, rgb_to_hsl, Hsl};
pub use luminance::relative_luminance;

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` or `#RRGGBB` (any case). Leading `#` characters are stripped;
    /// what remains must be exactly 6 hex digits.
    pub fn parse(s: &str) -> Result<Self> {
        let digits = strip_hash(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColor(s.to_string()));
        }
        // All six bytes are ASCII hex digits, so slicing on byte offsets is safe.
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Unpack a `0xRRGGBB` integer. Bits above the low 24 are ignored.
    #[inline]
    pub const fn from_packed(v: u32) -> Self {
        Self::new(((v >> 16) & 0xFF) as u8, ((v >> 8) & 0xFF) as u8, (v & 0xFF) as u8)
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Uppercase, no `#`. This is the meaning-table key form.
    pub fn normalized(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Lowercase with `#`, the form used in API output and exports.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    pub fn hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn luminance(self) -> f64 {
        relative_luminance(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[inline]
pub(crate) fn strip_hash(s: &str) -> &str {
    s.trim_start_matches('#')
}

/// Split a hex color into its three channels.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    Color::parse(hex).map(Color::rgb)
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Color::parse(hex).map(Color::hsl)
}
