// crates/huekit-core/src/harmony.rs
//
// Fixed hue rotations of a base color; saturation and lightness are kept.

use log::debug;
use serde::Serialize;

use crate::color::{Color, Hsl};
use crate::error::Result;
use crate::meaning::{ColorItem, Interpreter};

pub const COMPLEMENTARY: i32 = 180;
pub const ANALOGOUS: [i32; 2] = [30, -30];
pub const TRIADIC: [i32; 2] = [120, 240];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HarmonySet {
    pub complementary: ColorItem,
    pub analogous: [ColorItem; 2],
    pub triadic: [ColorItem; 2],
}

/// Raw harmony colors for `base`, without interpretation.
pub fn harmony_colors(base: Hsl) -> (Color, [Color; 2], [Color; 2]) {
    let at = |deg: i32| base.rotate(deg).to_color();
    (
        at(COMPLEMENTARY),
        ANALOGOUS.map(at),
        TRIADIC.map(at),
    )
}

pub fn generate(interpreter: &Interpreter, base_hex: &str) -> Result<HarmonySet> {
    let base = Color::parse(base_hex)?.hsl();
    debug!("harmony base {base_hex} -> hsl({}, {}, {})", base.h, base.s, base.l);

    let (complementary, analogous, triadic) = harmony_colors(base);
    Ok(HarmonySet {
        complementary: interpreter.annotate(complementary),
        analogous: analogous.map(|c| interpreter.annotate(c)),
        triadic: triadic.map(|c| interpreter.annotate(c)),
    })
}
