// crates/huekit-core/src/export/text.rs

use std::fmt::Write;

use crate::color::Color;

/// `:root { --color-N: #hex; }`, N is 1-based.
pub fn css(colors: &[Color]) -> String {
    let mut s = String::from(":root {\n");
    for (i, c) in colors.iter().enumerate() {
        let _ = writeln!(s, "  --color-{}: {c};", i + 1);
    }
    s.push('}');
    s
}

/// One `$color-N: #hex;` line per color.
pub fn scss(colors: &[Color]) -> String {
    let mut s = String::new();
    for (i, c) in colors.iter().enumerate() {
        let _ = writeln!(s, "$color-{}: {c};", i + 1);
    }
    s
}
