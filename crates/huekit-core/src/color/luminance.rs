// crates/huekit-core/src/color/luminance.rs

use super::Color;

/// sRGB channel (0..=255) to linear light, WCAG 2.x constants.
#[inline]
fn channel_to_linear(v: u8) -> f64 {
    let c = v as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in [0, 1].
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * channel_to_linear(color.r)
        + 0.7152 * channel_to_linear(color.g)
        + 0.0722 * channel_to_linear(color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        assert!((relative_luminance(Color::new(255, 255, 255)) - 1.0).abs() < 1e-9);
        assert_eq!(relative_luminance(Color::new(0, 0, 0)), 0.0);
    }

    #[test]
    fn green_dominates() {
        let r = relative_luminance(Color::new(255, 0, 0));
        let g = relative_luminance(Color::new(0, 255, 0));
        let b = relative_luminance(Color::new(0, 0, 255));
        assert!(g > r && r > b);
        assert!((g - 0.7152).abs() < 1e-9);
    }
}
