// crates/huekit-core/src/meaning/interpret.rs
//
// Table lookup first, then an ordered rule cascade (first match wins).
// Lightness and saturation extremes are checked before hue bands, so a very
// dark saturated red reads as "dark", not "warm".

use log::debug;

use super::{ColorItem, MeaningTable};
use crate::color::{Color, Hsl};

pub const INVALID_COLOR_MESSAGE: &str = "Invalid HEX color.";
pub const UNDETERMINED_MESSAGE: &str = "Could not determine color characteristics.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Dark,
    Light,
    Muted,
    Saturated,
    Warm,
    Earthy,
    Cool,
    BlueViolet,
    Neutral,
}

impl Tone {
    pub fn message(self) -> &'static str {
        match self {
            Tone::Dark => "Dark shade. Conveys depth, seriousness and luxury.",
            Tone::Light => "Light shade. Creates a feeling of cleanliness, lightness and minimalism.",
            Tone::Muted => {
                "Pastel/muted color. Versatile and unobtrusive, works well as a background."
            }
            Tone::Saturated => {
                "Saturated color. Draws attention, suited to accents and calls to action."
            }
            Tone::Warm => "Warm shade (red/orange). Energy, passion, warmth.",
            Tone::Earthy => "Earthy/yellow tones. Naturalness, comfort, stability.",
            Tone::Cool => "Cool green/teal tones. Freshness, growth, trust.",
            Tone::BlueViolet => "Blue-violet tones. Calm, depth, intuition.",
            Tone::Neutral => {
                "Neutral or complex shade. Test it in the context of the brand before committing."
            }
        }
    }
}

struct Rule {
    tone: Tone,
    matches: fn(Hsl) -> bool,
}

const RULES: &[Rule] = &[
    Rule { tone: Tone::Dark, matches: |c| c.l < 20 },
    Rule { tone: Tone::Light, matches: |c| c.l > 90 },
    Rule { tone: Tone::Muted, matches: |c| c.s < 20 },
    Rule { tone: Tone::Saturated, matches: |c| c.s > 70 },
    Rule { tone: Tone::Warm, matches: |c| c.h < 30 },
    Rule { tone: Tone::Earthy, matches: |c| (30..90).contains(&c.h) },
    Rule { tone: Tone::Cool, matches: |c| (90..180).contains(&c.h) },
    Rule { tone: Tone::BlueViolet, matches: |c| (180..270).contains(&c.h) },
    Rule { tone: Tone::Neutral, matches: |_| true },
];

/// Walk the cascade. `None` only if no rule matched.
pub fn classify(hsl: Hsl) -> Option<Tone> {
    RULES.iter().find(|r| (r.matches)(hsl)).map(|r| r.tone)
}

#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    table: MeaningTable,
}

impl Interpreter {
    pub fn new(table: MeaningTable) -> Self {
        Self { table }
    }

    /// Never fails: malformed input yields [`INVALID_COLOR_MESSAGE`].
    pub fn interpret(&self, hex: &str) -> String {
        match Color::parse(hex) {
            Ok(c) => self.describe(c).to_string(),
            Err(_) => INVALID_COLOR_MESSAGE.to_string(),
        }
    }

    pub fn describe(&self, color: Color) -> &str {
        if let Some(text) = self.table.get(color) {
            debug!("meaning table hit for {}", color.normalized());
            return text;
        }
        match classify(color.hsl()) {
            Some(tone) => tone.message(),
            None => UNDETERMINED_MESSAGE,
        }
    }

    pub fn annotate(&self, color: Color) -> ColorItem {
        ColorItem::new(color, self.describe(color))
    }

    pub fn annotate_all<I>(&self, colors: I) -> Vec<ColorItem>
    where
        I: IntoIterator<Item = Color>,
    {
        colors.into_iter().map(|c| self.annotate(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hsl_is_classified() {
        for h in (0..360).step_by(7) {
            for s in (0..=100).step_by(9) {
                for l in (0..=100).step_by(9) {
                    assert!(classify(Hsl::new(h, s, l)).is_some());
                }
            }
        }
    }

    #[test]
    fn hue_bands() {
        let at = |h| classify(Hsl::new(h, 50, 50)).unwrap();
        assert_eq!(at(0), Tone::Warm);
        assert_eq!(at(29), Tone::Warm);
        assert_eq!(at(30), Tone::Earthy);
        assert_eq!(at(89), Tone::Earthy);
        assert_eq!(at(90), Tone::Cool);
        assert_eq!(at(179), Tone::Cool);
        assert_eq!(at(180), Tone::BlueViolet);
        assert_eq!(at(269), Tone::BlueViolet);
        assert_eq!(at(270), Tone::Neutral);
        assert_eq!(at(359), Tone::Neutral);
    }

    #[test]
    fn extremes_before_hue() {
        assert_eq!(classify(Hsl::new(0, 90, 10)), Some(Tone::Dark));
        assert_eq!(classify(Hsl::new(0, 90, 95)), Some(Tone::Light));
        assert_eq!(classify(Hsl::new(200, 10, 50)), Some(Tone::Muted));
        assert_eq!(classify(Hsl::new(200, 80, 50)), Some(Tone::Saturated));
    }

    #[test]
    fn band_edges_are_exclusive() {
        assert_eq!(classify(Hsl::new(0, 50, 20)), Some(Tone::Warm));
        assert_eq!(classify(Hsl::new(0, 50, 90)), Some(Tone::Warm));
        assert_eq!(classify(Hsl::new(0, 20, 50)), Some(Tone::Warm));
        assert_eq!(classify(Hsl::new(0, 70, 50)), Some(Tone::Warm));
    }
}
