// crates/huekit-core/src/extract/histogram.rs
//
// Quantized color histogram: each channel keeps its top `bits` bits, buckets
// are ranked by population and reported as the mean of their member pixels.
// Fully transparent pixels are ignored.

use std::collections::HashMap;

use log::debug;

use super::{PaletteExtractor, RgbaImage};
use crate::error::{ColorError, Result};

pub const DEFAULT_BITS: u8 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HistogramExtractor {
    bits: u8,
}

impl Default for HistogramExtractor {
    fn default() -> Self {
        Self { bits: DEFAULT_BITS }
    }
}

#[derive(Default)]
struct Bucket {
    count: u64,
    sum: [u64; 3],
}

impl Bucket {
    fn mean(&self) -> u32 {
        let avg = |s: u64| ((s + self.count / 2) / self.count) as u32;
        (avg(self.sum[0]) << 16) | (avg(self.sum[1]) << 8) | avg(self.sum[2])
    }
}

impl HistogramExtractor {
    /// Bits kept per channel, clamped to 1..=8.
    pub fn new(bits: u8) -> Self {
        Self { bits: bits.clamp(1, 8) }
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    #[inline]
    fn bucket_key(&self, r: u8, g: u8, b: u8) -> u32 {
        let shift = 8 - self.bits;
        let bits = self.bits as u32;
        ((r >> shift) as u32) << (2 * bits) | ((g >> shift) as u32) << bits | (b >> shift) as u32
    }
}

impl PaletteExtractor for HistogramExtractor {
    fn extract(&self, pixels: &RgbaImage, count: usize) -> Result<Vec<u32>> {
        let mut buckets: HashMap<u32, Bucket> = HashMap::new();
        for p in pixels.pixels() {
            let [r, g, b, a] = p.0;
            if a == 0 {
                continue;
            }
            let e = buckets.entry(self.bucket_key(r, g, b)).or_default();
            e.count += 1;
            e.sum[0] += r as u64;
            e.sum[1] += g as u64;
            e.sum[2] += b as u64;
        }

        if buckets.is_empty() {
            return Err(ColorError::Extraction("image has no opaque pixels".into()));
        }

        let mut ranked: Vec<(u32, Bucket)> = buckets.into_iter().collect();
        ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(&b.0)));
        debug!(
            "histogram: {} buckets at {} bits/channel, keeping {}",
            ranked.len(),
            self.bits,
            count.min(ranked.len())
        );

        Ok(ranked.iter().take(count).map(|(_, b)| b.mean()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn ranks_by_population() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255]));
        for x in 0..3 {
            for y in 0..10 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        let got = HistogramExtractor::default().extract(&img, 5).unwrap();
        assert_eq!(got, vec![0x0000FF, 0xFF0000]);
    }

    #[test]
    fn bucket_reports_mean() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([16, 16, 16, 255]));
        img.put_pixel(1, 0, Rgba([20, 20, 20, 255]));
        let got = HistogramExtractor::new(4).extract(&img, 1).unwrap();
        assert_eq!(got, vec![0x121212]);
    }

    #[test]
    fn transparent_only_fails() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));
        assert!(matches!(
            HistogramExtractor::default().extract(&img, 5),
            Err(ColorError::Extraction(_))
        ));
    }

    #[test]
    fn bits_are_clamped() {
        assert_eq!(HistogramExtractor::new(0).bits(), 1);
        assert_eq!(HistogramExtractor::new(12).bits(), 8);
    }
}
