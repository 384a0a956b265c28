// crates/huekit-cli/src/cmd/extract.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use huekit_core::extract::{decode_image, extract_palette, histogram, HistogramExtractor};
use huekit_core::{ColorItem, Interpreter};
use serde::Serialize;

use crate::io::{file, json};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Input image (PNG or JPEG)
    #[arg(long)]
    pub r#in: PathBuf,

    /// How many dominant colors to report (default from config, 5 if unset)
    #[arg(long)]
    pub count: Option<usize>,

    /// Histogram precision in bits per channel (1..=8)
    #[arg(long, default_value_t = histogram::DEFAULT_BITS)]
    pub bits: u8,
}

#[derive(Serialize)]
struct ExtractResponse {
    dominant_colors: Vec<ColorItem>,
}

pub fn run(args: ExtractArgs, interpreter: &Interpreter, default_count: usize) -> anyhow::Result<()> {
    let bytes = file::read_bytes(&args.r#in)?;
    let count = args.count.unwrap_or(default_count);

    let pixels = decode_image(&bytes)
        .with_context(|| format!("failed to process image {}", args.r#in.display()))?;
    let extractor = HistogramExtractor::new(args.bits);
    let dominant_colors = extract_palette(&extractor, interpreter, &pixels, count)
        .with_context(|| format!("failed to process image {}", args.r#in.display()))?;

    json::print(&ExtractResponse { dominant_colors })
}
