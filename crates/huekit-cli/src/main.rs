// crates/huekit-cli/src/main.rs

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use huekit_core::Interpreter;

mod cmd;
mod config;
mod io;

#[derive(Parser)]
#[command(name = "huekit")]
#[command(about = "Palette extraction, color harmonies, meanings, WCAG contrast and palette export", long_about = None)]
pub struct Cli {
    /// Config file (huekit.toml). Defaults to the first one found in the usual places.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract dominant colors from a PNG/JPEG image and interpret them
    Extract(cmd::extract::ExtractArgs),

    /// Complementary, analogous and triadic colors for a base color
    Harmony(cmd::harmony::HarmonyArgs),

    /// Marketing-style interpretation of a single color
    Meaning(cmd::meaning::MeaningArgs),

    /// WCAG contrast ratio and AA / AAA flags for a color pair
    Contrast(cmd::contrast::ContrastArgs),

    /// Export a palette as CSS, SCSS, PNG or SVG
    Export(cmd::export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let cfg = config::AppConfig::load(cli.config.as_deref())?;
    let extract_count = cfg.extract_count();
    let interpreter = Interpreter::new(cfg.meanings);

    match cli.cmd {
        Commands::Extract(args) => cmd::extract::run(args, &interpreter, extract_count),
        Commands::Harmony(args) => cmd::harmony::run(args, &interpreter),
        Commands::Meaning(args) => cmd::meaning::run(args, &interpreter),
        Commands::Contrast(args) => cmd::contrast::run(args),
        Commands::Export(args) => cmd::export::run(args),
    }
}
