// crates/huekit-cli/src/cmd/export.rs

use std::path::PathBuf;

use clap::Args;
use huekit_core::{export, ExportFormat};

use crate::io::file;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Comma-separated colors, left to right
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub colors: Vec<String>,

    /// css | scss | png | svg
    #[arg(long)]
    pub format: String,

    /// Output path ("-" for stdout). Defaults to palette.<ext>
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let format: ExportFormat = args.format.parse()?;
    let payload = export(args.colors.as_slice(), format)?;
    let out = args.out.unwrap_or_else(|| PathBuf::from(payload.filename()));

    file::write_bytes(&out, &payload.bytes)?;

    if out.as_os_str() != file::STDIO {
        eprintln!("--- export ---");
        eprintln!("format        = {}", payload.format);
        eprintln!("content_type  = {}", payload.content_type());
        eprintln!("colors        = {}", args.colors.len());
        eprintln!("bytes         = {}", payload.bytes.len());
        eprintln!("out           = {}", out.display());
    }
    Ok(())
}
