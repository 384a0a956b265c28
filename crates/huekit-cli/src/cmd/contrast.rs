// crates/huekit-cli/src/cmd/contrast.rs

use clap::Args;
use huekit_core::contrast;

use crate::io::json;

#[derive(Args, Debug)]
pub struct ContrastArgs {
    /// Foreground (text) color
    #[arg(long)]
    pub fg: String,

    /// Background color
    #[arg(long)]
    pub bg: String,
}

pub fn run(args: ContrastArgs) -> anyhow::Result<()> {
    let report = contrast(&args.fg, &args.bg)?;
    json::print(&report)
}
