// crates/huekit-cli/src/cmd/harmony.rs

use clap::Args;
use huekit_core::{generate, Interpreter};

use crate::io::json;

#[derive(Args, Debug)]
pub struct HarmonyArgs {
    /// Base color, RRGGBB or #RRGGBB
    #[arg(long)]
    pub color: String,
}

pub fn run(args: HarmonyArgs, interpreter: &Interpreter) -> anyhow::Result<()> {
    let set = generate(interpreter, &args.color)?;
    json::print(&set)
}
