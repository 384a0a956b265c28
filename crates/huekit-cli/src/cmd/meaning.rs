// crates/huekit-cli/src/cmd/meaning.rs

use clap::Args;
use huekit_core::{Color, Interpreter};
use serde::Serialize;

use crate::io::json;

#[derive(Args, Debug)]
pub struct MeaningArgs {
    /// Color, RRGGBB or #RRGGBB
    #[arg(long)]
    pub color: String,
}

#[derive(Serialize)]
struct MeaningResponse<'a> {
    color: String,
    meaning: &'a str,
}

pub fn run(args: MeaningArgs, interpreter: &Interpreter) -> anyhow::Result<()> {
    // Reject bad input here; the interpreter itself would only degrade to a message.
    let color = Color::parse(&args.color)?;
    let digits = args.color.trim_start_matches('#');
    json::print(&MeaningResponse {
        color: format!("#{digits}"),
        meaning: interpreter.describe(color),
    })
}
