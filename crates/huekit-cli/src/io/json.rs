// crates/huekit-cli/src/io/json.rs

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

/// One compact JSON document per line on stdout.
pub fn print<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, value).context("write json to stdout")?;
    writeln!(out)?;
    Ok(())
}
