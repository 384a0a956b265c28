// crates/huekit-cli/src/io/file.rs

use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// `-` means stdout.
pub const STDIO: &str = "-";

pub fn read_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read {}", path.display()))
}

pub fn write_bytes(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if path.as_os_str() == STDIO {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(bytes).context("write stdout")?;
        out.flush()?;
        return Ok(());
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}
