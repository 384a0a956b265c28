// crates/huekit-cli/src/cmd/mod.rs

pub mod contrast;
pub mod export;
pub mod extract;
pub mod harmony;
pub mod meaning;
