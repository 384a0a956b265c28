// crates/huekit-cli/src/io/mod.rs

pub mod file;
pub mod json;
