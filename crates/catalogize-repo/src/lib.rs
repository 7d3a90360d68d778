//! Repository adapters: discover Gradle build files, load the version
//! registry, read and write text files.
//!
//! This crate is allowed to do filesystem IO; everything above it works on
//! in-memory text.

#![forbid(unsafe_code)]

mod discover;
mod properties;

use anyhow::Context;
use camino::Utf8Path;

pub use discover::discover_build_files;
pub use properties::{parse_registry, read_registry};

pub fn read_file(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path))
}

/// Write `text` to `path`, creating parent directories as needed.
pub fn write_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {}", path))?;
    Ok(())
}
