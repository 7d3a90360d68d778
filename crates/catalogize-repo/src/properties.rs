use anyhow::Context;
use camino::Utf8Path;
use catalogize_domain::VersionRegistry;

/// Build the seed registry from `gradle.properties` text.
///
/// Only lines containing the substring `Version` are considered; each is
/// split once on `=` with both sides trimmed. Lines without `=` (or without
/// `Version`) are ignored, comments included.
pub fn parse_registry(text: &str) -> VersionRegistry {
    let mut registry = VersionRegistry::new();
    for line in text.lines() {
        if !line.contains("Version") {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        registry.insert(name.trim(), value.trim());
    }
    registry
}

/// Read and parse the properties file. A missing file yields an empty
/// registry; symbolic version references will then fail resolution with the
/// usual fatal error.
pub fn read_registry(path: &Utf8Path) -> anyhow::Result<VersionRegistry> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(parse_registry(&text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(VersionRegistry::new()),
        Err(err) => Err(err).with_context(|| format!("read {}", path)),
    }
}
