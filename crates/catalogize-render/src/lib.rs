//! Renders the accumulated catalog into the `libs.versions.toml` document.
//!
//! Output is fully deterministic: groups are fixed, entries within a group
//! are sorted, and a given catalog always renders to the same bytes.

#![forbid(unsafe_code)]

use catalogize_domain::normalize::BOM_ALIAS_PREFIX;
use catalogize_domain::{Catalog, LibraryEntry, VersionEntry};

/// Version keys and library aliases starting with this prefix get their own
/// labeled group in each section.
const MICRONAUT_PREFIX: &str = "micronaut";

/// Compose the full `[versions]` / `[libraries]` document. Empty groups are
/// omitted, header included; non-empty groups are separated by one blank
/// line and the document ends with a single trailing newline.
pub fn render_catalog(catalog: &Catalog) -> String {
    let versions = render_section(
        "[versions]",
        &[
            group(
                None,
                catalog.versions.iter().filter(|v| !is_micronaut(&v.key)),
                version_line,
            ),
            group(
                Some("# Micronaut"),
                catalog.versions.iter().filter(|v| is_micronaut(&v.key)),
                version_line,
            ),
        ],
    );
    let libraries = render_section(
        "[libraries]",
        &[
            group(
                Some("# BOMs"),
                catalog
                    .libraries
                    .iter()
                    .filter(|l| l.alias.starts_with(BOM_ALIAS_PREFIX)),
                library_line,
            ),
            group(
                Some("# Micronaut"),
                catalog.libraries.iter().filter(|l| is_micronaut(&l.alias)),
                library_line,
            ),
            group(
                None,
                catalog
                    .libraries
                    .iter()
                    .filter(|l| !l.alias.starts_with(BOM_ALIAS_PREFIX) && !is_micronaut(&l.alias)),
                library_line,
            ),
        ],
    );

    format!("{versions}\n{libraries}")
}

fn is_micronaut(name: &str) -> bool {
    name.starts_with(MICRONAUT_PREFIX)
}

fn version_line(entry: &VersionEntry) -> String {
    format!("{} = \"{}\"", entry.key, entry.value)
}

fn library_line(entry: &LibraryEntry) -> String {
    match &entry.version_ref {
        Some(version_ref) => format!(
            "{} = {{ module = \"{}\", version.ref = \"{}\" }}",
            entry.alias, entry.module, version_ref
        ),
        None => format!("{} = {{ module = \"{}\" }}", entry.alias, entry.module),
    }
}

/// A rendered group: optional header line plus one line per entry. Empty
/// input renders to an empty string so the section can skip it entirely.
fn group<'a, T: 'a>(
    header: Option<&str>,
    entries: impl Iterator<Item = &'a T>,
    line: fn(&T) -> String,
) -> String {
    let lines: Vec<String> = entries.map(line).collect();
    if lines.is_empty() {
        return String::new();
    }
    match header {
        Some(header) => format!("{header}\n{}", lines.join("\n")),
        None => lines.join("\n"),
    }
}

fn render_section(header: &str, groups: &[String]) -> String {
    let mut out = String::from(header);
    out.push('\n');
    let populated: Vec<&str> = groups
        .iter()
        .filter(|g| !g.is_empty())
        .map(String::as_str)
        .collect();
    if !populated.is_empty() {
        out.push_str(&populated.join("\n\n"));
        out.push('\n');
    }
    out
}
