//! Line-for-line rewriting of build-file text.

use crate::catalog::CatalogBuilder;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::matcher::{match_dependency_line, DependencyLine};
use crate::registry::VersionRegistry;

/// Replacement for a matched declaration: same indent and configuration
/// keyword, coordinate swapped for a `libs.<alias>` reference (hyphens in
/// the alias become dots, Gradle's accessor syntax). Platform wrapping is
/// preserved.
pub fn rewrite_line(dep: &DependencyLine<'_>, alias: &str) -> String {
    let reference = format!("libs.{}", alias.replace('-', "."));
    if dep.platform {
        format!("{}{}(platform({}))", dep.indent, dep.configuration, reference)
    } else {
        format!("{}{}({})", dep.indent, dep.configuration, reference)
    }
}

/// Stream one build file through the matcher, accumulator, and rewriter.
///
/// Non-matching lines pass through verbatim. The returned text always ends
/// with exactly one newline. Fails on the first malformed coordinate or
/// unresolvable symbolic version.
pub fn rewrite_source(
    source: &str,
    builder: &mut CatalogBuilder,
    registry: &mut VersionRegistry,
) -> Result<String> {
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        match match_dependency_line(line) {
            None => out.push_str(line),
            Some(dep) => {
                let coordinate = Coordinate::parse(dep.notation)?;
                let alias = builder.record_dependency(&coordinate, registry)?;
                out.push_str(&rewrite_line(&dep, &alias));
            }
        }
        out.push('\n');
    }
    Ok(out)
}
