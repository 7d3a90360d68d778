//! The rewrite use case: scan, accumulate, render, commit.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use catalogize_domain::{rewrite_source, Catalog, CatalogBuilder};
use catalogize_render::render_catalog;
use catalogize_repo::{discover_build_files, read_file, read_registry, write_file};

/// Input for the rewrite use case.
#[derive(Clone, Debug)]
pub struct RewriteInput<'a> {
    /// Gradle project root (the tree scanned for `build.gradle*` files).
    pub repo_root: &'a Utf8Path,
    /// Properties file seeding the version registry, relative to the root.
    pub properties: Utf8PathBuf,
    /// Catalog output path, relative to the root.
    pub catalog_out: Utf8PathBuf,
}

/// One build file with its rewritten content, not yet written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedFile {
    pub path: Utf8PathBuf,
    pub text: String,
}

/// Everything the run will write, staged in memory.
#[derive(Clone, Debug)]
pub struct RewritePlan {
    pub build_files: Vec<StagedFile>,
    pub catalog: Catalog,
    pub catalog_path: Utf8PathBuf,
    pub catalog_text: String,
}

/// Scan every build file under the root in stable order, rewriting each
/// through the shared accumulator. Nothing is written; the first malformed
/// coordinate or unresolvable symbolic version aborts the whole plan.
pub fn plan_rewrite(input: &RewriteInput<'_>) -> anyhow::Result<RewritePlan> {
    let mut registry = read_registry(&input.repo_root.join(&input.properties))
        .context("load version registry")?;

    let mut builder = CatalogBuilder::new();
    let mut build_files = Vec::new();

    for path in discover_build_files(input.repo_root) {
        let source = read_file(&path)?;
        let text = rewrite_source(&source, &mut builder, &mut registry)
            .with_context(|| format!("rewrite {}", path))?;
        build_files.push(StagedFile { path, text });
    }

    let catalog = builder.finalize();
    let catalog_text = render_catalog(&catalog);

    Ok(RewritePlan {
        build_files,
        catalog,
        catalog_path: input.repo_root.join(&input.catalog_out),
        catalog_text,
    })
}

/// Write every staged build file in place, then the catalog document,
/// overwriting any prior content. Progress goes to stdout.
///
/// A scan that discovered no declarations at all (e.g. a second run over an
/// already rewritten tree) leaves the existing catalog file alone, so the
/// rewrite is idempotent for the catalog as well as the build files.
pub fn commit_rewrite(plan: &RewritePlan) -> anyhow::Result<()> {
    for staged in &plan.build_files {
        println!("Overriding {}", staged.path);
        write_file(&staged.path, &staged.text)?;
    }
    if !plan.catalog.libraries.is_empty() || !plan.catalog.versions.is_empty() {
        write_file(&plan.catalog_path, &plan.catalog_text)?;
    }
    Ok(())
}
