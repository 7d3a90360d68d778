//! CLI entry point for catalogize.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. The rewrite itself lives in the `catalogize-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use catalogize_app::{commit_rewrite, plan_rewrite, RewriteInput};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "catalogize",
    version,
    about = "Rewrite Gradle build files to reference a generated version catalog"
)]
struct Cli {
    /// Gradle project root (the tree scanned for build.gradle* files).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Properties file seeding known version names, relative to the root.
    #[arg(long, default_value = "gradle.properties")]
    properties: Utf8PathBuf,

    /// Where to write the generated catalog, relative to the root.
    #[arg(long, default_value = "gradle/libs.versions.toml")]
    catalog_out: Utf8PathBuf,

    /// Plan the rewrite and print the catalog without touching any file.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());
    if !repo_root.exists() {
        anyhow::bail!("repo root does not exist: {}", repo_root);
    }

    let input = RewriteInput {
        repo_root: &repo_root,
        properties: cli.properties,
        catalog_out: cli.catalog_out,
    };

    let plan = plan_rewrite(&input).context("plan rewrite")?;
    if !cli.dry_run {
        commit_rewrite(&plan).context("commit rewrite")?;
    }

    print!("{}", plan.catalog_text);
    Ok(())
}
