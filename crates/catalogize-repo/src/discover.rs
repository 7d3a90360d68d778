use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// Discover every Gradle build file under `repo_root`.
///
/// Matches on the file-name prefix, so `build.gradle`, `build.gradle.kts`,
/// and variants like `build.gradle.bak` are all picked up, at any depth.
/// Results are sorted so two runs over an unchanged tree rewrite files in
/// the same order.
pub fn discover_build_files(repo_root: &Utf8Path) -> Vec<Utf8PathBuf> {
    let mut out: Vec<Utf8PathBuf> = WalkDir::new(repo_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.file_name()
                    .to_str()
                    .is_some_and(|name| name.starts_with("build.gradle"))
        })
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.into_path()).ok())
        .collect();

    // Stable order.
    out.sort();
    out
}
