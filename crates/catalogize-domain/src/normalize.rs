//! Naming rules for catalog aliases and version keys.
//!
//! Each rule is a small pure function; `library_alias` and `version_key`
//! apply them in a fixed order. Keeping the rules separate keeps the order
//! visible and each step independently testable.

/// Prefix given to aliases derived from `*-bom` artifacts.
pub const BOM_ALIAS_PREFIX: &str = "boms-";

/// Catalog alias for a library, derived from the artifact name:
/// `-interface` becomes `-api`, `foo-bom` becomes `boms-foo`, dots become
/// hyphens. Pure in `(artifact)`, so repeated runs derive the same alias.
pub fn library_alias(artifact: &str) -> String {
    dots_to_hyphens(&bom_to_boms(&interface_to_api(artifact)))
}

/// Catalog version key for a (possibly special-cased) version name:
/// kebab-cased, dots to hyphens, `-interface` to `-api`, and a trailing
/// `-version` stripped (so `micronautVersion` keys as `micronaut`).
pub fn version_key(name: &str) -> String {
    let key = interface_to_api(&dots_to_hyphens(&camel_to_kebab(name)));
    strip_trailing_version(&key)
}

/// Ecosystem overrides applied to the version name before kebab-casing.
/// Checked in order; the group prefixes are disjoint so at most one applies.
pub fn special_version_name(group: &str, artifact: &str, name: &str) -> String {
    if group.starts_with("org.jetbrains.kotlin") {
        return "kotlin".to_string();
    }
    if group.starts_with("org.testcontainers") && !name.starts_with("testcontainers") {
        return format!("testcontainers-{name}");
    }
    if group == "org.graalvm.nativeimage" && artifact == "svm" {
        return "graal".to_string();
    }
    name.to_string()
}

/// `${name}` → `name`. Strips every `$`, `{`, `}` delimiter character.
pub fn symbolic_name(version: &str) -> String {
    version
        .chars()
        .filter(|c| !matches!(c, '$' | '{' | '}'))
        .collect()
}

/// True when the version segment is a `${...}` reference rather than a
/// literal value.
pub fn is_symbolic(version: &str) -> bool {
    version.contains('$')
}

fn interface_to_api(name: &str) -> String {
    name.replace("-interface", "-api")
}

fn bom_to_boms(name: &str) -> String {
    match name.strip_suffix("-bom") {
        Some(base) => format!("{BOM_ALIAS_PREFIX}{base}"),
        None => name.to_string(),
    }
}

fn dots_to_hyphens(name: &str) -> String {
    name.replace('.', "-")
}

/// camelCase → kebab-case: a hyphen before every uppercase letter that
/// follows another letter, then everything lowercased.
fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_is_letter = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_is_letter {
            out.push('-');
        }
        out.push(c.to_ascii_lowercase());
        prev_is_letter = c.is_ascii_alphabetic();
    }
    out
}

fn strip_trailing_version(name: &str) -> String {
    name.strip_suffix("-version").unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_passes_plain_artifacts_through() {
        assert_eq!(library_alias("commons-lang3"), "commons-lang3");
    }

    #[test]
    fn alias_renames_interface_to_api() {
        assert_eq!(library_alias("users-interface"), "users-api");
    }

    #[test]
    fn alias_moves_bom_suffix_to_boms_prefix() {
        assert_eq!(library_alias("foo-bom"), "boms-foo");
        assert_eq!(library_alias("micronaut-bom"), "boms-micronaut");
    }

    #[test]
    fn alias_converts_dots_to_hyphens() {
        assert_eq!(library_alias("log4j.core"), "log4j-core");
    }

    #[test]
    fn version_key_kebab_cases_camel_names() {
        assert_eq!(version_key("jacksonDatabind"), "jackson-databind");
    }

    #[test]
    fn version_key_strips_trailing_version_suffix() {
        assert_eq!(version_key("micronautVersion"), "micronaut");
        assert_eq!(version_key("kotlinCoroutinesVersion"), "kotlin-coroutines");
    }

    #[test]
    fn version_key_keeps_inner_version_word() {
        // Only a trailing `-version` is stripped.
        assert_eq!(version_key("versionCatalog"), "version-catalog");
    }

    #[test]
    fn version_key_handles_dots_and_interface() {
        assert_eq!(version_key("users.interface"), "users-api");
    }

    #[test]
    fn camel_to_kebab_hyphenates_runs_of_uppercase() {
        assert_eq!(camel_to_kebab("graalVM"), "graal-v-m");
        assert_eq!(camel_to_kebab("already-kebab"), "already-kebab");
    }

    #[test]
    fn kotlin_group_forces_kotlin_key() {
        assert_eq!(
            special_version_name("org.jetbrains.kotlin", "kotlin-stdlib", "kotlin-stdlib"),
            "kotlin"
        );
        assert_eq!(
            special_version_name("org.jetbrains.kotlinx", "coroutines", "kotlinxVersion"),
            "kotlin"
        );
    }

    #[test]
    fn testcontainers_group_prefixes_name_once() {
        assert_eq!(
            special_version_name("org.testcontainers", "postgresql", "postgresql"),
            "testcontainers-postgresql"
        );
        assert_eq!(
            special_version_name("org.testcontainers", "postgresql", "testcontainersVersion"),
            "testcontainersVersion"
        );
    }

    #[test]
    fn graal_svm_forces_graal_key() {
        assert_eq!(
            special_version_name("org.graalvm.nativeimage", "svm", "svm"),
            "graal"
        );
        // Only the exact group/artifact pair.
        assert_eq!(
            special_version_name("org.graalvm.nativeimage", "objectfile", "objectfile"),
            "objectfile"
        );
    }

    #[test]
    fn symbolic_reference_handling() {
        assert!(is_symbolic("${micronautVersion}"));
        assert!(!is_symbolic("3.8.1"));
        assert_eq!(symbolic_name("${micronautVersion}"), "micronautVersion");
    }
}
