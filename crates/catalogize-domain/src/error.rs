//! Errors raised while accumulating the catalog.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A `${name}` version reference (or a special-cased version name) has no
    /// value in the registry at the point of resolution.
    #[error("no version named '{name}' is known for '{module}' (define it in gradle.properties or declare the literal version first)")]
    MissingVersion { name: String, module: String },

    /// A matched dependency notation did not split into `group:artifact` or
    /// `group:artifact:version`.
    #[error("malformed dependency coordinate '{notation}': expected group:artifact[:version]")]
    MalformedCoordinate { notation: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_version_display_names_both_sides() {
        let err = CatalogError::MissingVersion {
            name: "micronautVersion".into(),
            module: "io.micronaut:micronaut-core".into(),
        };
        let text = err.to_string();
        assert!(text.contains("micronautVersion"));
        assert!(text.contains("io.micronaut:micronaut-core"));
    }

    #[test]
    fn malformed_coordinate_display() {
        let err = CatalogError::MalformedCoordinate {
            notation: "a:b:c:d".into(),
        };
        assert!(err.to_string().contains("a:b:c:d"));
    }
}
