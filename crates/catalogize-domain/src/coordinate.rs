//! Maven-style dependency coordinates as they appear in Gradle build files.

use crate::error::{CatalogError, Result};

/// A `group:artifact[:version]` coordinate. The version segment, when
/// present, may still be a symbolic `${...}` reference rather than a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: Option<String>,
}

impl Coordinate {
    /// Split a dependency notation on `:`. Anything other than two or three
    /// segments is malformed and aborts the run.
    pub fn parse(notation: &str) -> Result<Self> {
        let parts: Vec<&str> = notation.split(':').collect();
        match parts.as_slice() {
            [group, artifact] => Ok(Self {
                group: (*group).to_string(),
                artifact: (*artifact).to_string(),
                version: None,
            }),
            [group, artifact, version] => Ok(Self {
                group: (*group).to_string(),
                artifact: (*artifact).to_string(),
                version: Some((*version).to_string()),
            }),
            _ => Err(CatalogError::MalformedCoordinate {
                notation: notation.to_string(),
            }),
        }
    }

    /// Canonical `group:artifact` module string used in catalog entries.
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_versioned_coordinate() {
        let c = Coordinate::parse("org.apache.commons:commons-lang3:3.12.0").unwrap();
        assert_eq!(c.group, "org.apache.commons");
        assert_eq!(c.artifact, "commons-lang3");
        assert_eq!(c.version.as_deref(), Some("3.12.0"));
        assert_eq!(c.module(), "org.apache.commons:commons-lang3");
    }

    #[test]
    fn parses_versionless_coordinate() {
        let c = Coordinate::parse("com.example:bar").unwrap();
        assert_eq!(c.version, None);
        assert_eq!(c.module(), "com.example:bar");
    }

    #[test]
    fn keeps_symbolic_version_segment_verbatim() {
        let c = Coordinate::parse("io.micronaut:micronaut-core:${micronautVersion}").unwrap();
        assert_eq!(c.version.as_deref(), Some("${micronautVersion}"));
    }

    #[test]
    fn rejects_single_segment() {
        let err = Coordinate::parse("commons-lang3").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedCoordinate { .. }));
    }

    #[test]
    fn rejects_four_segments() {
        let err = Coordinate::parse("a:b:1.0:jar").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedCoordinate { .. }));
    }
}
