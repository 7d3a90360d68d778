//! The catalog accumulator: the single source of truth serialized at the end
//! of a run.

use crate::coordinate::Coordinate;
use crate::error::{CatalogError, Result};
use crate::normalize;
use crate::registry::VersionRegistry;
use std::collections::BTreeMap;

/// One `[versions]` line: a normalized key and its literal version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub key: String,
    pub value: String,
}

/// One `[libraries]` line. `version_ref` is absent when the declaration had
/// no version segment (the version arrives transitively, e.g. via a BOM).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    pub alias: String,
    pub module: String,
    pub version_ref: Option<String>,
}

/// The finalized accumulator state, sorted by key/alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub versions: Vec<VersionEntry>,
    pub libraries: Vec<LibraryEntry>,
}

/// Accumulates versions and libraries across all scanned build files.
///
/// Both maps are last-write-wins: when two files derive the same alias or
/// version key with different values, the later file silently overwrites the
/// earlier one, in scan order.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    versions: BTreeMap<String, String>,
    libraries: BTreeMap<String, (String, Option<String>)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_version(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.versions.insert(key.into(), value.into());
    }

    pub fn record_library(
        &mut self,
        alias: impl Into<String>,
        module: impl Into<String>,
        version_ref: Option<String>,
    ) {
        self.libraries
            .insert(alias.into(), (module.into(), version_ref));
    }

    /// Derive the alias and (when a version segment exists) the version key
    /// for one coordinate, record both, and return the alias for the line
    /// rewriter.
    ///
    /// A literal version is injected into the registry under the artifact
    /// name before resolution, so later files can reference it symbolically.
    /// The final registry lookup must succeed or the run aborts.
    pub fn record_dependency(
        &mut self,
        coordinate: &Coordinate,
        registry: &mut VersionRegistry,
    ) -> Result<String> {
        let alias = normalize::library_alias(&coordinate.artifact);
        let module = coordinate.module();

        let Some(version) = coordinate.version.as_deref() else {
            self.record_library(alias.clone(), module, None);
            return Ok(alias);
        };

        let name = if normalize::is_symbolic(version) {
            normalize::symbolic_name(version)
        } else {
            registry.insert(coordinate.artifact.clone(), version);
            coordinate.artifact.clone()
        };
        let name = normalize::special_version_name(&coordinate.group, &coordinate.artifact, &name);

        let value = registry
            .get(&name)
            .ok_or_else(|| CatalogError::MissingVersion {
                name: name.clone(),
                module: module.clone(),
            })?
            .to_string();

        let key = normalize::version_key(&name);
        self.record_version(key.clone(), value);
        self.record_library(alias.clone(), module, Some(key));
        Ok(alias)
    }

    /// Consume the builder; BTreeMap iteration yields entries sorted by key
    /// and alias.
    pub fn finalize(self) -> Catalog {
        Catalog {
            versions: self
                .versions
                .into_iter()
                .map(|(key, value)| VersionEntry { key, value })
                .collect(),
            libraries: self
                .libraries
                .into_iter()
                .map(|(alias, (module, version_ref))| LibraryEntry {
                    alias,
                    module,
                    version_ref,
                })
                .collect(),
        }
    }
}
