//! Pure catalog-building logic (no IO).
//!
//! Input: the text of Gradle build files and a seed version registry.
//! Output: rewritten file text plus an accumulated version catalog.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod coordinate;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod registry;
pub mod rewrite;

pub use catalog::{Catalog, CatalogBuilder, LibraryEntry, VersionEntry};
pub use coordinate::Coordinate;
pub use error::{CatalogError, Result};
pub use matcher::{match_dependency_line, DependencyLine};
pub use registry::VersionRegistry;
pub use rewrite::{rewrite_line, rewrite_source};
