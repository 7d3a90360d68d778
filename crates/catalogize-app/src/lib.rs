//! Use case orchestration for catalogize.
//!
//! The rewrite runs in two phases: `plan_rewrite` scans every build file and
//! stages all rewritten content in memory; `commit_rewrite` writes the staged
//! files and the catalog. A failure anywhere in the scan aborts before any
//! file has been touched on disk.
//!
//! The CLI crate depends on this; it only handles argument parsing and exit
//! codes.

#![forbid(unsafe_code)]

mod rewrite;

pub use rewrite::{commit_rewrite, plan_rewrite, RewriteInput, RewritePlan, StagedFile};
