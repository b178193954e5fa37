//! Core data types for slngraph.
//!
//! This crate defines the types that represent a scanned solution tree:
//! solutions and their project references, centrally declared package
//! versions, and the resolved cross-solution dependency report.
//!
//! This crate is intentionally free of I/O; all parsing lives in
//! `slngraph-msbuild` and all resolution in `slngraph-resolver`.

pub mod package;
pub mod report;
pub mod solution;

pub use package::PackageDeclaration;
pub use report::{DependencyEdge, DependencyReport};
pub use solution::{ProjectRef, Solution};
