//! Cross-solution dependency resolution.
//!
//! The builder joins parsed solutions, project assembly names, and central
//! package declarations into a [`slngraph_core::DependencyReport`]: for
//! each declared package that matches a project built in a *different*
//! solution, the set of (solution, version) pairs depending on it.
//!
//! [`graph::SolutionGraph`] wraps a report in a petgraph view for
//! renderers and reverse-dependency queries.

pub mod builder;
pub mod graph;
