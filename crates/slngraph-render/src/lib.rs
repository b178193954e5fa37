//! Presentation layer: render a [`slngraph_core::DependencyReport`] as an
//! SVG graph, a plain-text table, or a JSON node/link document.
//!
//! Renderers only read the report (and its graph view); swapping one out
//! never touches resolution.

pub mod json;
pub mod svg;
pub mod table;
