//! JSON graph export: a node/link document for downstream visualizers.

use std::path::Path;

use serde::Serialize;

use slngraph_core::DependencyReport;
use slngraph_util::errors::{SlnGraphError, SlnGraphResult};

/// Node classification in the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    Solution,
    Project,
}

#[derive(Debug, Serialize)]
pub struct Node {
    pub id: String,
    pub group: NodeGroup,
}

#[derive(Debug, Serialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub value: u32,
}

/// The serialized graph: `nodes` then `links`.
#[derive(Debug, Serialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

/// Build the node/link document: one node per solution and per resolved
/// package, one link per dependency edge, all in discovery order.
pub fn graph_document(report: &DependencyReport) -> GraphDocument {
    let mut nodes = Vec::new();
    for solution in report.solution_projects.keys() {
        nodes.push(Node {
            id: solution.clone(),
            group: NodeGroup::Solution,
        });
    }
    for package in report.dependencies.keys() {
        nodes.push(Node {
            id: package.clone(),
            group: NodeGroup::Project,
        });
    }

    let mut links = Vec::new();
    for (package, edges) in &report.dependencies {
        for edge in edges {
            links.push(Link {
                source: edge.solution.clone(),
                target: package.clone(),
                value: 1,
            });
        }
    }

    GraphDocument { nodes, links }
}

/// Serialize the document as pretty-printed JSON.
pub fn render_json(report: &DependencyReport) -> SlnGraphResult<String> {
    serde_json::to_string_pretty(&graph_document(report)).map_err(|e| {
        SlnGraphError::Render {
            message: format!("graph document: {e}"),
        }
        .into()
    })
}

/// Render and write the JSON document to `path`.
pub fn write_json(report: &DependencyReport, path: &Path) -> SlnGraphResult<()> {
    let json = render_json(report)?;
    std::fs::write(path, json).map_err(|e| SlnGraphError::Render {
        message: format!("{}: {e}", path.display()),
    })?;
    Ok(())
}
