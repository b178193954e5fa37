//! Petgraph-backed view of a dependency report, for renderers and
//! reverse-dependency queries.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use slngraph_core::DependencyReport;

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Solution,
    Package,
}

/// A node in the solution/package graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
}

/// A directed bipartite graph: solution nodes pointing at the packages
/// they consume, edge weights carrying the declared version.
pub struct SolutionGraph {
    graph: DiGraph<GraphNode, String>,
    /// Solutions and packages live in separate namespaces, so the lookup
    /// key includes the kind.
    index: HashMap<(NodeKind, String), NodeIndex>,
}

impl SolutionGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Build the graph view of a report: one node per solution, one per
    /// package (consumed or merely consumable), one edge per distinct
    /// (solution, package) pair.
    pub fn from_report(report: &DependencyReport) -> Self {
        let mut graph = Self::new();

        for (solution, projects) in &report.solution_projects {
            graph.add_node(solution.clone(), NodeKind::Solution);
            for project in projects {
                graph.add_node(project.clone(), NodeKind::Package);
            }
        }

        for (package, edges) in &report.dependencies {
            let package_idx = graph.add_node(package.clone(), NodeKind::Package);
            for edge in edges {
                let solution_idx = graph.add_node(edge.solution.clone(), NodeKind::Solution);
                graph.add_edge(solution_idx, package_idx, edge.version.clone());
            }
        }

        graph
    }

    /// Add or retrieve a node. An existing (kind, id) pair returns its
    /// index unchanged.
    pub fn add_node(&mut self, id: String, kind: NodeKind) -> NodeIndex {
        let key = (kind, id);
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            id: key.1.clone(),
            kind,
        });
        self.index.insert(key, idx);
        idx
    }

    /// Add an edge unless one already links the same pair of nodes.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, version: String) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, version);
        }
    }

    /// Look up a node by kind and id.
    pub fn find(&self, kind: NodeKind, id: &str) -> Option<NodeIndex> {
        self.index.get(&(kind, id.to_string())).copied()
    }

    /// All solution nodes, in insertion order.
    pub fn solutions(&self) -> Vec<&GraphNode> {
        self.nodes_of_kind(NodeKind::Solution)
    }

    /// All package nodes, in insertion order.
    pub fn packages(&self) -> Vec<&GraphNode> {
        self.nodes_of_kind(NodeKind::Package)
    }

    fn nodes_of_kind(&self, kind: NodeKind) -> Vec<&GraphNode> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph[idx].kind == kind)
            .map(|idx| &self.graph[idx])
            .collect()
    }

    /// Solutions consuming a package, with the declared version on each
    /// edge.
    pub fn dependents_of(&self, package: &str) -> Vec<(&str, &str)> {
        let Some(idx) = self.find(NodeKind::Package, package) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| (self.graph[e.source()].id.as_str(), e.weight().as_str()))
            .collect()
    }

    /// Every (solution, package, version) edge in the graph.
    pub fn edges(&self) -> Vec<(&str, &str, &str)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].id.as_str(),
                    self.graph[e.target()].id.as_str(),
                    e.weight().as_str(),
                )
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl Default for SolutionGraph {
    fn default() -> Self {
        Self::new()
    }
}
