//! SVG rendering: a layered two-column drawing with solutions on the left,
//! packages on the right, and edges colored per originating solution.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use slngraph_core::DependencyReport;
use slngraph_resolver::graph::SolutionGraph;
use slngraph_util::errors::{SlnGraphError, SlnGraphResult};

/// Edge colors, assigned per solution in discovery order, cycling.
const PALETTE: [&str; 5] = ["red", "blue", "green", "purple", "orange"];

const NODE_HEIGHT: f64 = 36.0;
const VERTICAL_GAP: f64 = 24.0;
const COLUMN_GAP: f64 = 360.0;
const MARGIN: f64 = 40.0;
const CHAR_WIDTH: f64 = 7.5;

/// Render the dependency graph as an SVG document.
pub fn render_svg(report: &DependencyReport) -> String {
    let graph = SolutionGraph::from_report(report);
    let solutions = graph.solutions();
    let packages = graph.packages();
    debug!(
        solutions = solutions.len(),
        packages = packages.len(),
        "laying out dependency graph"
    );

    let solution_width = column_width(solutions.iter().map(|n| n.id.as_str()));
    let package_width = column_width(packages.iter().map(|n| n.id.as_str()));

    let rows = solutions.len().max(packages.len()).max(1);
    let inner_height = rows as f64 * (NODE_HEIGHT + VERTICAL_GAP) - VERTICAL_GAP;
    let width = MARGIN * 2.0 + solution_width + COLUMN_GAP + package_width;
    let height = MARGIN * 2.0 + inner_height;

    let solution_x = MARGIN;
    let package_x = MARGIN + solution_width + COLUMN_GAP;

    // Node centers, keyed by id within each column.
    let solution_pos = column_positions(&solutions, inner_height);
    let package_pos = column_positions(&packages, inner_height);

    let colors: HashMap<&str, &str> = solutions
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), PALETTE[i % PALETTE.len()]))
        .collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    write_markers(&mut out);

    // Edges first so nodes paint over their endpoints.
    for (solution, package, version) in graph.edges() {
        let (Some(from_y), Some(to_y)) = (solution_pos.get(solution), package_pos.get(package))
        else {
            continue;
        };
        let color = colors.get(solution).copied().unwrap_or("black");
        let x1 = solution_x + solution_width;
        let y1 = from_y + NODE_HEIGHT / 2.0;
        let x2 = package_x;
        let y2 = to_y + NODE_HEIGHT / 2.0;
        let _ = writeln!(
            out,
            r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="1.5" marker-end="url(#arrow-{color})"><title>{} -&gt; {} ({})</title></line>"#,
            escape(solution),
            escape(package),
            escape(version),
        );
    }

    for node in &solutions {
        let y = solution_pos[node.id.as_str()];
        write_node(&mut out, solution_x, y, solution_width, &node.id, "lightblue");
    }
    for node in &packages {
        let y = package_pos[node.id.as_str()];
        write_node(&mut out, package_x, y, package_width, &node.id, "lightgreen");
    }

    out.push_str("</svg>\n");
    out
}

/// Render and write the SVG to `path`.
pub fn write_svg(report: &DependencyReport, path: &Path) -> SlnGraphResult<()> {
    let svg = render_svg(report);
    std::fs::write(path, svg).map_err(|e| SlnGraphError::Render {
        message: format!("{}: {e}", path.display()),
    })?;
    Ok(())
}

fn column_width<'a>(ids: impl Iterator<Item = &'a str>) -> f64 {
    let longest = ids.map(|id| id.chars().count()).max().unwrap_or(0);
    (longest as f64 * CHAR_WIDTH + 24.0).max(120.0)
}

/// Vertical centering: shorter columns start lower so both columns share a
/// midline, like the original multipartite layout.
fn column_positions<'a>(
    nodes: &[&'a slngraph_resolver::graph::GraphNode],
    inner_height: f64,
) -> HashMap<&'a str, f64> {
    let count = nodes.len();
    let column_height = if count == 0 {
        0.0
    } else {
        count as f64 * (NODE_HEIGHT + VERTICAL_GAP) - VERTICAL_GAP
    };
    let offset = MARGIN + (inner_height - column_height) / 2.0;
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            (
                node.id.as_str(),
                offset + i as f64 * (NODE_HEIGHT + VERTICAL_GAP),
            )
        })
        .collect()
}

fn write_markers(out: &mut String) {
    out.push_str("  <defs>\n");
    for color in PALETTE {
        let _ = writeln!(
            out,
            r#"    <marker id="arrow-{color}" viewBox="0 0 8 8" refX="8" refY="4" markerWidth="8" markerHeight="8" orient="auto"><path d="M0,0 L8,4 L0,8 z" fill="{color}"/></marker>"#
        );
    }
    let _ = writeln!(
        out,
        r#"    <marker id="arrow-black" viewBox="0 0 8 8" refX="8" refY="4" markerWidth="8" markerHeight="8" orient="auto"><path d="M0,0 L8,4 L0,8 z" fill="black"/></marker>"#
    );
    out.push_str("  </defs>\n");
}

fn write_node(out: &mut String, x: f64, y: f64, width: f64, label: &str, fill: &str) {
    let cx = x + width / 2.0;
    let cy = y + NODE_HEIGHT / 2.0 + 4.0;
    let _ = writeln!(
        out,
        r#"  <g><rect x="{x}" y="{y}" width="{width}" height="{NODE_HEIGHT}" rx="6" fill="{fill}" stroke="black"/><text x="{cx}" y="{cy}" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="12" font-weight="bold">{}</text></g>"#,
        escape(label),
    );
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use slngraph_core::DependencyEdge;

    fn sample_report() -> DependencyReport {
        let mut report = DependencyReport::default();
        report
            .solution_projects
            .insert("A.sln".to_string(), vec!["Core".to_string()]);
        report.solution_projects.insert("B.sln".to_string(), vec![]);
        report
            .dependencies
            .entry("Core".to_string())
            .or_default()
            .push(DependencyEdge {
                solution: "B.sln".to_string(),
                version: "1.2.0".to_string(),
            });
        report
    }

    #[test]
    fn renders_nodes_and_edge() {
        let svg = render_svg(&sample_report());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains(">A.sln</text>"));
        assert!(svg.contains(">B.sln</text>"));
        assert!(svg.contains(">Core</text>"));
        assert!(svg.contains("lightblue"));
        assert!(svg.contains("lightgreen"));
        assert!(svg.contains("<line"));
    }

    #[test]
    fn edge_color_follows_declaring_solution() {
        // B.sln is the second solution, so its edges are blue.
        let svg = render_svg(&sample_report());
        assert!(svg.contains(r#"stroke="blue""#));
        assert!(svg.contains("url(#arrow-blue)"));
    }

    #[test]
    fn empty_report_is_still_valid_svg() {
        let svg = render_svg(&DependencyReport::default());
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn labels_are_escaped() {
        let mut report = DependencyReport::default();
        report
            .solution_projects
            .insert("A&B.sln".to_string(), vec![]);
        let svg = render_svg(&report);
        assert!(svg.contains("A&amp;B.sln"));
        assert!(!svg.contains(">A&B.sln<"));
    }

    #[test]
    fn write_svg_persists_output() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("project_dependencies.svg");
        write_svg(&sample_report(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("</svg>"));
    }
}
