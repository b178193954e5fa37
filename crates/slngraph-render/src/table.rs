//! Plain-text dependency table: one row per (package, solution) pair.

use std::path::Path;

use slngraph_core::DependencyReport;
use slngraph_util::errors::{SlnGraphError, SlnGraphResult};

const HEADERS: [&str; 3] = ["Project name", "Solution Name", "Version"];

/// Render the dependency table as a bordered, center-aligned text block.
///
/// The version column comes from the versions map, not the edge, so a
/// package declared twice by one solution shows its surviving version.
pub fn render_table(report: &DependencyReport) -> String {
    let mut rows: Vec<[String; 3]> = Vec::new();
    for (package, edges) in &report.dependencies {
        for edge in edges {
            let version = report
                .version_of(package, &edge.solution)
                .unwrap_or(&edge.version);
            rows.push([package.clone(), edge.solution.clone(), version.to_string()]);
        }
    }

    let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_separator(&mut out, &widths);
    push_row(&mut out, &widths, &HEADERS.map(String::from));
    push_separator(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, &widths, row);
    }
    push_separator(&mut out, &widths);
    out
}

/// Render the table and write it to `path`.
pub fn write_table(report: &DependencyReport, path: &Path) -> SlnGraphResult<String> {
    let table = render_table(report);
    std::fs::write(path, &table).map_err(|e| SlnGraphError::Render {
        message: format!("{}: {e}", path.display()),
    })?;
    Ok(table)
}

fn push_separator(out: &mut String, widths: &[usize; 3]) {
    out.push('+');
    for width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out.push('\n');
}

fn push_row(out: &mut String, widths: &[usize; 3], cells: &[String; 3]) {
    out.push('|');
    for (width, cell) in widths.iter().zip(cells.iter()) {
        out.push(' ');
        out.push_str(&center(cell, *width));
        out.push_str(" |");
    }
    out.push('\n');
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len);
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
