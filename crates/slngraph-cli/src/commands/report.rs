//! Handler for `slngraph report`: the full pipeline, every artifact.

use std::path::Path;

use miette::Result;

use slngraph_render::{svg, table};
use slngraph_util::errors::SlnGraphError;
use slngraph_util::fs::ensure_dir;
use slngraph_util::progress::{status, status_info};

pub fn exec(root: &Path, out_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let report = super::load_report(root, verbose)?;

    let out_dir = out_dir.unwrap_or_else(|| Path::new("."));
    ensure_dir(out_dir).map_err(SlnGraphError::Io)?;

    let svg_path = out_dir.join("project_dependencies.svg");
    svg::write_svg(&report, &svg_path)?;
    status("Rendered", &svg_path.display().to_string());

    let table_path = out_dir.join("dependency_table.txt");
    let rendered = table::write_table(&report, &table_path)?;
    print!("{rendered}");
    status_info("Output", &table_path.display().to_string());

    Ok(())
}
