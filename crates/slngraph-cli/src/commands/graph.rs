//! Handler for `slngraph graph`.

use std::path::Path;

use miette::Result;

use slngraph_render::svg;
use slngraph_util::progress::status;

pub fn exec(root: &Path, output: &Path, verbose: bool) -> Result<()> {
    let report = super::load_report(root, verbose)?;
    svg::write_svg(&report, output)?;
    status("Rendered", &output.display().to_string());
    Ok(())
}
