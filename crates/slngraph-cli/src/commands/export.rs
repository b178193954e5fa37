//! Handler for `slngraph export`.

use std::path::Path;

use miette::Result;

use slngraph_render::json;
use slngraph_util::progress::status;

pub fn exec(root: &Path, output: &Path, verbose: bool) -> Result<()> {
    let report = super::load_report(root, verbose)?;
    json::write_json(&report, output)?;
    status("Exported", &output.display().to_string());
    Ok(())
}
