//! Handler for `slngraph table`.

use std::path::Path;

use miette::Result;

use slngraph_render::table;
use slngraph_util::progress::status_info;

pub fn exec(root: &Path, output: &Path, verbose: bool) -> Result<()> {
    let report = super::load_report(root, verbose)?;
    let rendered = table::write_table(&report, output)?;
    print!("{rendered}");
    status_info("Output", &output.display().to_string());
    Ok(())
}
