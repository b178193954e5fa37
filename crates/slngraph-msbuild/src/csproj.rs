//! Project file parsing: resolve a project's assembly name.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use slngraph_util::errors::{SlnGraphError, SlnGraphResult};

/// Resolve the assembly name of a project file.
///
/// Precedence: the text of the first `<AssemblyName>` element in document
/// order; otherwise the file's base name with the extension stripped.
/// A missing file or malformed XML is an error — the caller treats the
/// project as unresolved.
pub fn assembly_name(path: &Path) -> SlnGraphResult<String> {
    let xml = std::fs::read_to_string(path).map_err(|e| SlnGraphError::Project {
        message: format!("{}: {e}", path.display()),
    })?;

    match parse_assembly_name(&xml) {
        Ok(Some(name)) => Ok(name),
        Ok(None) => Ok(path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()),
        Err(e) => Err(SlnGraphError::Project {
            message: format!("{}: {e}", path.display()),
        }
        .into()),
    }
}

/// Extract the first `<AssemblyName>` element's text from project XML.
///
/// Returns `Ok(None)` when the document parses but declares no non-empty
/// assembly name. The whole document must be well-formed: an error after
/// the element still discards the file, matching eager-parser behavior.
pub fn parse_assembly_name(xml: &str) -> Result<Option<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut found: Option<String> = None;
    let mut in_assembly_name = false;
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"AssemblyName" => {
                in_assembly_name = true;
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) if in_assembly_name => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"AssemblyName" => {
                if in_assembly_name && found.is_none() {
                    found = Some(text_buf.clone());
                }
                in_assembly_name = false;
            }
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"AssemblyName" => {
                // Self-closing element: first occurrence, empty text.
                if found.is_none() {
                    found = Some(String::new());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e),
            _ => {}
        }
    }

    Ok(found.filter(|name| !name.is_empty()))
}
