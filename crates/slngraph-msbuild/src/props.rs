//! Central package manifest parsing: `Directory.Packages.props`.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use slngraph_core::PackageDeclaration;
use slngraph_util::errors::{SlnGraphError, SlnGraphResult};

/// Parse a `Directory.Packages.props` file into its ordered package
/// declarations.
///
/// Every `<PackageVersion>` element at any depth contributes one
/// declaration, in document order. Elements missing the `Include` or
/// `Version` attribute are skipped. A missing or malformed file is an
/// error — the caller treats the whole manifest as contributing nothing.
pub fn parse_packages_props(path: &Path) -> SlnGraphResult<Vec<PackageDeclaration>> {
    let xml = std::fs::read_to_string(path).map_err(|e| SlnGraphError::Packages {
        message: format!("{}: {e}", path.display()),
    })?;

    parse_packages_xml(&xml).map_err(|e| {
        SlnGraphError::Packages {
            message: format!("{}: {e}", path.display()),
        }
        .into()
    })
}

/// Extract package declarations from manifest XML content.
pub fn parse_packages_xml(xml: &str) -> Result<Vec<PackageDeclaration>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut declarations = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if e.name().as_ref() == b"PackageVersion" =>
            {
                if let Some(declaration) = read_declaration(e)? {
                    declarations.push(declaration);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e),
            _ => {}
        }
    }

    Ok(declarations)
}

fn read_declaration(element: &BytesStart<'_>) -> Result<Option<PackageDeclaration>, quick_xml::Error> {
    let mut name = None;
    let mut version = None;

    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        match attr.key.as_ref() {
            b"Include" => name = Some(attr.unescape_value()?.into_owned()),
            b"Version" => version = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    Ok(match (name, version) {
        (Some(name), Some(version)) => Some(PackageDeclaration { name, version }),
        _ => None,
    })
}
