/// A centrally declared package dependency: a (name, version) pair from a
/// solution-scoped `Directory.Packages.props`.
///
/// Versions are opaque strings. No semantic-version parsing or comparison
/// is ever performed on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDeclaration {
    pub name: String,
    pub version: String,
}
