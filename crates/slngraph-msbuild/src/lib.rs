//! MSBuild manifest readers.
//!
//! Three leaf-level file formats, each parsed into plain `slngraph-core`
//! records with no cross-referencing:
//!
//! - solution files (`.sln`): line-oriented project declarations
//! - project files (`.csproj`): XML, optional `<AssemblyName>` element
//! - `Directory.Packages.props`: XML, central `<PackageVersion>` entries
//!
//! Readers return `Err` on unreadable or malformed input; deciding that
//! such a file simply contributes nothing is the resolver's job.

pub mod csproj;
pub mod props;
pub mod sln;

/// Extension of solution files, without the dot.
pub const SOLUTION_EXTENSION: &str = "sln";

/// Extension of project files, without the dot.
pub const PROJECT_EXTENSION: &str = "csproj";

/// File name of the central package-version manifest, looked up in each
/// solution's own directory.
pub const PACKAGES_PROPS_FILE: &str = "Directory.Packages.props";
