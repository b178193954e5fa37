use std::path::PathBuf;

/// A project declaration inside a solution file.
///
/// `path` has already been resolved against the owning solution's directory
/// and lexically normalized, so it can be compared against discovered
/// project files directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub name: String,
    pub path: PathBuf,
}

/// A parsed solution file: its file name and the ordered project list
/// declared in it.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The solution file's name, e.g. `Billing.sln`. Used as the key in all
    /// report mappings.
    pub name: String,
    /// Full path to the solution file.
    pub path: PathBuf,
    /// Projects in declaration order.
    pub projects: Vec<ProjectRef>,
}

impl Solution {
    /// Directory containing the solution file. Package manifests are looked
    /// up here.
    pub fn directory(&self) -> PathBuf {
        self.path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default()
    }
}
