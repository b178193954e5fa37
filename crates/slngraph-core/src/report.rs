use indexmap::IndexMap;

/// One resolved dependency edge: a solution consuming a package at a
/// declared version.
///
/// Edges are recorded per match, so the same (solution, version) pair may
/// appear more than once when several other solutions list the matched
/// project. Renderers that need uniqueness deduplicate themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Name of the solution declaring the dependency.
    pub solution: String,
    /// The version string declared at the time the edge was recorded.
    pub version: String,
}

/// Output of cross-solution dependency resolution.
///
/// All mappings are insertion-ordered: keys appear in input discovery
/// order, values in declaration order, so two runs over an unchanged tree
/// produce identical structures.
#[derive(Debug, Clone, Default)]
pub struct DependencyReport {
    /// Solution name → assembly names of its projects that some solution
    /// consumes as a declared package. Every scanned solution has an entry,
    /// possibly empty.
    pub solution_projects: IndexMap<String, Vec<String>>,
    /// Package assembly name → edges from the solutions that depend on it.
    /// Only packages resolved to a project in another solution appear here.
    pub dependencies: IndexMap<String, Vec<DependencyEdge>>,
    /// Package name → solution name → declared version, last-write-wins
    /// within one solution. Tracks every declared package, resolvable or
    /// not.
    pub versions: IndexMap<String, IndexMap<String, String>>,
}

impl DependencyReport {
    /// Total number of resolved edges across all packages.
    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(Vec::len).sum()
    }

    /// Declared version for a (package, solution) pair, if any.
    pub fn version_of(&self, package: &str, solution: &str) -> Option<&str> {
        self.versions
            .get(package)
            .and_then(|by_solution| by_solution.get(solution))
            .map(String::as_str)
    }

    /// Packages that were declared somewhere but never resolved to a
    /// project in another solution.
    pub fn unresolved_packages(&self) -> Vec<&str> {
        self.versions
            .keys()
            .filter(|pkg| !self.dependencies.contains_key(pkg.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
