//! The core resolution algorithm: two passes over the solution set plus a
//! project index, producing a [`DependencyReport`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

use slngraph_core::{DependencyEdge, DependencyReport, Solution};
use slngraph_msbuild::{csproj, props, sln, PACKAGES_PROPS_FILE, PROJECT_EXTENSION, SOLUTION_EXTENSION};
use slngraph_util::fs::{common_ancestor, find_files_with_extension, normalize_path};

/// Discover all solution files beneath `root` and build the report.
pub fn build_from_root(root: &Path) -> DependencyReport {
    let solutions = find_files_with_extension(root, SOLUTION_EXTENSION);
    build_report(&solutions)
}

/// Build the cross-solution dependency report from a set of solution file
/// paths.
///
/// Never fails: every per-file error (unreadable solution, malformed
/// project XML, broken package manifest) is logged and that file
/// contributes nothing; the report is assembled from whatever parsed.
pub fn build_report(solution_paths: &[PathBuf]) -> DependencyReport {
    // Pass 1: collect solution membership. A solution whose file cannot be
    // read still gets an entry with an empty project list.
    let solutions = read_solutions(solution_paths);

    // Index every project file beneath the common ancestor of the input
    // solutions by its resolved assembly name.
    let assembly_index = index_assemblies(solution_paths);

    // Pass 2: resolve declared packages against the index.
    let mut all_declared: HashSet<String> = HashSet::new();
    let mut dependencies: IndexMap<String, Vec<DependencyEdge>> = IndexMap::new();
    let mut versions: IndexMap<String, IndexMap<String, String>> = IndexMap::new();

    for solution in &solutions {
        let props_path = solution.directory().join(PACKAGES_PROPS_FILE);
        if !props_path.is_file() {
            // Absence of a central package manifest is normal.
            debug!(solution = %solution.name, "no package manifest, skipping");
            continue;
        }

        let declarations = match props::parse_packages_props(&props_path) {
            Ok(declarations) => declarations,
            Err(e) => {
                warn!("skipping package manifest: {e}");
                continue;
            }
        };

        for declaration in declarations {
            all_declared.insert(declaration.name.clone());
            versions
                .entry(declaration.name.clone())
                .or_default()
                .insert(solution.name.clone(), declaration.version.clone());

            let Some(indexed_path) = assembly_index.get(&declaration.name) else {
                continue;
            };

            // The package resolves to an in-tree project. Record one edge
            // per listing of that project in a *different* solution;
            // self-references never become edges.
            for other in &solutions {
                if other.name == solution.name {
                    continue;
                }
                for project in &other.projects {
                    if project.path == *indexed_path {
                        dependencies
                            .entry(declaration.name.clone())
                            .or_default()
                            .push(DependencyEdge {
                                solution: solution.name.clone(),
                                version: declaration.version.clone(),
                            });
                    }
                }
            }
        }
    }

    // Restrict each solution's project list to projects that some solution
    // consumes as a declared package.
    let mut solution_projects: IndexMap<String, Vec<String>> = IndexMap::new();
    for solution in &solutions {
        let mut filtered = Vec::new();
        for project in &solution.projects {
            let name = match csproj::assembly_name(&project.path) {
                Ok(name) => name,
                Err(e) => {
                    debug!("unresolved project in {}: {e}", solution.name);
                    continue;
                }
            };
            if all_declared.contains(&name) {
                filtered.push(name);
            }
        }
        solution_projects.insert(solution.name.clone(), filtered);
    }

    // Defensive: by construction every edge key was declared somewhere.
    dependencies.retain(|package, _| all_declared.contains(package));

    DependencyReport {
        solution_projects,
        dependencies,
        versions,
    }
}

fn read_solutions(solution_paths: &[PathBuf]) -> Vec<Solution> {
    let mut solutions = Vec::new();
    for path in solution_paths {
        match sln::parse_solution(path) {
            Ok(solution) => solutions.push(solution),
            Err(e) => {
                warn!("skipping solution contents: {e}");
                solutions.push(Solution {
                    name: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    path: path.clone(),
                    projects: Vec::new(),
                });
            }
        }
    }
    solutions
}

/// Map every resolvable assembly name beneath the solutions' common
/// ancestor to its project file path. Duplicate assembly names resolve
/// last-write-wins in discovery order.
fn index_assemblies(solution_paths: &[PathBuf]) -> IndexMap<String, PathBuf> {
    let mut index = IndexMap::new();
    let Some(base) = common_ancestor(solution_paths) else {
        return index;
    };

    for project_file in find_files_with_extension(&base, PROJECT_EXTENSION) {
        match csproj::assembly_name(&project_file) {
            Ok(name) => {
                let normalized = normalize_path(&project_file);
                if let Some(previous) = index.insert(name.clone(), normalized) {
                    debug!(
                        assembly = %name,
                        shadowed = %previous.display(),
                        "duplicate assembly name, later project wins"
                    );
                }
            }
            Err(e) => warn!("skipping project: {e}"),
        }
    }
    index
}
