//! Solution file parsing: extract the ordered project list from `.sln`
//! project-declaration lines.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use slngraph_core::{ProjectRef, Solution};
use slngraph_util::errors::{SlnGraphError, SlnGraphResult};
use slngraph_util::fs::normalize_path;

/// Matches `Project("{<guid>}") = "<Name>", "<RelativePath>", "{<guid>}"`
/// anchored at the start of a line. Trailing content is ignored.
static PROJECT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^Project\("\{.*\}"\) = "(.*)", "(.*)", "\{.*\}""#)
        .expect("valid project-line pattern")
});

/// Parse a solution file into its name and ordered project list.
///
/// Non-matching lines are ignored. Project paths are backslash-normalized,
/// resolved against the solution's directory, and lexically normalized.
pub fn parse_solution(path: &Path) -> SlnGraphResult<Solution> {
    let content = std::fs::read_to_string(path).map_err(|e| SlnGraphError::Solution {
        message: format!("{}: {e}", path.display()),
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let directory = path.parent().unwrap_or_else(|| Path::new(""));

    Ok(Solution {
        name,
        path: path.to_path_buf(),
        projects: parse_project_lines(&content, directory),
    })
}

/// Extract project declarations from solution file content, resolving each
/// relative path against `solution_dir`.
pub fn parse_project_lines(content: &str, solution_dir: &Path) -> Vec<ProjectRef> {
    let mut projects = Vec::new();
    for line in content.lines() {
        let Some(captures) = PROJECT_LINE.captures(line) else {
            continue;
        };
        let name = captures[1].to_string();
        // Solution files written on Windows use backslash separators.
        let relative = captures[2].replace('\\', "/");
        let path = normalize_path(&solution_dir.join(relative));
        projects.push(ProjectRef { name, path });
    }
    projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SOLUTION: &str = r#"Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Core", "Core\Core.csproj", "{11111111-2222-3333-4444-555555555555}"
EndProject
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Core.Tests", "tests/Core.Tests/Core.Tests.csproj", "{66666666-7777-8888-9999-000000000000}"
EndProject
Global
EndGlobal
"#;

    #[test]
    fn parses_declarations_in_order() {
        let projects = parse_project_lines(SOLUTION, Path::new("/tree/core"));
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Core");
        assert_eq!(projects[0].path, PathBuf::from("/tree/core/Core/Core.csproj"));
        assert_eq!(projects[1].name, "Core.Tests");
        assert_eq!(
            projects[1].path,
            PathBuf::from("/tree/core/tests/Core.Tests/Core.Tests.csproj")
        );
    }

    #[test]
    fn backslash_paths_are_normalized() {
        let content = r#"Project("{ABC}") = "App", "src\App\App.csproj", "{DEF}""#;
        let projects = parse_project_lines(content, Path::new("/tree/app"));
        assert_eq!(projects[0].path, PathBuf::from("/tree/app/src/App/App.csproj"));
    }

    #[test]
    fn non_matching_lines_are_ignored() {
        let content = "Global\n\tGlobalSection(SolutionConfigurationPlatforms) = preSolution\nEndGlobal\n";
        assert!(parse_project_lines(content, Path::new("/tree")).is_empty());
    }

    #[test]
    fn indented_declarations_do_not_match() {
        // The grammar is anchored at line start, like the original tooling.
        let content = r#"  Project("{ABC}") = "App", "App.csproj", "{DEF}""#;
        assert!(parse_project_lines(content, Path::new("/tree")).is_empty());
    }

    #[test]
    fn parse_solution_reads_file_and_names_it() {
        let tmp = tempfile::tempdir().unwrap();
        let sln = tmp.path().join("Billing.sln");
        std::fs::write(&sln, SOLUTION).unwrap();

        let solution = parse_solution(&sln).unwrap();
        assert_eq!(solution.name, "Billing.sln");
        assert_eq!(solution.projects.len(), 2);
        assert!(solution.projects[0].path.starts_with(tmp.path()));
    }

    #[test]
    fn parse_solution_missing_file_errors() {
        let err = parse_solution(Path::new("/no/such/Thing.sln")).unwrap_err();
        assert!(err.to_string().contains("Solution error"));
    }
}
