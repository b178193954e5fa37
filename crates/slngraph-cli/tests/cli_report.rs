use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn slngraph_cmd() -> Command {
    Command::cargo_bin("slngraph").unwrap()
}

/// Lay out a tree where B.sln depends on A.sln's Core project.
fn write_tree(root: &Path) {
    let a = root.join("a");
    let b = root.join("b");
    fs::create_dir_all(a.join("Core")).unwrap();
    fs::create_dir_all(b.join("App")).unwrap();

    fs::write(
        a.join("A.sln"),
        "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Core\", \"Core\\Core.csproj\", \"{11111111-2222-3333-4444-555555555555}\"\nEndProject\n",
    )
    .unwrap();
    fs::write(
        a.join("Core/Core.csproj"),
        "<Project Sdk=\"Microsoft.NET.Sdk\"><PropertyGroup/></Project>",
    )
    .unwrap();

    fs::write(
        b.join("B.sln"),
        "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"App\", \"App\\App.csproj\", \"{66666666-7777-8888-9999-000000000000}\"\nEndProject\n",
    )
    .unwrap();
    fs::write(
        b.join("App/App.csproj"),
        "<Project Sdk=\"Microsoft.NET.Sdk\"><PropertyGroup/></Project>",
    )
    .unwrap();
    fs::write(
        b.join("Directory.Packages.props"),
        "<Project><ItemGroup><PackageVersion Include=\"Core\" Version=\"1.2.0\" /></ItemGroup></Project>",
    )
    .unwrap();
}

#[test]
fn test_report_writes_all_artifacts() {
    let tree = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_tree(tree.path());

    slngraph_cmd()
        .arg("report")
        .arg(tree.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Core"))
        .stdout(predicate::str::contains("B.sln"))
        .stdout(predicate::str::contains("1.2.0"));

    let svg = fs::read_to_string(out.path().join("project_dependencies.svg")).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Core"));

    let table = fs::read_to_string(out.path().join("dependency_table.txt")).unwrap();
    assert!(table.contains("Project name"));
    assert!(table.contains("1.2.0"));
}

#[test]
fn test_report_creates_missing_out_dir() {
    let tree = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_tree(tree.path());
    let nested = out.path().join("artifacts/run1");

    slngraph_cmd()
        .arg("report")
        .arg(tree.path())
        .arg("--out-dir")
        .arg(&nested)
        .assert()
        .success();

    assert!(nested.join("project_dependencies.svg").is_file());
}

#[test]
fn test_table_prints_rows() {
    let tree = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_tree(tree.path());
    let output = out.path().join("deps.txt");

    slngraph_cmd()
        .arg("table")
        .arg(tree.path())
        .args(["--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("| Project name | Solution Name | Version |"));

    assert!(output.is_file());
}

#[test]
fn test_graph_writes_svg() {
    let tree = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_tree(tree.path());
    let output = out.path().join("deps.svg");

    slngraph_cmd()
        .arg("graph")
        .arg(tree.path())
        .args(["--output"])
        .arg(&output)
        .assert()
        .success();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("A.sln"));
}

#[test]
fn test_export_writes_node_link_json() {
    let tree = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_tree(tree.path());
    let output = out.path().join("graph.json");

    slngraph_cmd()
        .arg("export")
        .arg(tree.path())
        .args(["--output"])
        .arg(&output)
        .assert()
        .success();

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"nodes\""));
    assert!(json.contains("\"links\""));
    assert!(json.contains("\"solution\""));
    assert!(json.contains("\"project\""));
}

#[test]
fn test_missing_root_fails() {
    slngraph_cmd()
        .arg("report")
        .arg("/no/such/directory")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_empty_tree_still_succeeds() {
    let tree = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    slngraph_cmd()
        .arg("report")
        .arg(tree.path())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("no solution files found"));

    // Artifacts exist even when the graph is empty.
    assert!(out.path().join("project_dependencies.svg").is_file());
    assert!(out.path().join("dependency_table.txt").is_file());
}
