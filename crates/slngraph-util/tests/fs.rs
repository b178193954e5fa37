use std::path::{Path, PathBuf};

use slngraph_util::fs::{common_ancestor, ensure_dir, find_files_with_extension, normalize_path};
use tempfile::TempDir;

#[test]
fn test_find_files_recurses_into_subdirectories() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(tmp.path().join("top.sln"), "").unwrap();
    std::fs::write(nested.join("deep.sln"), "").unwrap();
    std::fs::write(nested.join("other.txt"), "").unwrap();

    let found = find_files_with_extension(tmp.path(), "sln");
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.extension().unwrap() == "sln"));
}

#[test]
fn test_find_files_on_missing_root_is_empty() {
    let tmp = TempDir::new().unwrap();
    let found = find_files_with_extension(&tmp.path().join("nope"), "sln");
    assert!(found.is_empty());
}

#[test]
fn test_find_files_on_file_root_is_empty() {
    // commonpath over a single solution yields the file itself; walking it
    // must produce nothing rather than erroring.
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("only.sln");
    std::fs::write(&file, "").unwrap();
    assert!(find_files_with_extension(&file, "csproj").is_empty());
}

#[test]
fn test_normalize_drops_dot_components() {
    assert_eq!(
        normalize_path(Path::new("/tree/./sub/proj.csproj")),
        PathBuf::from("/tree/sub/proj.csproj")
    );
}

#[test]
fn test_normalize_folds_parent_components() {
    assert_eq!(
        normalize_path(Path::new("/tree/sub/../proj.csproj")),
        PathBuf::from("/tree/proj.csproj")
    );
}

#[test]
fn test_normalize_is_lexical_only() {
    // The path does not exist; normalization must not care.
    assert_eq!(
        normalize_path(Path::new("/no/such/dir/../file")),
        PathBuf::from("/no/such/file")
    );
}

#[test]
fn test_common_ancestor_of_siblings() {
    let paths = vec![
        PathBuf::from("/tree/one/A.sln"),
        PathBuf::from("/tree/two/B.sln"),
    ];
    assert_eq!(common_ancestor(&paths), Some(PathBuf::from("/tree")));
}

#[test]
fn test_common_ancestor_same_directory() {
    let paths = vec![PathBuf::from("/tree/A.sln"), PathBuf::from("/tree/B.sln")];
    assert_eq!(common_ancestor(&paths), Some(PathBuf::from("/tree")));
}

#[test]
fn test_common_ancestor_single_path_is_itself() {
    let paths = vec![PathBuf::from("/tree/A.sln")];
    assert_eq!(common_ancestor(&paths), Some(PathBuf::from("/tree/A.sln")));
}

#[test]
fn test_common_ancestor_empty_input() {
    assert_eq!(common_ancestor(&[]), None);
}

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("x").join("y").join("z");
    assert!(!deep.exists());
    ensure_dir(&deep).unwrap();
    assert!(deep.is_dir());
}

#[test]
fn test_ensure_dir_idempotent() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("already");
    std::fs::create_dir(&dir).unwrap();
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
}
