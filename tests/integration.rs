//! Integration tests for rdi-bench against real directory trees


use harness::{TestTree, counts_for_all, errors_for_all};
use rdi_bench::{
    ExtensionSet, FsReader, Scope, Strategy, TraversalConfig, WalkError, Walker, count_matches,
    pattern_filter_count, post_filter_count, predicate_filter_count,
};

#[test]
fn test_flat_tree_counts_four() {
    let tree = TestTree::new();
    tree.add_files(&["a.c", "b.h", "c.cpp", "d.hpp", "e.txt", "f"]);

    assert_eq!(counts_for_all(tree.path()), vec![4, 4, 4]);
}

#[test]
fn test_empty_tree_counts_zero() {
    let tree = TestTree::new();
    assert_eq!(counts_for_all(tree.path()), vec![0, 0, 0]);
}

#[test]
fn test_nested_match_three_levels_deep() {
    let tree = TestTree::new();
    tree.add_files(&[
        "one/README",
        "one/two/notes.txt",
        "one/two/three/deep.cpp",
        "one/two/three/Makefile",
    ]);

    assert_eq!(counts_for_all(tree.path()), vec![1, 1, 1]);
}

#[test]
fn test_missing_root_is_not_found() {
    let tree = TestTree::new();
    let missing = tree.path().join("gecko-dev-master");

    for err in errors_for_all(&missing) {
        assert!(matches!(err, WalkError::NotFound { .. }), "got {err:?}");
    }
}

#[test]
fn test_file_root_is_not_a_directory() {
    let tree = TestTree::new();
    let file = tree.add_file("main.c");

    for err in errors_for_all(&file) {
        assert!(matches!(err, WalkError::NotADirectory { .. }), "got {err:?}");
    }
}

#[test]
fn test_convenience_entry_points_agree() {
    let (tree, expected) = TestTree::synthetic(3, 2, 9);

    assert_eq!(post_filter_count(tree.path()).unwrap(), expected);
    assert_eq!(pattern_filter_count(tree.path()).unwrap(), expected);
    assert_eq!(predicate_filter_count(tree.path()).unwrap(), expected);
}

#[test]
fn test_repeated_runs_are_identical() {
    let (tree, _) = TestTree::synthetic(2, 3, 5);
    let first = counts_for_all(tree.path());
    let second = counts_for_all(tree.path());
    assert_eq!(first, second);
}

#[test]
fn test_case_sensitive_matching() {
    let tree = TestTree::new();
    tree.add_files(&["lower.c", "UPPER.C", "Mixed.Cpp", "header.H"]);

    assert_eq!(counts_for_all(tree.path()), vec![1, 1, 1]);
}

#[test]
fn test_custom_extension_set_on_disk() {
    let tree = TestTree::new();
    tree.add_files(&["Cargo.toml", "src/lib.rs", "src/walk/mod.rs", "README.md"]);
    let exts = ExtensionSet::new(["rs"]).unwrap();

    for strategy in Strategy::ALL {
        let count = count_matches(FsReader, tree.path(), strategy, &exts).unwrap();
        assert_eq!(count, 2, "{strategy}");
    }
}

#[test]
fn test_walker_yields_directories_unless_files_only() {
    let tree = TestTree::new();
    tree.add_files(&["src/a.c", "src/b.h"]);
    tree.add_dir("empty");

    let all = Walker::new(FsReader, TraversalConfig::new(tree.path()));
    let entries: Vec<_> = all.walk().unwrap().collect();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries.iter().filter(|e| e.is_dir()).count(), 2);

    let files = Walker::new(
        FsReader,
        TraversalConfig::new(tree.path()).with_scope(Scope::FilesOnly),
    );
    let entries: Vec<_> = files.walk().unwrap().collect();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.is_file()));
}

#[test]
fn test_parent_precedes_children() {
    let tree = TestTree::new();
    tree.add_files(&["x/y/z/leaf.h", "x/other.c"]);

    let walker = Walker::new(FsReader, TraversalConfig::new(tree.path()));
    let paths: Vec<_> = walker.walk().unwrap().map(|e| e.into_path()).collect();

    for (i, path) in paths.iter().enumerate() {
        if let Some(parent) = path.parent() {
            if parent != tree.path() {
                let parent_pos = paths.iter().position(|p| p == parent).unwrap();
                assert!(parent_pos < i, "{} listed before its parent", path.display());
            }
        }
    }
}
