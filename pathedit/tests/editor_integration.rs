//! Integration tests for editing workflows.
//!
//! These exercise the public editor API end to end: building an editor
//! from a joined value, chaining edits, inspecting history, reverting and
//! rendering the result.

mod common;
use common::{create_dirs, editor, existing};

use pathedit::{
    AddMode, Error, FsDirectoryCheck, OutputFormat, PathEditor, ShellType, SYSTEM_PATHS,
};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_joined_and_list_input_agree() {
    let joined = PathEditor::new("/a:/b::/c", ':');
    let list = editor(&["/a", "/b", "", "/c"]);
    assert_eq!(joined.paths(), list.paths());
    assert_eq!(joined.joined(), "/a:/b::/c");
}

#[test]
fn test_dynamic_input_kind_checked() {
    assert!(PathEditor::from_value(json!("/a:/b"), ':').is_ok());
    assert!(PathEditor::from_value(json!(["/a", "/b"]), ':').is_ok());

    for bad in [json!(null), json!(3), json!({"path": "/a"}), json!(["/a", 1])] {
        let err = PathEditor::from_value(bad, ':').unwrap_err();
        assert!(matches!(err, Error::InvalidInputKind { .. }));
    }
}

#[test]
fn test_custom_separator() {
    let editor = PathEditor::new(r"C:\bin;C:\tools", ';');
    assert_eq!(editor.len(), 2);
    assert_eq!(editor.joined(), r"C:\bin;C:\tools");
}

// =============================================================================
// Cleaning workflows
// =============================================================================

#[test]
fn test_full_cleanup_workflow() {
    let mut editor = PathEditor::new(
        "/bin:/home/me/bin:/usr/local/bin:/usr/lib/jvm/bin:/gone:/home/me/bin:/usr/bin",
        ':',
    );
    let check = existing(&[
        "/bin",
        "/home/me/bin",
        "/usr/local/bin",
        "/usr/lib/jvm/bin",
        "/usr/bin",
    ]);

    assert_eq!(editor.find_duplicates(), ["/home/me/bin"]);
    assert_eq!(editor.find_invalid(&check), ["/gone"]);

    editor.clean(&check);

    assert_eq!(
        editor.paths(),
        [
            "/home/me/bin",
            "/usr/lib/jvm/bin",
            "/usr/local/bin",
            "/usr/bin",
            "/bin",
        ]
    );
    assert!(editor.find_duplicates().is_empty());
    assert!(editor.find_invalid(&check).is_empty());

    let operations: Vec<_> = editor.history().map(|s| s.operation().to_string()).collect();
    assert_eq!(
        operations,
        [
            "ensure_sys_path_order",
            "remove_invalid",
            "remove_duplicates",
            "init"
        ]
    );
}

#[test]
fn test_cleanup_against_real_directories() {
    let temp = TempDir::new().unwrap();
    let dirs = create_dirs(temp.path(), &["one", "two"]);
    let missing = temp.path().join("missing").to_string_lossy().into_owned();

    let mut editor = PathEditor::new(vec![dirs[0].clone(), missing, dirs[1].clone()], ':');
    editor.remove_invalid(&FsDirectoryCheck);
    assert_eq!(editor.paths(), dirs.as_slice());
}

#[test]
fn test_system_paths_only_present_ones_reordered() {
    let mut editor = editor(&["/snap/bin", "/x", "/usr/bin"]);
    editor.ensure_sys_path_order();
    assert_eq!(editor.paths(), ["/x", "/usr/bin", "/snap/bin"]);
    assert!(editor.paths().iter().all(|p| p != SYSTEM_PATHS[0]));
}

#[test]
fn test_custom_system_paths() {
    let mut editor = editor(&["/sys/b", "/x", "/sys/a"]).with_system_paths(["/sys/a", "/sys/b"]);
    editor.ensure_sys_path_order();
    assert_eq!(editor.paths(), ["/x", "/sys/a", "/sys/b"]);
}

// =============================================================================
// Adding, removing and moving
// =============================================================================

#[test]
fn test_add_modes() {
    let mut editor = editor(&["/a"]);
    editor.add_path("/first", AddMode::Prepend);
    editor.add_path("/last", AddMode::Append);
    assert_eq!(editor.paths(), ["/first", "/a", "/last"]);
    assert_eq!(
        editor.history().next().map(|s| s.operation().to_string()),
        Some("add_path(/last)".to_string())
    );
}

#[test]
fn test_add_mode_parsing() {
    assert_eq!("append".parse::<AddMode>().unwrap(), AddMode::Append);
    assert!(matches!(
        "sideways".parse::<AddMode>(),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_remove_and_insert() {
    let mut editor = editor(&["/a", "/b", "/a", "/c"]);
    editor.remove_path("/a");
    assert_eq!(editor.paths(), ["/b", "/c"]);

    editor.insert_path("/b", 1).unwrap();
    assert_eq!(editor.paths(), ["/c", "/b"]);

    let before = editor.history_len();
    let err = editor.insert_path("/z", 5).unwrap_err();
    assert!(matches!(
        err,
        Error::OutOfRange {
            requested: 5,
            available: 2
        }
    ));
    assert_eq!(editor.history_len(), before);
}

// =============================================================================
// History and revert
// =============================================================================

#[test]
fn test_revert_walks_back_through_history() {
    let mut editor = editor(&["/a", "/a", "/b"]);
    editor.remove_duplicates();
    editor.add_path("/c", AddMode::Append);
    editor.remove_path("/a");
    assert_eq!(editor.paths(), ["/b", "/c"]);

    editor.revert_change(1).unwrap();
    assert_eq!(editor.paths(), ["/a", "/b", "/c"]);

    editor.revert_change(2).unwrap();
    assert_eq!(editor.paths(), ["/a", "/a", "/b"]);
    assert_eq!(editor.history_len(), 1);
}

#[test]
fn test_revert_past_init_fails() {
    let mut editor = editor(&["/a"]);
    editor.add_path("/b", AddMode::Prepend);

    let err = editor.revert_change(2).unwrap_err();
    assert!(matches!(
        err,
        Error::OutOfRange {
            requested: 2,
            available: 1
        }
    ));
    assert_eq!(editor.paths(), ["/b", "/a"]);

    editor.revert_change(0).unwrap();
    assert_eq!(editor.history_len(), 2);
}

#[test]
fn test_diffs() {
    let mut editor = editor(&["/a", "/b"]);
    assert!(editor.last_change().is_none());

    editor.add_path("/c", AddMode::Prepend);
    editor.remove_path("/a");

    let last = editor.last_change().unwrap();
    assert_eq!(last.removed(), ["/a"]);
    assert!(last.added().is_empty());

    let total = editor.diff_from_init();
    assert_eq!(total.added(), ["/c"]);
    assert_eq!(total.removed(), ["/a"]);
    assert!(!total.reordered());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_all_formats() {
    let editor = editor(&["/a", " ", "/b c"]);

    assert_eq!(editor.serialize(OutputFormat::Path).unwrap(), "/a:/b c");
    assert_eq!(editor.serialize(OutputFormat::List).unwrap(), "/a\n/b c");

    let json: Vec<String> =
        serde_json::from_str(&editor.serialize(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json, ["/a", "/b c"]);

    let yaml: Vec<String> =
        serde_yaml::from_str(&editor.serialize(OutputFormat::Yaml).unwrap()).unwrap();
    assert_eq!(yaml, ["/a", "/b c"]);

    assert_eq!(
        editor.serialize(OutputFormat::Shell).unwrap(),
        "export PATH='/a:/b c'"
    );
    assert_eq!(
        editor
            .serialize_for(OutputFormat::Shell, ShellType::Fish)
            .unwrap(),
        "set -gx PATH /a '/b c'"
    );
}

#[test]
fn test_write_to_file() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("path.json");

    let editor = editor(&["/a", "/b"]);
    editor
        .write_to(OutputFormat::Json, ShellType::Bash, &dest)
        .unwrap();

    let written = std::fs::read_to_string(&dest).unwrap();
    assert!(written.ends_with('\n'));
    let parsed: Vec<String> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, ["/a", "/b"]);
}

#[test]
fn test_write_to_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("no").join("such").join("file");
    let err = editor(&["/a"])
        .write_to(OutputFormat::Path, ShellType::Bash, &dest)
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// =============================================================================
// Normalization
// =============================================================================

#[cfg(unix)]
#[test]
fn test_normalize_then_dedupe() {
    let mut editor = editor(&["/usr/../bin", "/bin/", "", "/bin"]);
    editor.normalize_entries().unwrap();
    assert_eq!(editor.paths(), ["/bin", "/bin", "/bin"]);

    editor.remove_duplicates();
    assert_eq!(editor.paths(), ["/bin"]);
}

#[cfg(unix)]
#[test]
fn test_normalize_parent_of_root() {
    let mut editor = editor(&["/usr/bin", "/../bin"]);
    editor.normalize_entries().unwrap();
    assert_eq!(editor.paths(), ["/usr/bin", "/bin"]);
}

#[cfg(unix)]
#[test]
fn test_normalize_failure_commits_nothing() {
    let mut editor = editor(&["/a", "~nobody/bin"]);
    assert!(editor.normalize_entries().is_err());
    assert_eq!(editor.history_len(), 1);
}
