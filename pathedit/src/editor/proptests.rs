//! Property-based tests for the path editor.

use super::*;
use crate::path::MockDirectoryCheck;
use proptest::prelude::*;
use std::collections::HashSet;

// Entries drawn from a small pool so duplicates and system paths are common.
fn entry_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(SYSTEM_PATHS.to_vec()).prop_map(str::to_string),
        2 => "/usr/[a-z]{1,3}".prop_map(|s| s),
        3 => "/[a-z]{1,3}".prop_map(|s| s),
        1 => Just(String::new()),
    ]
}

fn list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(entry_strategy(), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn remove_duplicates_leaves_unique_first_occurrences(list in list_strategy()) {
        let mut editor = PathEditor::new(list.clone(), ':');
        editor.remove_duplicates();

        let unique: HashSet<&String> = editor.paths().iter().collect();
        prop_assert_eq!(unique.len(), editor.len());

        // Result is the input filtered to first occurrences.
        let mut seen = HashSet::new();
        let expected: Vec<String> = list.into_iter().filter(|e| seen.insert(e.clone())).collect();
        prop_assert_eq!(editor.paths(), expected.as_slice());
    }

    #[test]
    fn remove_duplicates_idempotent(list in list_strategy()) {
        let mut editor = PathEditor::new(list, ':');
        editor.remove_duplicates();
        let once = editor.to_vec();
        editor.remove_duplicates();
        prop_assert_eq!(editor.paths(), once.as_slice());
    }

    #[test]
    fn ensure_sys_path_order_idempotent(list in list_strategy()) {
        let mut editor = PathEditor::new(list, ':');
        editor.ensure_sys_path_order();
        let once = editor.to_vec();
        editor.ensure_sys_path_order();
        prop_assert_eq!(editor.paths(), once.as_slice());
    }

    #[test]
    fn system_paths_form_ordered_suffix(list in list_strategy()) {
        let present: HashSet<&str> = list
            .iter()
            .map(String::as_str)
            .filter(|e| SYSTEM_PATHS.contains(e))
            .collect();
        let expected_suffix: Vec<&str> = SYSTEM_PATHS
            .iter()
            .copied()
            .filter(|e| present.contains(e))
            .collect();

        let mut editor = PathEditor::new(list, ':');
        editor.ensure_sys_path_order();

        let paths = editor.paths();
        prop_assert!(paths.len() >= expected_suffix.len());
        let suffix = &paths[paths.len() - expected_suffix.len()..];
        prop_assert_eq!(suffix, expected_suffix.as_slice());
        let before_suffix = &paths[..paths.len() - expected_suffix.len()];
        prop_assert!(before_suffix.iter().all(|e| !SYSTEM_PATHS.contains(&e.as_str())));
    }

    #[test]
    fn revert_one_step_restores_previous(list in list_strategy(), op in 0usize..5, extra in "/[a-z]{1,3}") {
        let mut editor = PathEditor::new(list.clone(), ':');
        let check = MockDirectoryCheck::new(list.iter().take(3).cloned());
        match op {
            0 => editor.remove_duplicates(),
            1 => editor.remove_invalid(&check),
            2 => editor.ensure_sys_path_order(),
            3 => editor.add_path(&extra, AddMode::Prepend),
            _ => editor.remove_path(&extra),
        }
        editor.revert_change(1).unwrap();
        prop_assert_eq!(editor.paths(), list.as_slice());
    }

    #[test]
    fn revert_beyond_history_fails_without_change(list in list_strategy(), ops in 0usize..4, steps in 0usize..8) {
        let mut editor = PathEditor::new(list, ':');
        for _ in 0..ops {
            editor.remove_duplicates();
        }
        let before = editor.to_vec();
        let depth = editor.history_len();

        let result = editor.revert_change(steps);
        if steps < depth {
            prop_assert!(result.is_ok());
            prop_assert_eq!(editor.history_len(), depth - steps);
        } else {
            prop_assert!(matches!(result, Err(Error::OutOfRange { .. })), "expected OutOfRange");
            prop_assert_eq!(editor.paths(), before.as_slice());
            prop_assert_eq!(editor.history_len(), depth);
        }
    }
}
