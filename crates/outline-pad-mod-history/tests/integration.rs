// Integration tests for the history system.
//
// These tests exercise full editing workflows against the UndoManager using
// a nested state type, simulating the tree documents the editor snapshots.

use outline_pad_mod_history::UndoManager;

/// Minimal stand-in for a tree document: labeled items with nested children.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Item {
    label: String,
    children: Vec<Item>,
}

fn item(label: &str) -> Item {
    Item {
        label: label.to_string(),
        children: Vec::new(),
    }
}

fn parent(label: &str, children: Vec<Item>) -> Item {
    Item {
        label: label.to_string(),
        children,
    }
}

// ── Inverse law ────────────────────────────────────────────────────────

#[test]
fn test_undo_walks_history_in_reverse_and_redo_replays_forward() {
    let mut mgr = UndoManager::new();

    // Build d0..d3 by appending one item per "edit", recording the
    // pre-mutation state each time.
    let states: Vec<Vec<Item>> = (0..4)
        .map(|n| (0..n).map(|i| item(&format!("node{i}"))).collect())
        .collect();
    for i in 0..3 {
        mgr.record(&states[i]);
    }

    // Undo n times yields d2, d1, d0 in that order.
    let mut current = states[3].clone();
    for expected in states[..3].iter().rev() {
        let snapshot = mgr.undo(&current).expect("undo");
        assert_eq!(&snapshot, expected);
        current = snapshot;
    }
    assert!(!mgr.can_undo());

    // Redo n times replays d1, d2, d3.
    for expected in &states[1..] {
        let snapshot = mgr.redo(&current).expect("redo");
        assert_eq!(&snapshot, expected);
        current = snapshot;
    }
    assert!(!mgr.can_redo());
    assert_eq!(current, states[3]);
}

// ── Redo invalidation ──────────────────────────────────────────────────

#[test]
fn test_record_invalidates_redo_branch() {
    let mut mgr = UndoManager::new();
    let d0 = vec![item("a")];
    let d1 = vec![item("a"), item("b")];

    mgr.record(&d0);
    let back = mgr.undo(&d1).expect("undo");
    assert_eq!(back, d0);
    assert!(mgr.can_redo());

    // A fresh edit from d0 discards the redo branch leading to d1.
    let d1_alt = vec![item("a"), item("c")];
    mgr.record(&d0);
    assert!(!mgr.can_redo());
    assert_eq!(mgr.undo(&d1_alt), Some(d0));
}

// ── Snapshot independence ──────────────────────────────────────────────

#[test]
fn test_nested_snapshot_is_deep_copied() {
    let mut mgr = UndoManager::new();
    let mut live = vec![parent("root", vec![item("child")])];
    mgr.record(&live);

    // Mutate the live state deep inside the tree after the snapshot.
    live[0].children[0].label = String::from("renamed");
    live[0].children.push(item("extra"));

    let snapshot = mgr.undo(&live).expect("undo");
    assert_eq!(snapshot, vec![parent("root", vec![item("child")])]);
}

#[test]
fn test_stored_snapshots_do_not_alias_each_other() {
    let mut mgr = UndoManager::new();
    let d0 = vec![parent("root", vec![item("x")])];
    mgr.record(&d0);
    mgr.record(&d0);

    // Popping one copy and mutating it must leave the other intact.
    let mut first = mgr.undo(&d0).expect("undo");
    first[0].children.clear();

    let second = mgr.undo(&first).expect("undo");
    assert_eq!(second, d0);
}

// ── Session boundaries ─────────────────────────────────────────────────

#[test]
fn test_fresh_manager_has_no_history() {
    let mut mgr: UndoManager<Vec<Item>> = UndoManager::new();
    assert!(!mgr.can_undo());
    assert!(!mgr.can_redo());
    assert!(mgr.undo(&Vec::new()).is_none());
    assert!(mgr.redo(&Vec::new()).is_none());
}

#[test]
fn test_long_session_depth_is_unbounded() {
    let mut mgr = UndoManager::new();
    for i in 0..1_000 {
        mgr.record(&vec![item(&format!("node{i}"))]);
    }
    assert_eq!(mgr.undo_depth(), 1_000);

    let mut current = vec![item("final")];
    let mut undone = 0;
    while let Some(snapshot) = mgr.undo(&current) {
        current = snapshot;
        undone += 1;
    }
    assert_eq!(undone, 1_000);
    assert_eq!(current, vec![item("node0")]);
    assert_eq!(mgr.redo_depth(), 1_000);
}
