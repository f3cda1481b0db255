/// Undo/redo history management over whole-state snapshots.
///
/// Provides an `UndoManager` that keeps two in-memory stacks of deep copies
/// of the edited state: one for undo, one for redo. Recording a new edit
/// invalidates the redo stack. History lives and dies with the editing
/// session; nothing is persisted.
pub mod manager;

pub use manager::UndoManager;

/// A fully independent deep copy of the edited state at one point in time.
///
/// Snapshots are produced by cloning, and the state types used with this
/// crate own their contents outright, so a snapshot shares no mutable
/// structure with the live state or with any other snapshot.
pub type Snapshot<S> = S;
