/// Core undo/redo manager over whole-state snapshots.
///
/// The manager stores full copies of the edited state rather than diffs or
/// inverse operations. Structural tree edits (move/reparent) are not trivially
/// invertible without capturing the prior parent and index, so whole snapshots
/// trade memory for correctness at interactive edit rates.
use crate::Snapshot;

/// Manages linear undo/redo history for a single editing session.
///
/// `S` is the snapshotted state type; the manager never looks inside it.
/// Callers must hand `record` the *pre-mutation* state and install the
/// mutated state themselves afterwards (or use a session controller that
/// does both atomically).
///
/// Not internally synchronized. One editing session owns one manager and
/// calls it from one thread; a multi-threaded host must wrap it in external
/// mutual exclusion.
pub struct UndoManager<S: Clone> {
    /// Undo stack, most-recently-recorded snapshot on top.
    undo_stack: Vec<Snapshot<S>>,
    /// Redo stack, most-recently-undone snapshot on top.
    redo_stack: Vec<Snapshot<S>>,
}

impl<S: Clone> std::fmt::Debug for UndoManager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoManager")
            .field("undo_len", &self.undo_stack.len())
            .field("redo_len", &self.redo_stack.len())
            .finish()
    }
}

impl<S: Clone> Default for UndoManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> UndoManager<S> {
    /// Creates a new manager with empty undo and redo stacks.
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Records the pre-mutation state as a new undo step.
    ///
    /// Takes a deep snapshot of `current` (the state *before* the mutation
    /// is applied), pushes it onto the undo stack, and invalidates the redo
    /// stack: a fresh edit discards the entire redo branch.
    pub fn record(&mut self, current: &S) {
        self.undo_stack.push(current.clone());
        if !self.redo_stack.is_empty() {
            tracing::debug!(
                invalidated = self.redo_stack.len(),
                "new edit recorded, redo history discarded"
            );
            self.redo_stack.clear();
        }
    }

    /// Undoes the most recent recorded step.
    ///
    /// Pushes a snapshot of `current` onto the redo stack and returns the
    /// state the caller should now install. Returns `None` when there is
    /// nothing to undo; neither stack is touched in that case.
    pub fn undo(&mut self, current: &S) -> Option<Snapshot<S>> {
        if self.undo_stack.is_empty() {
            tracing::trace!("undo requested with empty history");
            return None;
        }
        self.redo_stack.push(current.clone());
        self.undo_stack.pop()
    }

    /// Redoes the most recently undone step.
    ///
    /// Symmetric to [`undo`](Self::undo) with the two stacks swapped.
    /// Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: &S) -> Option<Snapshot<S>> {
        if self.redo_stack.is_empty() {
            tracing::trace!("redo requested with empty redo stack");
            return None;
        }
        self.undo_stack.push(current.clone());
        self.redo_stack.pop()
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drops all history, returning the manager to its initial state.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
