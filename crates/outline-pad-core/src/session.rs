/// Single-owner editing session tying a document to its undo history.
///
/// The underlying `UndoManager` has a two-step contract: record the old
/// state, then install the new one. Calling those out of order corrupts the
/// history, so the session fuses them: every mutating method computes the
/// new document, records the old one, and installs the new one in a single
/// call. Hosts drive this type from one thread (one user gesture at a time);
/// there is no internal locking.
use outline_pad_mod_history::UndoManager;

use crate::document::{Document, NodePath, TreeError};
use crate::node::Node;

/// Owns the current document and its undo/redo stacks for one editing
/// session. Both are discarded with the session; nothing is persisted.
pub struct EditorSession<T: Clone> {
    /// The document currently displayed by the host.
    document: Document<T>,
    /// Snapshot history for the session.
    history: UndoManager<Document<T>>,
}

impl<T: Clone> EditorSession<T> {
    /// Starts a session on the given document with empty history.
    pub fn new(document: Document<T>) -> Self {
        Self {
            document,
            history: UndoManager::new(),
        }
    }

    /// The current document, for the host to render.
    pub fn document(&self) -> &Document<T> {
        &self.document
    }

    /// Ends the session, handing the final document back to the host.
    pub fn into_document(self) -> Document<T> {
        self.document
    }

    /// Whether undo is available, for host affordances (button state).
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Moves a node (with its subtree) under `new_parent` at `index`, or
    /// into the root sequence when `new_parent` is `None`, as one undoable
    /// step. On error nothing changes: no snapshot is recorded and the redo
    /// history survives.
    pub fn move_node(
        &mut self,
        node: &NodePath,
        new_parent: Option<&NodePath>,
        index: usize,
    ) -> Result<(), TreeError> {
        let next = self.document.move_node(node, new_parent, index)?;
        self.install_recorded(next);
        Ok(())
    }

    /// Appends a node to the root sequence as one undoable step.
    pub fn add_root_node(&mut self, node: Node<T>) {
        let next = self.document.add_root_node(node);
        self.install_recorded(next);
    }

    /// Appends a node to `parent`'s children as one undoable step.
    pub fn add_child_node(&mut self, parent: &NodePath, node: Node<T>) -> Result<(), TreeError> {
        let next = self.document.add_child_node(parent, node)?;
        self.install_recorded(next);
        Ok(())
    }

    /// Installs a document without recording an undo step.
    ///
    /// For presentation-only changes the host applies outside the undo
    /// history, such as expand/collapse toggles coming back from the tree
    /// widget.
    pub fn replace_document(&mut self, document: Document<T>) {
        self.document = document;
    }

    /// Steps back to the previous document. Returns `false` (and changes
    /// nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.document) {
            Some(snapshot) => {
                self.document = snapshot;
                true
            }
            None => false,
        }
    }

    /// Steps forward to the next document. Returns `false` (and changes
    /// nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.document) {
            Some(snapshot) => {
                self.document = snapshot;
                true
            }
            None => false,
        }
    }

    /// Record first, then swap: the history must see the pre-mutation state.
    fn install_recorded(&mut self, next: Document<T>) {
        self.history.record(&self.document);
        self.document = next;
    }
}
