/// Tree document model: path addressing and pure mutation operations.
///
/// A `Document` is the ordered sequence of root nodes being edited and is
/// the unit of snapshotting. Every mutation returns a new `Document` and
/// leaves the receiver untouched, so snapshots taken earlier stay valid no
/// matter what the caller does next.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::Node;

/// Addresses one node by its index path from the root sequence.
///
/// `NodePath::new([1, 0])` is the first child of the second root. Paths are
/// positional: a path is only meaningful against the document it was derived
/// from, and only until the next mutation. That stability window is all the
/// mutation operations need, and the prefix relation between two paths gives
/// the move-into-own-subtree check directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Creates a path from root-to-node child indices.
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// The child indices, outermost first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of path segments.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether `other` addresses a node strictly inside this path's subtree.
    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        other.0.len() > self.0.len() && other.0[..self.0.len()] == self.0[..]
    }

    /// Extends the path by one child index.
    pub fn child(&self, index: usize) -> NodePath {
        let mut indices = self.0.clone();
        indices.push(index);
        NodePath(indices)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl FromIterator<usize> for NodePath {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// Errors from structural tree mutations.
///
/// Both variants are detected before anything is mutated; a failed operation
/// leaves the document exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The destination parent of a move is the moved node itself or lies
    /// inside its subtree, which would create a cycle.
    #[error("cannot move node {node}: destination {destination} is inside the moved subtree")]
    InvalidMove {
        /// Path of the node being moved.
        node: NodePath,
        /// Path of the rejected destination parent.
        destination: NodePath,
    },
    /// A supplied path does not resolve to a node in this document.
    #[error("no node at path {0}")]
    NodeNotFound(NodePath),
}

/// The full tree state being edited: an ordered sequence of root nodes.
///
/// `Document` owns its nodes outright, so `clone()` produces a fully
/// independent deep copy — exactly the snapshot the history manager stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document<T> {
    roots: Vec<Node<T>>,
}

impl<T> Default for Document<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Document<T> {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Creates a document from an existing root sequence.
    pub fn from_roots(roots: Vec<Node<T>>) -> Self {
        Self { roots }
    }

    /// The ordered root nodes.
    pub fn roots(&self) -> &[Node<T>] {
        &self.roots
    }

    /// Number of root nodes.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Whether the document has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in the document, at any depth.
    pub fn total_nodes(&self) -> usize {
        self.roots.iter().map(Node::subtree_size).sum()
    }

    /// Resolves a path to a node, or `None` if it does not resolve.
    ///
    /// The empty path addresses the root *sequence*, not a node, and
    /// resolves to `None`.
    pub fn node(&self, path: &NodePath) -> Option<&Node<T>> {
        let (&first, rest) = path.0.split_first()?;
        let mut node = self.roots.get(first)?;
        for &index in rest {
            node = node.children.as_ref()?.get(index)?;
        }
        Some(node)
    }

    fn node_mut(&mut self, path: &[usize]) -> Option<&mut Node<T>> {
        let (&first, rest) = path.split_first()?;
        let mut node = self.roots.get_mut(first)?;
        for &index in rest {
            node = node.children.as_mut()?.get_mut(index)?;
        }
        Some(node)
    }

    /// Removes and returns the node at `path` together with its subtree.
    fn detach(&mut self, path: &[usize]) -> Option<Node<T>> {
        let (&last, prefix) = path.split_last()?;
        let siblings = if prefix.is_empty() {
            &mut self.roots
        } else {
            self.node_mut(prefix)?.children.as_mut()?
        };
        if last < siblings.len() {
            Some(siblings.remove(last))
        } else {
            None
        }
    }
}

impl<T: Clone> Document<T> {
    /// Returns a new document with `node` appended to the root sequence.
    ///
    /// Never fails; the node's title and payload are entirely the caller's.
    pub fn add_root_node(&self, node: Node<T>) -> Document<T> {
        let mut next = self.clone();
        next.roots.push(node);
        next
    }

    /// Returns a new document with `node` appended to `parent`'s children.
    ///
    /// A leaf parent gains a children sequence. Fails with
    /// [`TreeError::NodeNotFound`] when `parent` does not resolve.
    pub fn add_child_node(&self, parent: &NodePath, node: Node<T>) -> Result<Document<T>, TreeError> {
        let mut next = self.clone();
        let slot = next
            .node_mut(parent.indices())
            .ok_or_else(|| TreeError::NodeNotFound(parent.clone()))?;
        slot.children.get_or_insert_with(Vec::new).push(node);
        Ok(next)
    }

    /// Returns a new document with the node at `node` (and its whole
    /// subtree) moved to position `index` under `new_parent`, or into the
    /// root sequence when `new_parent` is `None`.
    ///
    /// `index` counts positions among the destination's children *after* the
    /// node has been detached; an index past the end appends. Both paths are
    /// interpreted against the pre-move document, so a destination that sits
    /// after the detached node among its siblings still lands where the
    /// caller pointed.
    ///
    /// Fails with [`TreeError::InvalidMove`] when the destination is the
    /// moved node or one of its descendants, and [`TreeError::NodeNotFound`]
    /// when either path does not resolve. On failure the document is
    /// unchanged.
    pub fn move_node(
        &self,
        node: &NodePath,
        new_parent: Option<&NodePath>,
        index: usize,
    ) -> Result<Document<T>, TreeError> {
        if self.node(node).is_none() {
            return Err(TreeError::NodeNotFound(node.clone()));
        }
        if let Some(parent) = new_parent {
            if parent == node || node.is_ancestor_of(parent) {
                return Err(TreeError::InvalidMove {
                    node: node.clone(),
                    destination: parent.clone(),
                });
            }
            if self.node(parent).is_none() {
                return Err(TreeError::NodeNotFound(parent.clone()));
            }
        }

        let mut next = self.clone();
        let moved = next
            .detach(node.indices())
            .ok_or_else(|| TreeError::NodeNotFound(node.clone()))?;

        match new_parent {
            None => {
                let index = index.min(next.roots.len());
                next.roots.insert(index, moved);
            }
            Some(parent) => {
                let dest = rebase_after_detach(parent.indices(), node.indices());
                // Resolves: validated above, and the destination is outside
                // the detached subtree.
                let slot = next
                    .node_mut(&dest)
                    .ok_or_else(|| TreeError::NodeNotFound(parent.clone()))?;
                let children = slot.children.get_or_insert_with(Vec::new);
                let index = index.min(children.len());
                children.insert(index, moved);
            }
        }
        Ok(next)
    }
}

/// Re-bases a destination path after the moved node was detached.
///
/// Detaching shifts the later siblings of the removed node down by one,
/// which affects any destination path passing through one of them.
fn rebase_after_detach(dest: &[usize], removed: &[usize]) -> Vec<usize> {
    let mut out = dest.to_vec();
    let Some((&removed_index, removed_parent)) = removed.split_last() else {
        return out;
    };
    let depth = removed_parent.len();
    if dest.len() > depth && dest[..depth] == removed[..depth] && dest[depth] > removed_index {
        out[depth] -= 1;
    }
    out
}
