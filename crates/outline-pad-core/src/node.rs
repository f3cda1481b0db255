/// Core node type for tree documents.
use serde::{Deserialize, Serialize};

/// A single node in a tree document.
///
/// The payload type `T` is opaque to the editing core: it is stored, cloned
/// into snapshots, and handed back to the host, but never inspected or
/// mutated. Hosts that save documents get serde support for free when `T`
/// is serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Node<T> {
    /// Display label. The core never interprets it.
    pub title: String,
    /// Application payload attached to the node.
    pub value: T,
    /// Whether the host's tree view shows this node expanded.
    /// Round-tripped as-is; the core never computes it.
    #[serde(default)]
    pub expanded: bool,
    /// Ordered child nodes. `None` marks a leaf. Hosts may render a leaf
    /// differently from a node with an empty child list, so the two are
    /// kept distinct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a leaf node with the given title and payload.
    pub fn new(title: impl Into<String>, value: T) -> Self {
        Self {
            title: title.into(),
            value,
            expanded: false,
            children: None,
        }
    }

    /// Creates a node with the given children, shown expanded.
    pub fn with_children(title: impl Into<String>, value: T, children: Vec<Node<T>>) -> Self {
        Self {
            title: title.into(),
            value,
            expanded: true,
            children: Some(children),
        }
    }

    /// Whether this node has no children sequence at all.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of nodes in this subtree, including the node itself.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(Node::subtree_size)
            .sum::<usize>()
    }
}
