/// Tree document model for outline-pad.
///
/// A `Document<T>` is an ordered forest of `Node<T>` values with an opaque
/// payload type. Mutation operations (`move_node`, `add_root_node`,
/// `add_child_node`) are pure: each returns a new document and leaves its
/// input untouched, which is what makes whole-document snapshots safe to
/// store in the undo history. `EditorSession` wires a document to an
/// `UndoManager` so that every edit records its undo snapshot atomically.
pub mod document;
pub mod node;
pub mod session;

pub use document::{Document, NodePath, TreeError};
pub use node::Node;
pub use session::EditorSession;
