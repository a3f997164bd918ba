//! The sparse 0/1 matrix, stored as an arena of dancing link nodes.

use crate::node::{iter, Node, NodeId};

/// Sparse matrix modelling an exact cover problem.
///
/// The matrix owns every node. The root header anchors the ring of column
/// headers, each header anchors the vertical ring of its column, and rows are
/// horizontal rings of nodes that each belong to exactly one column.
///
/// `T` is the payload type attached to nodes by the caller. It is carried
/// through the search untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    pub(crate) nodes: Vec<Node<T>>,
}

const ROOT: NodeId = NodeId(0);

impl<T> Matrix<T> {
    /// Create an empty matrix holding only the root header.
    pub fn new() -> Self {
        Matrix {
            nodes: vec![Node::new_self_ref(ROOT, ROOT)],
        }
    }

    /// Return the root header.
    ///
    /// All columns are covered exactly when the root is its own right
    /// neighbor.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Create a column header and append it to the end of the header ring.
    pub fn new_header(&mut self) -> NodeId {
        let header = NodeId(self.nodes.len());
        self.nodes.push(Node::new_self_ref(header, header));
        self.insert_left_of(header, ROOT);

        header
    }

    /// Link `anchor` and `nodes` into one row.
    ///
    /// Walking right from `anchor` afterwards visits `nodes` in the given
    /// order and then wraps back to `anchor`. Each node should already belong
    /// to its column, see [`new_node`](Self::new_node).
    pub fn make_row(&mut self, anchor: NodeId, nodes: impl IntoIterator<Item = NodeId>) {
        for node in nodes {
            self.insert_left_of(node, anchor);
        }
    }

    /// Return the headers currently linked into the header ring, left to
    /// right.
    pub fn headers(&self) -> iter::Ring<'_, T> {
        iter::right(self, ROOT)
    }

    /// Return `node` followed by the rest of its row, left to right.
    pub fn row(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::once(node).chain(iter::right(self, node))
    }

    /// Return the total number of nodes in the arena, root and headers
    /// included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return true if the matrix holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub(crate) fn alloc(&mut self, header: NodeId) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(Node::new_self_ref(node, header));

        node
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}
