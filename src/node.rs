//! Link nodes of the two dimensional circular doubly linked list.
//!
//! Every node lives in the arena owned by a [`Matrix`] and is addressed by a
//! [`NodeId`]. The four neighbor fields are indices into the same arena, so
//! removing and reinserting a node only rewrites two indices in its neighbors.

use crate::Matrix;
use std::fmt;

/// Stable handle to a node inside a [`Matrix`].
///
/// Handles are only meaningful for the matrix that produced them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Return the position of this node in the matrix arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) up: NodeId,
    pub(crate) down: NodeId,

    // Non-owning, a header points at itself
    pub(crate) header: NodeId,
    // Live element count, only maintained for headers
    pub(crate) count: usize,
    pub(crate) data: Option<T>,
}

impl<T> Node<T> {
    /// Create a node whose four neighbors are the node itself.
    pub(crate) fn new_self_ref(id: NodeId, header: NodeId) -> Self {
        Node {
            left: id,
            right: id,
            up: id,
            down: id,
            header,
            count: 0,
            data: None,
        }
    }
}

macro_rules! insert_direction {
    ($(#[$doc:meta])* $name:ident, $direction:ident, $opposite:ident) => {
        $(#[$doc])*
        pub fn $name(&mut self, node: NodeId, other: NodeId) {
            let before = self.nodes[other.0].$direction;

            self.nodes[before.0].$opposite = node;
            self.nodes[node.0].$direction = before;

            self.nodes[other.0].$direction = node;
            self.nodes[node.0].$opposite = other;
        }
    };
}

// NOTE: Removal never writes the removed node's own fields. Reinsertion reads
// those stale neighbors back, which is only correct when reinserts happen in
// exact reverse order of the matching removes.
macro_rules! remove_direction {
    ($(#[$doc:meta])* $name:ident, $prev:ident, $next:ident) => {
        $(#[$doc])*
        pub fn $name(&mut self, node: NodeId) {
            let Node { $prev: prev, $next: next, .. } = self.nodes[node.0];

            self.nodes[prev.0].$next = next;
            self.nodes[next.0].$prev = prev;
        }
    };
}

macro_rules! reinsert_direction {
    ($(#[$doc:meta])* $name:ident, $prev:ident, $next:ident) => {
        $(#[$doc])*
        pub fn $name(&mut self, node: NodeId) {
            let Node { $prev: prev, $next: next, .. } = self.nodes[node.0];

            self.nodes[prev.0].$next = node;
            self.nodes[next.0].$prev = node;
        }
    };
}

impl<T> Matrix<T> {
    insert_direction!(
        /// Splice `node` into the horizontal ring immediately left of `other`.
        ///
        /// Afterwards `other.left == node` and `node.right == other`. When
        /// `other` anchors a ring this appends `node` at the end of it.
        insert_left_of,
        left,
        right
    );

    insert_direction!(
        /// Splice `node` into the vertical ring immediately above `other`.
        ///
        /// Afterwards `other.up == node` and `node.down == other`.
        insert_up_of,
        up,
        down
    );

    remove_direction!(
        /// Unlink `node` from its horizontal ring, keeping its own `left` and
        /// `right` so [`reinsert_horizontal`](Self::reinsert_horizontal) can
        /// undo the removal.
        remove_horizontal,
        left,
        right
    );

    remove_direction!(
        /// Unlink `node` from its vertical ring, keeping its own `up` and
        /// `down`.
        remove_vertical,
        up,
        down
    );

    reinsert_direction!(
        /// Link `node` back between its remembered `left` and `right`
        /// neighbors.
        ///
        /// The caller must undo removals in exact reverse order. Nothing is
        /// checked, a violation silently corrupts the ring.
        reinsert_horizontal,
        left,
        right
    );

    reinsert_direction!(
        /// Link `node` back between its remembered `up` and `down` neighbors.
        ///
        /// Same ordering contract as
        /// [`reinsert_horizontal`](Self::reinsert_horizontal).
        reinsert_vertical,
        up,
        down
    );

    /// Return the left neighbor of `node`.
    pub fn left(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].left
    }

    /// Return the right neighbor of `node`.
    pub fn right(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].right
    }

    /// Return the up neighbor of `node`.
    pub fn up(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].up
    }

    /// Return the down neighbor of `node`.
    pub fn down(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].down
    }

    /// Return the header whose column contains `node`.
    ///
    /// For a header (and the root) this is the node itself.
    pub fn header(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].header
    }

    /// Return true if `node` is a column header or the root.
    pub fn is_header(&self, node: NodeId) -> bool {
        self.nodes[node.0].header == node
    }

    /// Attach a payload to `node`, replacing any previous one.
    pub fn set_data(&mut self, node: NodeId, data: T) {
        self.nodes[node.0].data = Some(data);
    }

    /// Return the payload attached to `node`, if any.
    pub fn data(&self, node: NodeId) -> Option<&T> {
        self.nodes[node.0].data.as_ref()
    }
}

pub mod iter {
    //! Iterators walking one ring of the matrix.
    //!
    //! A walk starts at the neighbor of `original` and stops once it would
    //! return to `original`, so the start node itself is never yielded.

    use super::{Node, NodeId};
    use crate::Matrix;

    /// Iterator over a ring in a fixed direction.
    pub struct Ring<'m, T> {
        matrix: &'m Matrix<T>,
        original: NodeId,
        current: NodeId,
        direction: fn(&Node<T>) -> NodeId,
    }

    impl<'m, T> Ring<'m, T> {
        fn new(matrix: &'m Matrix<T>, original: NodeId, direction: fn(&Node<T>) -> NodeId) -> Self {
            Ring {
                matrix,
                original,
                current: original,
                direction,
            }
        }
    }

    impl<T> Iterator for Ring<'_, T> {
        type Item = NodeId;

        fn next(&mut self) -> Option<Self::Item> {
            let next = (self.direction)(&self.matrix.nodes[self.current.0]);

            if next == self.original {
                None
            } else {
                self.current = next;

                Some(next)
            }
        }
    }

    /// Walk the horizontal ring to the left of `original`.
    pub fn left<T>(matrix: &Matrix<T>, original: NodeId) -> Ring<'_, T> {
        Ring::new(matrix, original, |node| node.left)
    }

    /// Walk the horizontal ring to the right of `original`.
    pub fn right<T>(matrix: &Matrix<T>, original: NodeId) -> Ring<'_, T> {
        Ring::new(matrix, original, |node| node.right)
    }

    /// Walk the vertical ring upwards from `original`.
    pub fn up<T>(matrix: &Matrix<T>, original: NodeId) -> Ring<'_, T> {
        Ring::new(matrix, original, |node| node.up)
    }

    /// Walk the vertical ring downwards from `original`.
    pub fn down<T>(matrix: &Matrix<T>, original: NodeId) -> Ring<'_, T> {
        Ring::new(matrix, original, |node| node.down)
    }
}
