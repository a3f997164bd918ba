//! Column headers, their live counts and the cover/uncover pair.

use crate::{Matrix, NodeId};

impl<T> Matrix<T> {
    /// Create a node in the column of `header` and append it to the bottom of
    /// that column.
    ///
    /// Repeated calls produce rows in creation order when walking `down` from
    /// the header. The new node is alone in its horizontal ring until it is
    /// linked into a row with [`make_row`](Self::make_row).
    pub fn new_node(&mut self, header: NodeId) -> NodeId {
        debug_assert!(self.is_header(header), "[{:?}] is not a header", header);

        let node = self.alloc(header);
        self.insert_up_of(node, header);
        self.inc_count(header);

        node
    }

    /// Return the number of nodes currently linked into the column of
    /// `header`.
    pub fn count(&self, header: NodeId) -> usize {
        self.nodes[header.0].count
    }

    /// Increase the live count of `header`.
    ///
    /// Reinserting a node vertically does not touch the count, callers pair
    /// the two themselves.
    pub fn inc_count(&mut self, header: NodeId) {
        self.nodes[header.0].count += 1;
    }

    /// Decrease the live count of `header`.
    pub fn dec_count(&mut self, header: NodeId) {
        debug_assert!(
            self.nodes[header.0].count > 0,
            "Count underflow for header [{:?}]",
            header
        );

        self.nodes[header.0].count -= 1;
    }

    /// Cover the column of `header`.
    ///
    /// Removes the header from the header ring, then walks its rows top to
    /// bottom and unlinks every other node of each row (left to right) from
    /// its own column, decrementing that column's count.
    pub fn cover(&mut self, header: NodeId) {
        debug_assert!(self.is_header(header), "[{:?}] is not a header", header);
        debug_assert_ne!(header, self.root(), "The root cannot be covered");

        self.remove_horizontal(header);

        let mut row = self.down(header);
        while row != header {
            let mut node = self.right(row);
            while node != row {
                self.remove_vertical(node);
                self.dec_count(self.header(node));

                node = self.right(node);
            }

            row = self.down(row);
        }
    }

    /// Uncover the column of `header`, exactly reversing [`cover`](Self::cover).
    ///
    /// Rows are walked bottom to top and nodes right to left so that every
    /// reinsert happens in reverse order of its removal.
    pub fn uncover(&mut self, header: NodeId) {
        debug_assert!(self.is_header(header), "[{:?}] is not a header", header);

        let mut row = self.up(header);
        while row != header {
            let mut node = self.left(row);
            while node != row {
                self.reinsert_vertical(node);
                self.inc_count(self.header(node));

                node = self.left(node);
            }

            row = self.up(row);
        }

        self.reinsert_horizontal(header);
    }
}
