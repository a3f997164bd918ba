use crate::{Matrix, NodeId};

/// Solver running Algorithm X over a [`Matrix`] it exclusively owns.
///
/// The matrix is mutated in place while searching. After a failed search it
/// is restored exactly, after a successful one it is left in the covered
/// state that produced the solution.
#[derive(Debug)]
pub struct Solver<T> {
    matrix: Matrix<T>,

    // One representative node per selected row, strictly used as a stack
    solution: Vec<NodeId>,
    stack: Vec<Frame>,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    // The column covered on entering this frame
    column: NodeId,
    // The row currently tried, or `column` before the first row
    row: NodeId,
}

impl<T> Solver<T> {
    /// Create a new `Solver` for the given matrix.
    pub fn new(matrix: Matrix<T>) -> Self {
        Solver {
            matrix,
            solution: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Return the matrix being solved.
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    /// Give back the matrix, in whatever state the last search left it.
    pub fn into_matrix(self) -> Matrix<T> {
        self.matrix
    }

    /// Return the payload of `node`, see [`Matrix::data`].
    pub fn data(&self, node: NodeId) -> Option<&T> {
        self.matrix.data(node)
    }

    /// Force the row containing `anchor` into the solution before searching.
    ///
    /// The column of `anchor` is covered first, then the column of every
    /// other node in the row from left to right. This is only meant for setup:
    /// the covers are never undone, and calling it after
    /// [`solve`](Self::solve) or on rows sharing a column corrupts the matrix.
    pub fn cover_row(&mut self, anchor: NodeId) {
        log::trace!("Pre-committing row at [{:?}].", anchor);

        self.solution.push(anchor);

        self.matrix.cover(self.matrix.header(anchor));
        self.cover_columns_right_of(anchor);
    }

    /// Search for an exact cover.
    ///
    /// Returns the solution as one node per selected row: first the rows given
    /// to [`cover_row`](Self::cover_row), then one row per selected column in
    /// the order the columns were chosen. Each returned node is the node of
    /// its row that lies in the column being satisfied. Returns `None` when no
    /// exact cover exists.
    pub fn solve(&mut self) -> Option<Vec<NodeId>> {
        log::debug!(
            "Starting search with [{}] pre-committed rows.",
            self.solution.len()
        );

        if self.search() {
            log::debug!("Found a solution of [{}] rows.", self.solution.len());

            Some(self.solution.clone())
        } else {
            log::debug!("Search exhausted without a solution.");

            None
        }
    }

    /// Depth first search, one stack frame per covered column.
    ///
    /// Visits rows and columns in the same order as the textbook recursion:
    /// cover the chosen column, try each of its rows top to bottom, and on
    /// backtrack undo everything in reverse.
    fn search(&mut self) -> bool {
        if self.is_solved() {
            return true;
        }

        self.enter();

        while let Some(frame) = self.stack.last() {
            let Frame { column, row } = *frame;

            // Retreat from the row tried previously
            if row != column {
                self.solution.pop();
                self.uncover_columns_left_of(row);
            }

            let next_row = self.matrix.down(row);
            if next_row == column {
                log::trace!("Exhausted column [{:?}], backtracking.", column);

                self.matrix.uncover(column);
                self.stack.pop();
                continue;
            }

            log::trace!("Trying row [{:?}] for column [{:?}].", next_row, column);

            if let Some(frame) = self.stack.last_mut() {
                frame.row = next_row;
            }
            self.solution.push(next_row);
            self.cover_columns_right_of(next_row);

            if self.is_solved() {
                // The covered state is the result, only the bookkeeping goes
                self.stack.clear();
                return true;
            }

            self.enter();
        }

        false
    }

    /// Choose the next column, cover it and push a frame for it.
    fn enter(&mut self) {
        let column = self.choose_column();
        log::trace!(
            "Selected column [{:?}] with [{}] rows at depth [{}].",
            column,
            self.matrix.count(column),
            self.stack.len()
        );

        self.matrix.cover(column);
        self.stack.push(Frame {
            column,
            row: column,
        });
    }

    /// Return true if every column has been covered.
    fn is_solved(&self) -> bool {
        let root = self.matrix.root();

        self.matrix.right(root) == root
    }

    /// Select the uncovered column with the fewest rows, preferring the
    /// leftmost one on ties.
    ///
    /// Only called while at least one column is uncovered.
    fn choose_column(&self) -> NodeId {
        // `min_by_key` keeps the first of several equal minimums
        self.matrix
            .headers()
            .min_by_key(|header| self.matrix.count(*header))
            .expect("an unsolved matrix has an uncovered column")
    }

    fn cover_columns_right_of(&mut self, row: NodeId) {
        let mut node = self.matrix.right(row);
        while node != row {
            self.matrix.cover(self.matrix.header(node));

            node = self.matrix.right(node);
        }
    }

    fn uncover_columns_left_of(&mut self, row: NodeId) {
        let mut node = self.matrix.left(row);
        while node != row {
            self.matrix.uncover(self.matrix.header(node));

            node = self.matrix.left(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(columns: usize, rows: &[&[usize]]) -> (Matrix<usize>, Vec<NodeId>, Vec<Vec<NodeId>>) {
        let mut matrix = Matrix::new();
        let headers: Vec<_> = (0..columns).map(|_| matrix.new_header()).collect();

        let rows = rows
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let nodes: Vec<_> = row
                    .iter()
                    .map(|column| {
                        let node = matrix.new_node(headers[*column]);
                        matrix.set_data(node, row_idx);
                        node
                    })
                    .collect();
                matrix.make_row(nodes[0], nodes[1..].iter().copied());
                nodes
            })
            .collect();

        (matrix, headers, rows)
    }

    #[test]
    fn empty_matrix_is_trivially_solved() {
        let mut solver = Solver::new(Matrix::<()>::new());

        assert_eq!(solver.solve(), Some(Vec::new()));
    }

    #[test]
    fn basic_exact_cover() {
        // Rows {1, 3}, {1, 2, 3}, {2, 4}
        let (matrix, _, rows) = build(4, &[&[0, 2], &[0, 1, 2], &[1, 3]]);
        let mut solver = Solver::new(matrix);

        let solution = solver.solve().unwrap();

        // Column 4 has the fewest rows and is chosen first
        assert_eq!(solution, vec![rows[2][1], rows[0][0]]);
        assert_eq!(solver.data(solution[0]), Some(&2));
        assert_eq!(solver.data(solution[1]), Some(&0));
    }

    #[test]
    fn solve_after_success_repeats_solution() {
        let (matrix, _, _) = build(4, &[&[0, 2], &[0, 1, 2], &[1, 3]]);
        let mut solver = Solver::new(matrix);

        let first = solver.solve();
        assert!(first.is_some());
        assert_eq!(solver.solve(), first);
    }

    #[test]
    fn tie_break_prefers_leftmost_column() {
        // Every column has exactly one row, so the search walks left to right
        let (matrix, _, rows) = build(3, &[&[2], &[1], &[0]]);
        let mut solver = Solver::new(matrix);

        let solution = solver.solve().unwrap();

        assert_eq!(solution, vec![rows[2][0], rows[1][0], rows[0][0]]);
    }

    #[test]
    fn empty_column_fails_and_restores() {
        let (matrix, headers, _) = build(3, &[&[0, 1], &[1]]);
        let before = matrix.clone();
        let mut solver = Solver::new(matrix);

        assert_eq!(solver.solve(), None);
        assert_eq!(solver.matrix(), &before);
        assert_eq!(solver.matrix().count(headers[2]), 0);
    }

    #[test]
    fn backtracks_out_of_a_dead_end() {
        // Taking row {1, 2} first leaves nothing for column 3
        let (matrix, _, rows) = build(3, &[&[0, 1], &[0, 2], &[1], &[2, 1]]);
        let before = matrix.clone();
        let mut solver = Solver::new(matrix);

        let solution = solver.solve().unwrap();

        assert_eq!(solution, vec![rows[1][0], rows[2][0]]);
        assert_eq!(solver.data(solution[0]), Some(&1));
        assert_eq!(solver.data(solution[1]), Some(&2));
        assert_ne!(solver.matrix(), &before);
    }

    #[test]
    fn cover_row_commits_up_front() {
        let (matrix, _, rows) = build(4, &[&[0, 2], &[0, 1, 2], &[1, 3], &[3]]);
        let mut solver = Solver::new(matrix);

        solver.cover_row(rows[0][0]);
        let solution = solver.solve().unwrap();

        assert_eq!(solution[0], rows[0][0]);
        assert_eq!(solution.len(), 2);
        assert_eq!(solver.data(solution[1]), Some(&2));
    }

    #[test]
    fn cover_row_can_make_the_problem_infeasible() {
        let (matrix, _, rows) = build(3, &[&[0, 1], &[0, 2], &[1]]);
        let mut solver = Solver::new(matrix);

        solver.cover_row(rows[0][0]);

        assert_eq!(solver.solve(), None);
    }
}
