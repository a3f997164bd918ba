//! A [Sudoku puzzle](https://en.wikipedia.org/wiki/Sudoku) is a
//! `n^2` × `n^2` array with sub-arrays of size `n` × `n`. Each row, column, and
//! sub-array contains the values `1` through `n^2` with no repeats.
//!
//! The puzzle is modelled as an exact cover matrix with one column per
//! [`Condition`] and one row per [`Placement`].

use crate::{Matrix, NodeId, Solver};
use std::collections::HashSet;

/// The supported digit ranges. Each is a perfect square so the boxes are
/// square as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SudokuSize {
    /// 4 × 4 grid with 2 × 2 boxes.
    Four = 4,
    /// 9 × 9 grid with 3 × 3 boxes.
    Nine = 9,
    /// 16 × 16 grid with 4 × 4 boxes.
    Sixteen = 16,
}

impl SudokuSize {
    /// Return the size matching a digit range, if it is supported.
    pub fn from_digits(digits: usize) -> Option<Self> {
        match digits {
            4 => Some(SudokuSize::Four),
            9 => Some(SudokuSize::Nine),
            16 => Some(SudokuSize::Sixteen),
            _ => None,
        }
    }

    /// Return the number of digits, which is also the side length of the
    /// grid.
    pub fn digits(self) -> usize {
        self as usize
    }

    /// Return the side length of a box.
    pub fn box_side(self) -> usize {
        match self {
            SudokuSize::Four => 2,
            SudokuSize::Nine => 3,
            SudokuSize::Sixteen => 4,
        }
    }
}

/// A number placed in a cell.
///
/// All values are 1-based and range from 1 to `size.digits()`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    /// The row of the cell.
    pub row: usize,
    /// The column of the cell.
    pub column: usize,
    /// The number inside the cell.
    pub number: usize,
}

impl Placement {
    /// Return the index of the box containing this placement.
    pub fn square(&self, size: SudokuSize) -> usize {
        let side = size.box_side();

        (self.column - 1) / side + ((self.row - 1) / side) * side
    }

    /// Return the four conditions satisfied by this placement.
    pub fn satisfied_conditions(self, size: SudokuSize) -> [Condition; 4] {
        [
            Condition::Cell {
                row: self.row,
                column: self.column,
            },
            Condition::RowNumber {
                row: self.row,
                number: self.number,
            },
            Condition::ColumnNumber {
                column: self.column,
                number: self.number,
            },
            Condition::SquareNumber {
                square: self.square(size),
                number: self.number,
            },
        ]
    }

    /// Return true if every value lies in `1..=size.digits()`.
    pub fn is_within(&self, size: SudokuSize) -> bool {
        let range = 1..=size.digits();

        range.contains(&self.row) && range.contains(&self.column) && range.contains(&self.number)
    }

    fn lookup_index(&self, size: SudokuSize) -> usize {
        let digits = size.digits();

        (self.row - 1) * digits * digits + (self.column - 1) * digits + (self.number - 1)
    }
}

/// A condition that exactly one placement must satisfy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    /// Some number is placed in the cell.
    Cell {
        /// 1-based row of the cell.
        row: usize,
        /// 1-based column of the cell.
        column: usize,
    },
    /// The number appears in the row.
    RowNumber {
        /// 1-based row.
        row: usize,
        /// The number.
        number: usize,
    },
    /// The number appears in the column.
    ColumnNumber {
        /// 1-based column.
        column: usize,
        /// The number.
        number: usize,
    },
    /// The number appears in the box.
    SquareNumber {
        /// 0-based box index, counted left to right and top to bottom.
        square: usize,
        /// The number.
        number: usize,
    },
}

impl Condition {
    /// Return the position of this condition's column in the matrix.
    ///
    /// Conditions are laid out in four groups of `digits^2` columns: cells,
    /// then rows, then columns, then boxes.
    pub fn column_index(&self, size: SudokuSize) -> usize {
        let digits = size.digits();
        let (group, major, minor) = match *self {
            Condition::Cell { row, column } => (0, row - 1, column - 1),
            Condition::RowNumber { row, number } => (1, row - 1, number - 1),
            Condition::ColumnNumber { column, number } => (2, column - 1, number - 1),
            Condition::SquareNumber { square, number } => (3, square, number - 1),
        };

        group * digits * digits + major * digits + minor
    }
}

/// Exact cover matrix for an empty Sudoku grid of a given size.
#[derive(Debug)]
pub struct SudokuMatrix {
    matrix: Matrix<Placement>,
    size: SudokuSize,
    // Row anchor (the cell node) of every placement
    anchors: Vec<NodeId>,
}

impl SudokuMatrix {
    /// Build the matrix holding every possible placement.
    pub fn new(size: SudokuSize) -> Self {
        let digits = size.digits();
        let mut matrix = Matrix::new();

        let headers: Vec<_> = (0..4 * digits * digits)
            .map(|_| matrix.new_header())
            .collect();
        let mut anchors = Vec::with_capacity(digits * digits * digits);

        for row in 1..=digits {
            for column in 1..=digits {
                for number in 1..=digits {
                    let placement = Placement {
                        row,
                        column,
                        number,
                    };

                    let nodes = placement
                        .satisfied_conditions(size)
                        .map(|condition| matrix.new_node(headers[condition.column_index(size)]));
                    for node in nodes {
                        matrix.set_data(node, placement);
                    }
                    matrix.make_row(nodes[0], nodes[1..].iter().copied());

                    debug_assert_eq!(anchors.len(), placement.lookup_index(size));
                    anchors.push(nodes[0]);
                }
            }
        }

        log::debug!(
            "Built sudoku matrix for size [{}] with [{}] columns and [{}] nodes.",
            digits,
            headers.len(),
            matrix.len()
        );

        SudokuMatrix {
            matrix,
            size,
            anchors,
        }
    }

    /// Return the size of the grid.
    pub fn size(&self) -> SudokuSize {
        self.size
    }

    /// Return the row anchor for placing `number` at (`row`, `column`).
    ///
    /// # Panics
    ///
    /// Panics if any value is outside of `1..=size.digits()`.
    pub fn node_row(&self, row: usize, column: usize, number: usize) -> NodeId {
        let placement = Placement {
            row,
            column,
            number,
        };
        assert!(
            placement.is_within(self.size),
            "Placement [{:?}] is outside of a grid of size [{}]",
            placement,
            self.size.digits()
        );

        self.anchors[placement.lookup_index(self.size)]
    }

    /// Return the underlying exact cover matrix.
    pub fn matrix(&self) -> &Matrix<Placement> {
        &self.matrix
    }
}

/// Sudoku front end for [`Solver`].
#[derive(Debug)]
pub struct SudokuSolver {
    solver: Solver<Placement>,
    size: SudokuSize,
    anchors: Vec<NodeId>,

    // Column indices already covered by inputs
    satisfied: HashSet<usize>,
}

impl SudokuSolver {
    /// Create a solver for the given matrix with no inputs filled in.
    pub fn new(matrix: SudokuMatrix) -> Self {
        let SudokuMatrix {
            matrix,
            size,
            anchors,
        } = matrix;

        SudokuSolver {
            solver: Solver::new(matrix),
            size,
            anchors,
            satisfied: HashSet::new(),
        }
    }

    /// Return the size of the grid.
    pub fn size(&self) -> SudokuSize {
        self.size
    }

    /// Fill in `number` at (`row`, `column`) as a given of the puzzle.
    ///
    /// Returns false, leaving the puzzle untouched, if the placement clashes
    /// with an earlier input (same cell, or same number in the same row,
    /// column or box).
    ///
    /// # Panics
    ///
    /// Panics if any value is outside of `1..=size.digits()`.
    pub fn set_input(&mut self, row: usize, column: usize, number: usize) -> bool {
        let placement = Placement {
            row,
            column,
            number,
        };
        assert!(
            placement.is_within(self.size),
            "Placement [{:?}] is outside of a grid of size [{}]",
            placement,
            self.size.digits()
        );

        let columns = placement
            .satisfied_conditions(self.size)
            .map(|condition| condition.column_index(self.size));
        if columns.iter().any(|column| self.satisfied.contains(column)) {
            log::debug!("Rejecting conflicting input [{:?}].", placement);

            return false;
        }
        self.satisfied.extend(columns);

        self.solver
            .cover_row(self.anchors[placement.lookup_index(self.size)]);

        true
    }

    /// Solve the puzzle, returning the completed grid if there is one.
    pub fn solve(&mut self) -> Option<Solution> {
        let nodes = self.solver.solve()?;

        let placements = nodes
            .into_iter()
            .filter_map(|node| self.solver.data(node).copied());

        Some(Solution::new(self.size, placements))
    }
}

/// A completely filled Sudoku grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    size: SudokuSize,
    grid: Vec<usize>,
}

impl Solution {
    /// Collect placements into a grid. Cells without a placement hold `0`.
    pub fn new(size: SudokuSize, placements: impl IntoIterator<Item = Placement>) -> Self {
        let digits = size.digits();
        let mut grid = vec![0; digits * digits];

        for placement in placements {
            grid[(placement.row - 1) * digits + placement.column - 1] = placement.number;
        }

        Solution { size, grid }
    }

    /// Return the size of the grid.
    pub fn size(&self) -> SudokuSize {
        self.size
    }

    /// Return the number at (`row`, `column`), both 1-based.
    pub fn cell_value(&self, row: usize, column: usize) -> usize {
        self.grid[(row - 1) * self.size.digits() + column - 1]
    }

    /// Return the grid rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.grid.chunks(self.size.digits())
    }
}
