#![deny(missing_docs)]

//! Implementation of [Dancing Links](https://en.wikipedia.org/wiki/Dancing_Links)
//! and [Algorithm X](https://en.wikipedia.org/wiki/Knuth%27s_Algorithm_X) for solving
//!  [exact cover](https://en.wikipedia.org/wiki/Exact_cover) problems.
//!
//! A [`Matrix`] is built by creating column headers, creating nodes in those
//! columns and linking nodes into rows. A [`Solver`] then takes ownership of
//! the matrix and searches for a set of rows covering every column exactly
//! once.
//!
//! ```
//! use dlx_solver::{Matrix, Solver};
//!
//! let mut matrix = Matrix::new();
//! let columns: Vec<_> = (0..4).map(|_| matrix.new_header()).collect();
//!
//! for (name, row) in [("a", &[0, 2][..]), ("b", &[0, 1, 2]), ("c", &[1, 3])] {
//!     let nodes: Vec<_> = row.iter().map(|c| matrix.new_node(columns[*c])).collect();
//!     for node in &nodes {
//!         matrix.set_data(*node, name);
//!     }
//!     matrix.make_row(nodes[0], nodes[1..].iter().copied());
//! }
//!
//! let mut solver = Solver::new(matrix);
//! let solution = solver.solve().unwrap();
//! let mut names: Vec<_> = solution.iter().map(|node| *solver.data(*node).unwrap()).collect();
//! names.sort();
//!
//! assert_eq!(names, ["a", "c"]);
//! ```
//!
//! The [`sudoku`] and [`processor`] modules build on the core to solve Sudoku
//! puzzles of size 4, 9 and 16.

mod header;
mod matrix;
mod node;
pub mod processor;
pub(crate) mod solver;
pub mod sudoku;

pub use matrix::Matrix;
pub use node::{iter, NodeId};
pub use solver::Solver;
