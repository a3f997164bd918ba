//! Text input and output for Sudoku puzzles.
//!
//! # Format
//!  - One line per grid row, whitespace inside a line is ignored.
//!  - `_` marks an empty cell.
//!  - Grids of size 4 and 9 use the digits `1` through `9`. Grids of size 16
//!    use the hex digits `0` through `F` for the numbers 1 through 16.
//!  - The length of the first line decides the size of the grid.
//!
//! ```text
//! 4 _ _ 1
//! _ 1 3 _
//! _ 4 1 _
//! 1 _ _ 3
//! ```
//!
//! A solution is written back one row per line, every cell followed by a
//! single space.

use crate::sudoku::{Solution, SudokuMatrix, SudokuSize, SudokuSolver};
use std::{
    error::Error,
    fmt,
    io::{self, BufRead, Write},
};

/// The token marking an empty cell.
pub const EMPTY_CELL: char = '_';

/// Reasons a puzzle could not be read.
#[derive(Debug)]
pub enum ProcessError {
    /// There was not a single line of input.
    EmptyInput,
    /// The first line does not describe a grid of size 4, 9 or 16.
    UnsupportedSize {
        /// Number of cells found on the first line.
        length: usize,
    },
    /// A line holds a different number of cells than the first one.
    RaggedLine {
        /// 1-based line number.
        line: usize,
        /// Number of cells found on the line.
        length: usize,
        /// Number of cells on the first line.
        expected: usize,
    },
    /// The input ended before every grid row was read.
    MissingLines {
        /// Number of lines read.
        read: usize,
        /// Number of lines the grid needs.
        expected: usize,
    },
    /// A cell holds something that is not a number for this grid size.
    InvalidToken {
        /// 1-based line number.
        line: usize,
        /// 1-based cell position in the line.
        column: usize,
        /// The offending character.
        token: char,
    },
    /// A given repeats a number in a row, column or box.
    ConflictingInput {
        /// 1-based row of the cell.
        row: usize,
        /// 1-based column of the cell.
        column: usize,
        /// The number that could not be placed.
        number: usize,
    },
    /// Reading the input failed.
    Io(io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::EmptyInput => write!(f, "Input stream is empty"),
            ProcessError::UnsupportedSize { length } => write!(
                f,
                "Unrecognized Sudoku size: {}. Valid sizes are: 4, 9, 16",
                length
            ),
            ProcessError::RaggedLine {
                line,
                length,
                expected,
            } => write!(
                f,
                "All lines should be of equal size. Line {} has {} cells, expected {}",
                line, length, expected
            ),
            ProcessError::MissingLines { read, expected } => write!(
                f,
                "Read {} lines. Expected to read {} lines instead",
                read, expected
            ),
            ProcessError::InvalidToken {
                line,
                column,
                token,
            } => write!(
                f,
                "Invalid cell '{}' at line {}, position {}",
                token, line, column
            ),
            ProcessError::ConflictingInput {
                row,
                column,
                number,
            } => write!(
                f,
                "Number {} at line {}, position {} conflicts with an earlier cell",
                number, row, column
            ),
            ProcessError::Io(err) => write!(f, "Failed to read input: {}", err),
        }
    }
}

impl Error for ProcessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProcessError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ProcessError {
    fn from(err: io::Error) -> Self {
        ProcessError::Io(err)
    }
}

/// Read a puzzle and solve it, writing the solution to `output`.
///
/// Problems with the input and unsolvable puzzles are reported as a message
/// on `output` and a `false` return. Only failures to write are returned as
/// errors.
pub fn process_sudoku(input: impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    let mut solver = match parse_sudoku(input) {
        Ok(solver) => solver,
        Err(err) => {
            log::debug!("Rejected input: [{}].", err);
            writeln!(output, "Error: {}", err)?;

            return Ok(false);
        }
    };

    match solver.solve() {
        Some(solution) => {
            write_solution(output, &solution)?;

            Ok(true)
        }
        None => {
            writeln!(output, "No valid Sudoku solution found")?;

            Ok(false)
        }
    }
}

/// Read a puzzle into a solver with every given already filled in.
pub fn parse_sudoku(input: impl BufRead) -> Result<SudokuSolver, ProcessError> {
    let mut lines = input.lines();

    let first = lines.next().transpose()?.ok_or(ProcessError::EmptyInput)?;
    let mut cells = strip_whitespace(&first);

    let size = SudokuSize::from_digits(cells.len()).ok_or(ProcessError::UnsupportedSize {
        length: cells.len(),
    })?;
    let digits = size.digits();

    log::debug!("Parsing sudoku input of size [{}].", digits);

    let mut solver = SudokuSolver::new(SudokuMatrix::new(size));

    for row in 1..=digits {
        if row > 1 {
            let line = lines
                .next()
                .transpose()?
                .ok_or(ProcessError::MissingLines {
                    read: row - 1,
                    expected: digits,
                })?;
            cells = strip_whitespace(&line);
        }

        if cells.len() != digits {
            return Err(ProcessError::RaggedLine {
                line: row,
                length: cells.len(),
                expected: digits,
            });
        }

        for (column, token) in (1..).zip(cells.iter().copied()) {
            if token == EMPTY_CELL {
                continue;
            }

            let number = char_to_number(token, size).ok_or(ProcessError::InvalidToken {
                line: row,
                column,
                token,
            })?;

            if !solver.set_input(row, column, number) {
                return Err(ProcessError::ConflictingInput {
                    row,
                    column,
                    number,
                });
            }
        }
    }

    Ok(solver)
}

/// Write a solved grid, one row per line.
pub fn write_solution(output: &mut impl Write, solution: &Solution) -> io::Result<()> {
    let size = solution.size();

    for row in solution.rows() {
        for number in row {
            write!(output, "{} ", number_to_char(*number, size))?;
        }
        writeln!(output)?;
    }

    Ok(())
}

fn strip_whitespace(line: &str) -> Vec<char> {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Convert a cell token into a number, if it is valid for `size`.
pub fn char_to_number(token: char, size: SudokuSize) -> Option<usize> {
    let digit = usize::try_from(token.to_digit(16)?).ok()?;

    let number = match size {
        // Numbering starts at 0 so that 16 values fit in one hex digit
        SudokuSize::Sixteen => digit + 1,
        SudokuSize::Four | SudokuSize::Nine => digit,
    };

    if (1..=size.digits()).contains(&number) {
        Some(number)
    } else {
        None
    }
}

/// Convert a number back into its cell token, `_` if it is out of range.
pub fn number_to_char(number: usize, size: SudokuSize) -> char {
    if !(1..=size.digits()).contains(&number) {
        return EMPTY_CELL;
    }

    let digit = match size {
        SudokuSize::Sixteen => number - 1,
        SudokuSize::Four | SudokuSize::Nine => number,
    };

    u32::try_from(digit)
        .ok()
        .and_then(|digit| char::from_digit(digit, 16))
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or(EMPTY_CELL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let solved = process_sudoku(input.as_bytes(), &mut output).unwrap();

        (solved, String::from_utf8(output).unwrap())
    }

    #[test]
    fn solves_small_sudoku() {
        let (solved, output) = process("4 _ _ 1\n_ 1 3 _\n_ 4 1 _\n1 _ _ 3");

        assert!(solved);
        assert_eq!(output, "4 3 2 1 \n2 1 3 4 \n3 4 1 2 \n1 2 4 3 \n");
    }

    #[test]
    fn whitespace_is_ignored() {
        let (solved, output) = process("4__1\n  _ 1 3 _  \n_41_\n1\t_ _ 3\n");

        assert!(solved);
        assert!(output.starts_with("4 3 2 1 \n"));
    }

    #[test]
    fn hex_tokens_for_size_sixteen() {
        assert_eq!(char_to_number('0', SudokuSize::Sixteen), Some(1));
        assert_eq!(char_to_number('F', SudokuSize::Sixteen), Some(16));
        assert_eq!(char_to_number('a', SudokuSize::Sixteen), Some(11));
        assert_eq!(number_to_char(1, SudokuSize::Sixteen), '0');
        assert_eq!(number_to_char(11, SudokuSize::Sixteen), 'A');
        assert_eq!(number_to_char(16, SudokuSize::Sixteen), 'F');
    }

    #[test]
    fn tokens_out_of_range() {
        assert_eq!(char_to_number('0', SudokuSize::Nine), None);
        assert_eq!(char_to_number('5', SudokuSize::Four), None);
        assert_eq!(char_to_number('A', SudokuSize::Nine), None);
        assert_eq!(char_to_number('x', SudokuSize::Sixteen), None);
        assert_eq!(number_to_char(0, SudokuSize::Nine), EMPTY_CELL);
        assert_eq!(number_to_char(9, SudokuSize::Nine), '9');
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            parse_sudoku("".as_bytes()),
            Err(ProcessError::EmptyInput)
        ));

        let (solved, output) = process("");
        assert!(!solved);
        assert_eq!(output, "Error: Input stream is empty\n");
    }

    #[test]
    fn unsupported_size() {
        assert!(matches!(
            parse_sudoku("1 2 3\n".as_bytes()),
            Err(ProcessError::UnsupportedSize { length: 3 })
        ));
    }

    #[test]
    fn ragged_line() {
        assert!(matches!(
            parse_sudoku("4 _ _ 1\n_ 1 3\n".as_bytes()),
            Err(ProcessError::RaggedLine {
                line: 2,
                length: 3,
                expected: 4
            })
        ));
    }

    #[test]
    fn missing_lines() {
        assert!(matches!(
            parse_sudoku("4 _ _ 1\n_ 1 3 _\n".as_bytes()),
            Err(ProcessError::MissingLines {
                read: 2,
                expected: 4
            })
        ));
    }

    #[test]
    fn invalid_token() {
        assert!(matches!(
            parse_sudoku("4 _ _ 1\n_ 1 7 _\n_ 4 1 _\n1 _ _ 3".as_bytes()),
            Err(ProcessError::InvalidToken {
                line: 2,
                column: 3,
                token: '7'
            })
        ));
    }

    #[test]
    fn conflicting_input() {
        assert!(matches!(
            parse_sudoku("4 _ _ 4\n_ _ _ _\n_ _ _ _\n_ _ _ _".as_bytes()),
            Err(ProcessError::ConflictingInput {
                row: 1,
                column: 4,
                number: 4
            })
        ));
    }

    #[test]
    fn unsolvable_puzzle() {
        let (solved, output) = process("1 2 _ _\n_ _ 4 _\n_ _ _ 4\n_ _ _ _");

        assert!(!solved);
        assert_eq!(output, "No valid Sudoku solution found\n");
    }
}
