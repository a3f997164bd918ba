//! Run Sudoku solver
//! Usage:
//!
//! ```bash
//! printf '4 _ _ 1\n_ 1 3 _\n_ 4 1 _\n1 _ _ 3\n' | cargo run --release --example sudoku
//! ```
//!
//! Set `RUST_LOG=debug` to see what the solver is doing.

use dlx_solver::processor;
use std::io::{self, Write};

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = io::BufWriter::new(stdout.lock());

    let solved = match processor::process_sudoku(stdin.lock(), &mut output) {
        Ok(solved) => solved,
        Err(err) => {
            eprintln!("Failed to write solution: {}", err);
            false
        }
    };

    if output.flush().is_err() || !solved {
        std::process::exit(1);
    }
}
