#![no_main]

use dlx_solver::sudoku::{SudokuMatrix, SudokuSize, SudokuSolver};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct Sudoku4x4Input {
    filled_entries: Vec<(usize, usize, usize)>,
}

impl<'a> arbitrary::Arbitrary<'a> for Sudoku4x4Input {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let filled_entries = u
            .arbitrary::<[u8; 16]>()?
            .into_iter()
            .map(usize::from)
            .enumerate()
            .filter_map(|(index, value)| {
                let row = index / 4 + 1;
                let column = index % 4 + 1;
                let value = value % 5;

                if value == 0 {
                    None
                } else {
                    Some((row, column, value))
                }
            })
            .collect();

        Ok(Sudoku4x4Input { filled_entries })
    }
}

fuzz_target!(|data: Sudoku4x4Input| {
    let mut solver = SudokuSolver::new(SudokuMatrix::new(SudokuSize::Four));

    for (row, column, number) in &data.filled_entries {
        if !solver.set_input(*row, *column, *number) {
            return;
        }
    }

    if let Some(solution) = solver.solve() {
        for (row, column, number) in data.filled_entries {
            assert_eq!(solution.cell_value(row, column), number);
        }
    }
});
