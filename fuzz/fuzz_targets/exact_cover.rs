#![no_main]

use dlx_solver::{Matrix, Solver};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct Problem {
    num_columns: u8,
    rows: Vec<u16>,
}

fuzz_target!(|problem: Problem| {
    let num_columns = usize::from(problem.num_columns % 12) + 1;
    let mut matrix = Matrix::new();
    let headers: Vec<_> = (0..num_columns).map(|_| matrix.new_header()).collect();

    for (row_idx, mask) in problem.rows.iter().take(24).enumerate() {
        let nodes: Vec<_> = (0..num_columns)
            .filter(|c| mask & (1 << c) != 0)
            .map(|c| matrix.new_node(headers[c]))
            .collect();
        for node in &nodes {
            matrix.set_data(*node, row_idx);
        }
        if let Some((anchor, rest)) = nodes.split_first() {
            matrix.make_row(*anchor, rest.iter().copied());
        }
    }

    let before = matrix.clone();
    let mut solver = Solver::new(matrix);

    match solver.solve() {
        Some(solution) => {
            let mut touched = vec![0; before.len()];
            for node in &solution {
                for row_node in before.row(*node) {
                    touched[before.header(row_node).index()] += 1;
                }
            }
            for header in &headers {
                assert_eq!(touched[header.index()], 1);
            }
        }
        None => assert_eq!(solver.matrix(), &before),
    }
});
