use dlx_solver::{Matrix, NodeId};

/// Install a logger for the test binary, ignoring repeated calls.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a matrix with `num_columns` columns and one row per entry of `rows`.
///
/// Every node of a row carries the row's index as payload. Returns the matrix,
/// the headers in creation order and the nodes of each row.
#[allow(dead_code)]
pub fn build_matrix<R: AsRef<[usize]>>(
    num_columns: usize,
    rows: &[R],
) -> (Matrix<usize>, Vec<NodeId>, Vec<Vec<NodeId>>) {
    let mut matrix = Matrix::new();
    let headers: Vec<_> = (0..num_columns).map(|_| matrix.new_header()).collect();
    let mut row_nodes = Vec::with_capacity(rows.len());

    for (row_idx, row) in rows.iter().enumerate() {
        let nodes: Vec<_> = row
            .as_ref()
            .iter()
            .map(|column| matrix.new_node(headers[*column]))
            .collect();
        for node in &nodes {
            matrix.set_data(*node, row_idx);
        }
        if let Some((anchor, rest)) = nodes.split_first() {
            matrix.make_row(*anchor, rest.iter().copied());
        }

        row_nodes.push(nodes);
    }

    (matrix, headers, row_nodes)
}

/// Assert that the rows of `solution` touch every header exactly once.
#[allow(dead_code)]
pub fn assert_exact_cover(matrix: &Matrix<usize>, headers: &[NodeId], solution: &[NodeId]) {
    let mut touched = vec![0usize; matrix.len()];

    for node in solution {
        for row_node in matrix.row(*node) {
            touched[matrix.header(row_node).index()] += 1;
        }
    }

    for header in headers {
        assert_eq!(
            touched[header.index()],
            1,
            "Header [{:?}] touched [{}] times by [{:?}]",
            header,
            touched[header.index()],
            solution
        );
    }
}

/// Turn a row-major string of digits, with `0` for empty cells, into the
/// line based input format.
///
/// # Panics
///  - If the string is not exactly `side_length` * `side_length` characters
#[allow(dead_code)]
pub fn to_grid_input(sudoku_input: &str, side_length: usize) -> String {
    assert_eq!(
        sudoku_input.len(),
        side_length * side_length,
        "Input needs to be `side_length` * `side_length` characters long."
    );

    let cells: Vec<char> = sudoku_input
        .chars()
        .map(|c| if c == '0' { '_' } else { c })
        .collect();

    cells
        .chunks(side_length)
        .map(|row| row.iter().collect::<String>() + "\n")
        .collect()
}

/// Undo the rendering of a solution into a single row-major string.
#[allow(dead_code)]
pub fn to_compact(rendered: &str) -> String {
    rendered.chars().filter(|c| !c.is_whitespace()).collect()
}
