/// A single board position. All three flags are independent except that
/// exploring a cell clears its mark (see `Board::explore`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cell {
    pub mine: bool,
    pub checked: bool,
    pub explored: bool,
}

/// An `n × n` minefield addressed by 1-based `(row, column)` coordinates.
///
/// Cells are stored row-major; `explore_count` only exists to detect the
/// very first reveal of a game (first-move safety).
#[derive(Debug)]
pub struct Board {
    pub size: usize,
    pub cells: Vec<Cell>,
    pub explore_count: usize,
}
