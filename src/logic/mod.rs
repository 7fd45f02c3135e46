use rand::Rng;
use tracing::{debug, info, warn};

use crate::data::{Board, Cell};

impl Board {
    pub fn new(size: usize) -> Self {
        info!("Creating new board: {}x{}", size, size);
        Self {
            size,
            cells: vec![Cell::default(); size * size],
            explore_count: 0,
        }
    }

    /// Row-major index of the 1-based coordinate pair. Coordinates outside
    /// `[1, size]` are a contract violation; the driver validates bounds
    /// before calling in.
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            (1..=self.size).contains(&i) && (1..=self.size).contains(&j),
            "cell ({}, {}) is outside the {}x{} board",
            i,
            j,
            self.size,
            self.size
        );
        (i - 1) * self.size + (j - 1)
    }

    pub fn cell(&self, i: usize, j: usize) -> &Cell {
        &self.cells[self.index(i, j)]
    }

    fn cell_mut(&mut self, i: usize, j: usize) -> &mut Cell {
        let index = self.index(i, j);
        &mut self.cells[index]
    }

    pub fn set_mine(&mut self, i: usize, j: usize) {
        self.cell_mut(i, j).mine = true;
    }

    /// Places `count` mines on distinct positions, uniformly at random.
    /// Walks the cells in order drawing each with probability
    /// `mines_left / cells_left`, which is a draw without replacement.
    pub fn set_mines(&mut self, count: usize) {
        let mut rng = rand::rng();
        let mut mines_left = count as u32;
        let length = self.cells.len();

        for (cells_left, cell) in (1..=length).rev().zip(self.cells.iter_mut()) {
            if rng.random_ratio(mines_left, cells_left as u32) {
                cell.mine = true;
                mines_left -= 1;
            }
        }

        info!(
            "Placed {} mines on the {}x{} field",
            count, self.size, self.size
        );
    }

    /// Coordinates of the up-to-8 in-grid neighbors at Chebyshev distance
    /// exactly 1: 3 at a corner, 5 on an edge, 8 in the interior.
    pub fn adjacent_coords(&self, i: usize, j: usize) -> Vec<(usize, usize)> {
        let mut coords = Vec::with_capacity(8);
        for di in -1i32..=1 {
            for dj in -1i32..=1 {
                if di == 0 && dj == 0 {
                    continue;
                }

                let ni = i as i32 + di;
                let nj = j as i32 + dj;
                if ni >= 1 && nj >= 1 && ni <= self.size as i32 && nj <= self.size as i32 {
                    coords.push((ni as usize, nj as usize));
                }
            }
        }
        coords
    }

    pub fn adjacent_cells(&self, i: usize, j: usize) -> Vec<&Cell> {
        self.adjacent_coords(i, j)
            .into_iter()
            .map(|(ai, aj)| self.cell(ai, aj))
            .collect()
    }

    pub fn count_adjacent_mines(&self, i: usize, j: usize) -> usize {
        self.adjacent_cells(i, j)
            .into_iter()
            .filter(|c| c.mine)
            .count()
    }

    pub fn has_explored(&self, i: usize, j: usize) -> bool {
        self.cell(i, j).explored
    }

    /// The game is won either when the marks correspond exactly to the
    /// mines, or when every safe cell has been explored. The two conditions
    /// are independent; either alone ends the game.
    pub fn user_win(&self) -> bool {
        let all_mines_checked = self.cells.iter().all(|c| c.mine == c.checked);
        let all_safe_explored = self.cells.iter().filter(|c| !c.mine).all(|c| c.explored);
        all_mines_checked || all_safe_explored
    }

    pub fn user_lose(&self) -> bool {
        self.cells.iter().any(|c| c.mine && c.explored)
    }

    /// Toggles the suspected-mine mark. Self-inverse, touches nothing else.
    pub fn mark(&mut self, i: usize, j: usize) {
        let cell = self.cell_mut(i, j);
        cell.checked = !cell.checked;
        debug!(
            "Cell ({}, {}) {}",
            i,
            j,
            if cell.checked { "marked" } else { "unmarked" }
        );
    }

    /// Reveals the cell at `(i, j)`, clearing any mark on it. The very
    /// first reveal of a game never loses: a mine hit then is relocated
    /// before the cell is opened. Revealing a cell with no adjacent mines
    /// cascades over the whole zero-adjacency region.
    ///
    /// A losing reveal leaves the mine open for the caller to detect via
    /// `user_lose`.
    pub fn explore(&mut self, i: usize, j: usize) {
        if self.explore_count == 0 && self.cell(i, j).mine {
            self.relocate_mine(i, j);
        }
        self.explore_count += 1;

        let cell = self.cell_mut(i, j);
        cell.explored = true;
        cell.checked = false;
        if cell.mine {
            warn!("Revealed a mine at ({}, {}) - game over", i, j);
            return;
        }

        debug!("Revealed cell ({}, {})", i, j);
        if self.count_adjacent_mines(i, j) == 0 {
            self.flood_explore(i, j);
        }
    }

    /// First-move safety: moves the mine under the player's first reveal to
    /// the first safe cell in row-major order. On a fully mined board there
    /// is nowhere to move it, so the relocation is skipped and the reveal
    /// loses like any other.
    fn relocate_mine(&mut self, i: usize, j: usize) {
        let index = self.index(i, j);
        match self.cells.iter().position(|c| !c.mine) {
            Some(other) => {
                self.cells[index].mine = false;
                self.cells[other].mine = true;
                debug!("First reveal hit a mine at ({}, {}), relocated it", i, j);
            }
            None => warn!("Board is fully mined, skipping first-reveal relocation"),
        }
    }

    /// Cascading reveal with an explicit work stack. A cell is marked
    /// explored before its neighbors are expanded and explored cells are
    /// never pushed again, so every cell is visited at most once. Mines are
    /// never pushed, so the fill stops at the numbered border of the zero
    /// region.
    fn flood_explore(&mut self, i: usize, j: usize) {
        let mut stack: Vec<(usize, usize)> = self
            .adjacent_coords(i, j)
            .into_iter()
            .filter(|&(ai, aj)| {
                let c = self.cell(ai, aj);
                !c.explored && !c.mine
            })
            .collect();

        while let Some((ci, cj)) = stack.pop() {
            let cell = self.cell_mut(ci, cj);
            if cell.explored || cell.mine {
                continue;
            }
            cell.explored = true;
            cell.checked = false;

            if self.count_adjacent_mines(ci, cj) != 0 {
                continue;
            }
            for (ai, aj) in self.adjacent_coords(ci, cj) {
                let c = self.cell(ai, aj);
                if !c.explored && !c.mine {
                    stack.push((ai, aj));
                }
            }
        }
    }

    /// Single-character display of a cell, the entire contract the
    /// rendering layer needs: `*` marked, `X` mine on the end-of-game loss
    /// display, `.` hidden (or a concealed mine), `/` open with no mine
    /// nearby, otherwise the count of adjacent mines.
    pub fn glyph(&self, i: usize, j: usize, reveal_mines: bool) -> char {
        let cell = self.cell(i, j);
        if cell.checked {
            return '*';
        }
        if cell.mine {
            return if reveal_mines { 'X' } else { '.' };
        }
        if !cell.explored {
            return '.';
        }
        match self.count_adjacent_mines(i, j) {
            0 => '/',
            n => char::from_digit(n as u32, 10).unwrap_or('?'),
        }
    }
}
