use alloc::vec::Vec;
use rand::Rng;

use crate::*;

impl Grid {
    /// Places `mines` additional mines on distinct cells by rejection sampling: draw a uniform
    /// `(row, col)`, retry when it already holds a mine.
    ///
    /// Requests beyond the number of unmined cells are clamped so the sampling terminates.
    pub fn plant_mines<R: Rng>(&mut self, mines: CellCount, rng: &mut R) {
        let (rows, cols) = self.size();
        let free_cells = self.total_cells() - self.mine_count();

        let mines = if mines > free_cells {
            log::warn!(
                "Minefield cannot fit all mines, requested {} but only {} cells are free",
                mines,
                free_cells
            );
            free_cells
        } else {
            mines
        };

        let mut planted = 0;
        while planted < mines {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            let cell = &mut self[coords];
            if !cell.is_mine {
                cell.is_mine = true;
                planted += 1;
            }
        }
        log::debug!("Planted {} mines on a {:?} board", planted, self.size());
    }

    /// Moves the mine at `from` to a cell picked uniformly among those without a mine.
    ///
    /// Returns where the mine landed, or `None` when every cell is mined and nothing moved.
    /// Neighbor counts are stale afterwards until recomputed.
    pub fn move_one_mine<R: Rng>(&mut self, from: Coord2, rng: &mut R) -> Option<Coord2> {
        debug_assert!(self[from].is_mine, "no mine to move at {from:?}");

        let candidates: Vec<Coord2> = self
            .iter_cells()
            .filter(|cell| !cell.is_mine)
            .map(|cell| cell.coords)
            .collect();
        if candidates.is_empty() {
            log::warn!("No free cell to move the mine at {:?} to", from);
            return None;
        }

        let to = candidates[rng.random_range(0..candidates.len())];
        self[from].is_mine = false;
        self[to].is_mine = true;
        log::debug!("Moved mine from {:?} to {:?}", from, to);
        Some(to)
    }
}
