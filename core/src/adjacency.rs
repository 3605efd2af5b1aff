use crate::*;

impl Grid {
    /// Stores, on every cell without a mine, how many of its up to 8 neighbors hold one.
    ///
    /// Run once the mine layout is final, before anything is revealed.
    pub fn compute_neighbor_counts(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if self[coords].is_mine {
                    continue;
                }
                let count = self.count_adjacent_mines(coords);
                self[coords].mines_neighbor = count;
            }
        }
    }

    /// Live count of the mines around `coords`, independent of the stored value.
    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }
}
