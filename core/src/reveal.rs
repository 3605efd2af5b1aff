use alloc::collections::VecDeque;
use ndarray::Array2;

use crate::*;

impl Grid {
    /// Opens exactly one cell. The caller makes sure it is closed and unmarked.
    pub fn reveal_cell(&mut self, coords: Coord2) {
        self[coords].is_revealed = true;
        self.revealed_cells += 1;
    }

    /// Breadth-first reveal from `start`, returning how many cells were opened.
    ///
    /// Mines, marked cells and already open cells are skipped and never expanded. A cell with a
    /// nonzero count is opened but not expanded, so a zero region opens together with the ring
    /// of numbers around it. Neighbors are marked visited when queued, so no cell is queued
    /// twice.
    pub fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut visited: Array2<bool> = Array2::default(self.size().to_nd_index());
        visited[start.to_nd_index()] = true;
        let mut to_visit = VecDeque::from([start]);
        let mut opened = 0;

        while let Some(coords) = to_visit.pop_front() {
            let cell = self[coords];
            if cell.is_mine || cell.is_marked() || cell.is_revealed {
                log::trace!("Skipping cell at {:?}", coords);
                continue;
            }

            self.reveal_cell(coords);
            opened += 1;
            log::trace!(
                "Flood opened cell at {:?}, mine count: {}",
                coords,
                cell.mines_neighbor
            );

            if cell.mines_neighbor != 0 {
                continue;
            }

            for pos in self.iter_neighbors(coords) {
                let seen = &mut visited[pos.to_nd_index()];
                if !*seen {
                    *seen = true;
                    to_visit.push_back(pos);
                }
            }
        }

        opened
    }

    /// Opens every mine that does not carry a flag, so correct flags stay in place.
    pub fn reveal_all_mines(&mut self) {
        for cell in self.cells_mut() {
            if cell.is_mine && !cell.is_flagged {
                cell.is_revealed = true;
            }
        }
    }

    /// Marks the mine whose reveal lost the game.
    pub fn indicate_bust(&mut self, coords: Coord2) {
        self[coords].did_bust = true;
    }
}
