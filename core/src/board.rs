use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of cells, indexed by `(row, col)`.
///
/// Every operation of a game mutates one exclusively owned `Grid` in place. Coordinates passed
/// to its methods must be in bounds; out-of-range coordinates panic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    pub(crate) revealed_cells: CellCount,
    pub(crate) flagged_cells: CellCount,
}

impl Grid {
    /// Builds a `height` x `width` board of closed, unmined, unmarked cells.
    pub fn new(width: Coord, height: Coord) -> Self {
        debug_assert!(width > 0 && height > 0, "empty board");
        let cells = Array2::from_shape_fn((usize::from(height), usize::from(width)), |(row, col)| {
            Cell::new((row as Coord, col as Coord))
        });
        Self {
            cells,
            revealed_cells: 0,
            flagged_cells: 0,
        }
    }

    pub fn from_difficulty(difficulty: &Difficulty) -> Self {
        Self::new(difficulty.width(), difficulty.height())
    }

    /// Builds an empty board and places mines at exactly `mine_coords`.
    pub fn with_mines(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Self {
        let mut grid = Self::new(width, height);
        for &coords in mine_coords {
            grid[coords].is_mine = true;
        }
        grid
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn cell(&self, coords: Coord2) -> &Cell {
        &self[coords]
    }

    pub fn revealed_cells(&self) -> CellCount {
        self.revealed_cells
    }

    pub fn flagged_cells(&self) -> CellCount {
        self.flagged_cells
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mine).count() as CellCount
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_blank() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.size(), (3, 4));
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.total_cells(), 12);
        assert_eq!(grid.revealed_cells(), 0);
        assert_eq!(grid.flagged_cells(), 0);
        assert!(grid.iter_cells().all(|cell| cell.is_blank() && !cell.is_mine));
        assert!(grid.iter_cells().all(|cell| cell.mines_neighbor == 0));
    }

    #[test]
    fn cells_remember_their_coordinates() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid[(2, 3)].coords, (2, 3));
        assert_eq!(grid.cell((1, 0)).coords, (1, 0));
    }

    #[test]
    fn contains_checks_both_axes() {
        let grid = Grid::new(4, 3);

        assert!(grid.contains((2, 3)));
        assert!(!grid.contains((3, 0)));
        assert!(!grid.contains((0, 4)));
    }

    #[test]
    fn with_mines_places_given_mines() {
        let grid = Grid::with_mines(3, 3, &[(0, 0), (2, 2)]);

        assert_eq!(grid.mine_count(), 2);
        assert!(grid[(0, 0)].is_mine);
        assert!(grid[(2, 2)].is_mine);
        assert!(!grid[(1, 1)].is_mine);
    }
}
