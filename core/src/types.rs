use ndarray::Array2;

/// Single coordinate axis, used for rows, columns, width and height.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // dimensions are built from `Coord` values, the casts cannot truncate
        NeighborIter::new(index, (rows as Coord, cols as Coord))
    }
}

/// The 8-neighborhood, as `(d_row, d_col)`.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (1, 1),
    (-1, 1),
    (0, -1),
    (1, -1),
    (-1, -1),
];

/// Moves one axis by `delta`, staying within `0..len`.
fn step(axis: Coord, delta: i8, len: Coord) -> Option<Coord> {
    axis.checked_add_signed(delta).filter(|&next| next < len)
}

/// Iterates the in-bounds neighbors of a cell, clipped to the grid.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            let (row, col) = self.center;
            let (rows, cols) = self.bounds;
            if let (Some(row), Some(col)) = (step(row, delta.0, rows), step(col, delta.1, cols)) {
                return Some((row, col));
            }
        }
    }
}
