use serde::{Deserialize, Serialize};

use crate::Coord2;

/// One grid position with its mine, reveal and mark state.
///
/// `is_flagged` and `is_questionable` are never both set, and only mean something while the
/// cell is closed. `mines_neighbor` is left alone on mine cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coords: Coord2,
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub is_questionable: bool,
    pub is_false_alarm: bool,
    pub did_bust: bool,
    pub mines_neighbor: u8,
}

impl Cell {
    pub const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            is_questionable: false,
            is_false_alarm: false,
            did_bust: false,
            mines_neighbor: 0,
        }
    }

    /// Closed and carrying neither a flag nor a question mark.
    pub const fn is_blank(&self) -> bool {
        !self.is_revealed && !self.is_flagged && !self.is_questionable
    }

    /// Carries a flag or a question mark.
    pub const fn is_marked(&self) -> bool {
        self.is_flagged || self.is_questionable
    }
}
