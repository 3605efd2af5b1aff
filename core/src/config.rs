use serde::{Deserialize, Serialize};

use crate::*;

/// Largest accepted width or height.
pub const MAX_DIMENSION: Coord = 100;

/// Board shape and mine count for one game.
///
/// Only constructible through validation, so `1 <= mines < width * height` and both
/// dimensions are within `1..=MAX_DIMENSION`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DifficultyInput")]
pub struct Difficulty {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

/// Unvalidated difficulty as it arrives from a form or a config file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DifficultyInput {
    pub width: i64,
    pub height: i64,
    #[serde(alias = "mine")]
    pub mines: i64,
}

impl Difficulty {
    /// Validates raw integers. Checks run in a fixed order and the first failure is reported.
    pub fn new(width: i64, height: i64, mines: i64) -> core::result::Result<Self, DifficultyError> {
        if width < 0 || height < 0 || mines < 0 {
            return Err(DifficultyError::Negative);
        }
        let max = i64::from(MAX_DIMENSION);
        if width > max || height > max {
            return Err(DifficultyError::TooLarge { max: MAX_DIMENSION });
        }
        let total = width * height;
        if mines >= total {
            return Err(DifficultyError::TooManyMines { total });
        }
        if mines == 0 {
            return Err(DifficultyError::NoMines);
        }

        // all three are bounded by the checks above
        Ok(Self {
            width: width as Coord,
            height: height as Coord,
            mines: mines as CellCount,
        })
    }

    /// Validates the three text fields of a difficulty form.
    ///
    /// Each field must be a whole integer after trimming: `"12abc"` and `"1.5"` are rejected
    /// as non-numeric rather than truncated.
    pub fn parse(
        width: &str,
        height: &str,
        mines: &str,
    ) -> core::result::Result<Self, DifficultyError> {
        let field = |text: &str| text.trim().parse::<i64>().ok();
        match (field(width), field(height), field(mines)) {
            (Some(width), Some(height), Some(mines)) => Self::new(width, height, mines),
            _ => Err(DifficultyError::NotANumber),
        }
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl TryFrom<DifficultyInput> for Difficulty {
    type Error = DifficultyError;

    fn try_from(input: DifficultyInput) -> core::result::Result<Self, Self::Error> {
        Self::new(input.width, input.height, input.mines)
    }
}
