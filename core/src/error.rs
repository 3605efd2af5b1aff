use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Rejections of a requested difficulty, worded for display next to the input form.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("Please enter number in every field.")]
    NotANumber,
    #[error("You can't enter negative number.")]
    Negative,
    #[error("Width and height cannot exceed {max}.")]
    TooLarge { max: Coord },
    #[error("Mines must be less than the width * height value({total}).")]
    TooManyMines { total: i64 },
    #[error("There must be at least one mine.")]
    NoMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
