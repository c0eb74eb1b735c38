use thiserror::Error;

use crate::constants::ENCODE_BOARD_SIZE;

/// The error type for submitting a move to a [`Game`](crate::game::Game).
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("point ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("the game is over, no further moves are accepted")]
    GameOver,
}

/// The error type for password derivation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error(
        "move {index} at ({row}, {col}) is outside the {size}x{size} encode board",
        size = ENCODE_BOARD_SIZE
    )]
    OutsideEncodeBoard {
        index: usize,
        row: usize,
        col: usize,
    },
}
