//! Errors raised while building a grid.
//!
//! Only construction can fail. Blocked moves, spawns on a full board and
//! unknown commands are ordinary outcomes and never show up here.

use crate::types::{Tile, MAX_BOARD_SIZE, MAX_TILE, MIN_BOARD_SIZE};

/// Reasons a [`Grid`](crate::Grid) could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Side length outside the supported range.
    #[error("board size {size} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    InvalidSize { size: usize },

    /// A hand-written board whose rows are not all as long as the board is tall.
    #[error("row {row} has {len} cells but the board has {rows} rows")]
    NotSquare { rows: usize, row: usize, len: usize },

    /// A hand-written cell that is neither empty nor a power of two in 2..=MAX_TILE.
    #[error("cell ({row}, {col}) holds {value}, expected 0 or a power of two in 2..={max}", max = MAX_TILE)]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// Validate a board side length.
pub(crate) fn check_size(size: usize) -> Result<(), GridError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GridError::InvalidSize { size })
    }
}

/// True for 0 and for powers of two in `2..=MAX_TILE`.
pub(crate) fn is_valid_tile(value: Tile) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}
