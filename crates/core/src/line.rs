//! Line collapse - the merge rule shared by all four directions
//!
//! A line is one row or one column, already ordered so that index 0 is the
//! side tiles slide towards. The grid reverses right/down lines before and
//! after calling [`collapse_line`], so this is the only place merging
//! happens.

use arrayvec::ArrayVec;

use crate::types::{Tile, MAX_BOARD_SIZE, MAX_TILE};

/// A stack-allocated line of at most [`MAX_BOARD_SIZE`] tiles.
pub type Line = ArrayVec<Tile, MAX_BOARD_SIZE>;

/// Result of collapsing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapsed {
    /// The line after sliding and merging, padded with trailing zeros.
    pub tiles: Line,
    /// Sum of every tile created by a merge.
    pub gained: u64,
    /// Whether `tiles` differs from the input.
    pub changed: bool,
}

/// Slide a line towards index 0 and merge equal neighbours.
///
/// Zeros are dropped first, so tiles separated by gaps still meet. Pairs are
/// taken greedily from the front and a tile merges at most once: a freshly
/// merged tile is never merged again in the same pass. Two [`MAX_TILE`]
/// tiles are not a pair.
///
/// # Panics
///
/// Panics if `line` is longer than [`MAX_BOARD_SIZE`].
///
/// # Examples
///
/// ```
/// use tui_2048_core::collapse_line;
///
/// let out = collapse_line(&[2, 2, 2, 0]);
/// assert_eq!(out.tiles.as_slice(), &[4, 2, 0, 0]);
/// assert_eq!(out.gained, 4);
/// assert!(out.changed);
/// ```
pub fn collapse_line(line: &[Tile]) -> Collapsed {
    let tight: Line = line.iter().copied().filter(|&v| v != 0).collect();

    let mut tiles = Line::new();
    let mut gained = 0u64;
    let mut i = 0;
    while i < tight.len() {
        let value = tight[i];
        let merged = match tight.get(i + 1) {
            Some(&next) if next == value => merge_value(value),
            _ => None,
        };
        match merged {
            Some(merged) => {
                tiles.push(merged);
                gained += u64::from(merged);
                i += 2;
            }
            None => {
                tiles.push(value);
                i += 1;
            }
        }
    }

    while tiles.len() < line.len() {
        tiles.push(0);
    }

    let changed = tiles.as_slice() != line;
    Collapsed {
        tiles,
        gained,
        changed,
    }
}

/// The tile two equal `value` tiles merge into, or `None` if they can't merge.
pub fn merge_value(value: Tile) -> Option<Tile> {
    if value == 0 {
        return None;
    }
    value.checked_mul(2).filter(|&merged| merged <= MAX_TILE)
}
