//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, controller, input mapping, rendering).
//!
//! # Board Dimensions
//!
//! The board is always square. Its side length is a single integer chosen at
//! construction:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Classic 4x4 board |
//! | `MIN_BOARD_SIZE` | 2 | Smallest board that can merge anything |
//! | `MAX_BOARD_SIZE` | 8 | Largest board that fits a line buffer and a terminal |
//!
//! # Spawning
//!
//! - `INITIAL_TILES`: 2 tiles are placed on a fresh board
//! - `FOUR_ODDS`: 1 spawn in 10 is a 4, the rest are 2s
//! - `MAX_TILE`: 2^30 is the largest tile; two of them do not merge
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Command, Direction, DEFAULT_BOARD_SIZE};
//!
//! let dir = Direction::from_str("LEFT").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(dir.is_horizontal());
//! assert!(!dir.is_reversed());
//!
//! assert_eq!(Command::from_str("restart"), Some(Command::Restart));
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! ```

/// A single cell value. Zero is empty, anything else is a power of two >= 2.
pub type Tile = u32;

/// Largest tile value. A pair of these never merges.
pub const MAX_TILE: Tile = 1 << 30;

/// Default board side length (4x4)
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest accepted board side length
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest accepted board side length
pub const MAX_BOARD_SIZE: usize = 8;

/// Tiles spawned on a fresh board before the first move
pub const INITIAL_TILES: usize = 2;

/// One spawn in `FOUR_ODDS` is a 4 (10% four, 90% two)
pub const FOUR_ODDS: u32 = 10;


/// The four slide directions
///
/// - **Left**/**Right**: every row is collapsed
/// - **Up**/**Down**: every column is collapsed
///
/// Right and down are the "far side" directions: their lines are read
/// reversed so a single collapse routine serves all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order used by `legal_moves`-style arrays.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for left/right (rows), false for up/down (columns)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True for the far-side directions whose lines are read back to front
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// One turn's worth of player input
///
/// Produced by the input layer from raw key events and consumed by the
/// game controller. `Unrecognized` is a real command: the controller answers
/// it with a hint instead of ignoring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Slide the board
    Move(Direction),
    /// Leave the game
    Quit,
    /// Throw the current board away and start over
    Restart,
    /// Any key without a binding
    Unrecognized,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// Direction names parse to [`Command::Move`]. Unknown names return
    /// `None`; mapping them to [`Command::Unrecognized`] is the caller's
    /// choice.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_str("down"), Some(Command::Move(Direction::Down)));
    /// assert_eq!(Command::from_str("QUIT"), Some(Command::Quit));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_str(s) {
            return Some(Command::Move(dir));
        }
        match s.to_lowercase().as_str() {
            "quit" => Some(Command::Quit),
            "restart" => Some(Command::Restart),
            "unrecognized" => Some(Command::Unrecognized),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(dir) => dir.as_str(),
            Command::Quit => "quit",
            Command::Restart => "restart",
            Command::Unrecognized => "unrecognized",
        }
    }
}
