//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the merge engine, tile spawning, and
//! the turn controller. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: spawns come from an injected [`TileSource`]
//! - **Testable**: hand-built boards and scripted sources reproduce any game
//! - **Portable**: runs in a terminal, a GUI, or headless
//!
//! # Module Structure
//!
//! - [`line`]: the collapse rule applied to one row or column
//! - [`grid`]: NxN board, score, slides, terminal detection, spawning
//! - [`rng`]: tile sources (rand-backed and scripted)
//! - [`controller`]: commands, notices, restart, game-over handling
//! - [`snapshot`]: read-only state handed to renderers
//!
//! # Game Rules
//!
//! - **Collapse**: tiles slide towards the chosen side; equal neighbours merge
//!   once per move, and the merged value is added to the score; the
//!   largest tile (2^30) never merges
//! - **Spawn**: every move that changes the board adds one tile, a 2 nine
//!   times in ten and a 4 otherwise, on a uniformly chosen empty cell
//! - **Game over**: no empty cell and no equal orthogonal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Controller, Flow, Phase, ScriptedSource};
//! use tui_2048_types::{Command, Direction};
//!
//! let mut game = Controller::new(4, ScriptedSource::default()).unwrap();
//! assert_eq!(game.grid().empty_count(), 14);
//!
//! let flow = game.handle_input(Command::Move(Direction::Down));
//! assert_eq!(flow, Flow::Continue);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! assert_eq!(game.handle_input(Command::Quit), Flow::Quit);
//! ```

pub mod controller;
pub mod error;
pub mod grid;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use controller::{Controller, Flow, Notice, Phase};
pub use error::GridError;
pub use grid::{Grid, Spawned};
pub use line::{collapse_line, merge_value, Collapsed, Line};
pub use rng::{RandSource, ScriptedSource, SpawnTile, TileSource};
pub use snapshot::GameSnapshot;
