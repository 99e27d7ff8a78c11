//! Terminal input module.
//!
//! Pure translation from `crossterm` key events into one
//! [`Command`](crate::types::Command) per key press. Holds no state and
//! knows nothing about the game rules.

pub mod map;

pub use tui_2048_types as types;

pub use map::{is_press, map_key};
