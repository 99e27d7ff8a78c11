//! Terminal rendering module.
//!
//! Draws a [`GameSnapshot`](crate::core::GameSnapshot) into a framebuffer of
//! styled cells and flushes it to the terminal. Pure presentation: nothing
//! here feeds back into the game.
//!
//! - [`fb`]: framebuffer and styles
//! - [`board_view`]: snapshot to framebuffer (pure, testable)
//! - [`screen`]: raw mode, alternate screen, full and diff flushing

pub mod board_view;
pub mod fb;
pub mod screen;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use screen::{encode_diff_into, encode_full_into, Screen};
