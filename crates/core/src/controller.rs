//! Controller module - turn handling on top of a [`Grid`]
//!
//! The controller owns the active grid, the tile source, and the notice
//! shown to the player. It holds no loop: the caller feeds one [`Command`]
//! per turn and renders a [`GameSnapshot`] afterwards.
//!
//! Two phases exist. `Playing` lasts while the grid has moves; `Terminal`
//! is entered lazily, when a command finds the grid stuck. Only a restart
//! leads back to `Playing`.

use log::{debug, info};

use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::{RandSource, TileSource};
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Direction};

/// Whether the session can still progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Terminal,
}

/// Message surfaced to the player after a turn.
///
/// The text returned by [`Notice::as_str`] is a default; renderers may
/// present or translate it however they like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notice {
    /// Nothing to say
    #[default]
    None,
    /// The last slide did not change the board
    Blocked,
    /// A key without a binding was pressed
    UseArrows,
    /// No direction can change the board
    GameOver,
}

impl Notice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Notice::None => "",
            Notice::Blocked => "Can't move that way, try another direction.",
            Notice::UseArrows => "Use the arrow keys to play, q to quit.",
            Notice::GameOver => "Game over! Press r to restart or q to quit.",
        }
    }
}

/// What the caller's loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Continue,
    Quit,
}

/// One game session plus the tile source that feeds it.
#[derive(Debug, Clone)]
pub struct Controller<S = RandSource> {
    current: Grid,
    notice: Notice,
    source: S,
    /// Incremented on every restart.
    episode: u32,
}

impl<S: TileSource> Controller<S> {
    /// Start a session on a fresh `size` x `size` board.
    pub fn new(size: usize, mut source: S) -> Result<Self, GridError> {
        let current = Grid::new(size, &mut source)?;
        Ok(Self::with_grid(current, source))
    }

    /// Start a session from an existing grid (e.g. a hand-built position).
    pub fn with_grid(grid: Grid, source: S) -> Self {
        Self {
            current: grid,
            notice: Notice::None,
            source,
            episode: 0,
        }
    }

    /// Process one command.
    ///
    /// Total over every [`Command`]: nothing here fails, and the session is
    /// valid afterwards whatever the input was.
    pub fn handle_input(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::Restart => self.restart(),
            Command::Move(direction) => self.apply_move(direction),
            Command::Unrecognized => {
                self.notice = if self.is_terminal() {
                    Notice::GameOver
                } else {
                    Notice::UseArrows
                };
            }
        }
        Flow::Continue
    }

    /// Replace the grid with a fresh one of the same size.
    pub fn restart(&mut self) {
        self.current = Grid::fresh(self.current.size(), &mut self.source);
        self.notice = Notice::None;
        self.episode = self.episode.wrapping_add(1);
        info!(
            "restart: episode {} on a {}x{} board",
            self.episode,
            self.current.size(),
            self.current.size()
        );
    }

    fn apply_move(&mut self, direction: Direction) {
        if self.is_terminal() {
            debug!("game over: ignoring {}", direction.as_str());
            self.notice = Notice::GameOver;
            return;
        }

        self.notice = if self.current.slide(direction, &mut self.source) {
            Notice::None
        } else {
            Notice::Blocked
        };
    }

    pub fn phase(&self) -> Phase {
        if self.current.has_moves() {
            Phase::Playing
        } else {
            Phase::Terminal
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase() == Phase::Terminal
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn score(&self) -> u64 {
        self.current.score()
    }

    pub fn notice(&self) -> Notice {
        self.notice
    }

    pub fn message(&self) -> &'static str {
        self.notice.as_str()
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Fill `out` with the current state, reusing its board buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.current.size();
        out.board.clear();
        out.board.extend_from_slice(self.current.cells());
        out.score = self.current.score();
        out.terminal = self.is_terminal();
        out.notice = self.notice;
        out.episode = self.episode;
        out.max_tile = self.current.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedSource, SpawnTile};

    fn stuck_grid() -> Grid {
        Grid::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 100).unwrap()
    }

    #[test]
    fn test_new_controller() {
        let ctl = Controller::new(4, ScriptedSource::default()).unwrap();
        assert_eq!(ctl.phase(), Phase::Playing);
        assert_eq!(ctl.notice(), Notice::None);
        assert_eq!(ctl.message(), "");
        assert_eq!(ctl.score(), 0);
        assert_eq!(ctl.episode(), 0);
        assert_eq!(ctl.grid().empty_count(), 14);
    }

    #[test]
    fn test_new_controller_rejects_bad_size() {
        let err = Controller::new(1, ScriptedSource::default()).unwrap_err();
        assert_eq!(err, GridError::InvalidSize { size: 1 });
    }

    #[test]
    fn test_quit_is_the_only_stop() {
        let mut ctl = Controller::new(4, ScriptedSource::default()).unwrap();
        assert_eq!(ctl.handle_input(Command::Quit), Flow::Quit);
        assert_eq!(ctl.handle_input(Command::Unrecognized), Flow::Continue);
        assert_eq!(ctl.handle_input(Command::Restart), Flow::Continue);
        assert_eq!(
            ctl.handle_input(Command::Move(Direction::Left)),
            Flow::Continue
        );
    }

    #[test]
    fn test_blocked_then_successful_move() {
        let grid = Grid::from_rows(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 0).unwrap();
        let mut ctl = Controller::with_grid(grid, ScriptedSource::always(0, SpawnTile::Two));

        ctl.handle_input(Command::Move(Direction::Left));
        assert_eq!(ctl.notice(), Notice::Blocked);
        assert_eq!(ctl.grid().empty_count(), 15);

        ctl.handle_input(Command::Move(Direction::Right));
        assert_eq!(ctl.notice(), Notice::None);
        assert_eq!(ctl.grid().empty_count(), 14);
    }

    #[test]
    fn test_unrecognized_sets_hint_only() {
        let mut ctl = Controller::new(4, ScriptedSource::default()).unwrap();
        let before = ctl.grid().clone();

        ctl.handle_input(Command::Unrecognized);
        assert_eq!(ctl.notice(), Notice::UseArrows);
        assert_eq!(ctl.grid(), &before);
    }

    #[test]
    fn test_terminal_ignores_moves() {
        let mut ctl = Controller::with_grid(stuck_grid(), ScriptedSource::default());
        assert_eq!(ctl.phase(), Phase::Terminal);

        for dir in Direction::ALL {
            ctl.handle_input(Command::Move(dir));
            assert_eq!(ctl.notice(), Notice::GameOver);
            assert_eq!(ctl.grid(), &stuck_grid());
        }

        ctl.handle_input(Command::Unrecognized);
        assert_eq!(ctl.notice(), Notice::GameOver);
    }

    #[test]
    fn test_restart_from_terminal() {
        let mut ctl = Controller::with_grid(stuck_grid(), ScriptedSource::default());
        ctl.handle_input(Command::Move(Direction::Up));

        ctl.handle_input(Command::Restart);
        assert_eq!(ctl.phase(), Phase::Playing);
        assert_eq!(ctl.notice(), Notice::None);
        assert_eq!(ctl.score(), 0);
        assert_eq!(ctl.episode(), 1);
        assert_eq!(ctl.grid().size(), 4);
        assert_eq!(ctl.grid().empty_count(), 14);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut ctl = Controller::with_grid(stuck_grid(), ScriptedSource::default());
        ctl.handle_input(Command::Move(Direction::Left));

        let snap = ctl.snapshot();
        assert_eq!(snap.size, 4);
        assert_eq!(snap.board, stuck_grid().cells());
        assert_eq!(snap.score, 100);
        assert!(snap.terminal);
        assert_eq!(snap.notice, Notice::GameOver);
        assert_eq!(snap.max_tile, 4);

        // Reusing a snapshot buffer overwrites every field.
        let mut reused = snap.clone();
        ctl.handle_input(Command::Restart);
        ctl.snapshot_into(&mut reused);
        assert!(!reused.terminal);
        assert_eq!(reused.score, 0);
        assert_eq!(reused.episode, 1);
        assert_eq!(reused.board.len(), 16);
    }
}
