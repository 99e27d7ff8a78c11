use crate::controller::Notice;
use crate::types::Tile;

/// Read-only view of a session, produced after every turn for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major cells (row * size + col)
    pub board: Vec<Tile>,
    pub score: u64,
    pub terminal: bool,
    pub notice: Notice,
    pub episode: u32,
    pub max_tile: Tile,
}

impl GameSnapshot {
    /// Cells of row `y`. Empty if `y` is out of range or `board` is
    /// shorter than `size` says.
    pub fn row(&self, y: usize) -> &[Tile] {
        if y >= self.size {
            return &[];
        }
        self.board
            .get(y * self.size..(y + 1) * self.size)
            .unwrap_or(&[])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.row(row).get(col).copied()
    }

    pub fn message(&self) -> &'static str {
        self.notice.as_str()
    }

    pub fn playable(&self) -> bool {
        !self.terminal
    }
}
