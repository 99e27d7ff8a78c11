//! RNG module - where new tiles come from
//!
//! The grid never touches a global RNG. Every spawn asks a [`TileSource`]
//! for two decisions: which empty cell to fill, and whether the new tile is
//! a 2 or a 4.
//!
//! - [`RandSource`] wraps any `rand` generator (entropy-seeded for play,
//!   `u64`-seeded for reproducible games).
//! - [`ScriptedSource`] replays fixed decisions for tests and benches.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Tile, FOUR_ODDS};

/// Value of a freshly spawned tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnTile {
    Two,
    Four,
}

impl SpawnTile {
    pub fn value(&self) -> Tile {
        match self {
            SpawnTile::Two => 2,
            SpawnTile::Four => 4,
        }
    }
}

/// Randomness used when spawning tiles.
pub trait TileSource {
    /// Pick one of `empty` empty cells, uniformly in `0..empty`.
    ///
    /// Only called with `empty > 0`. Out-of-range answers are reduced
    /// modulo `empty` by the grid.
    fn choose_cell(&mut self, empty: usize) -> usize;

    /// Pick the new tile: [`SpawnTile::Four`] one time in [`FOUR_ODDS`].
    fn choose_tile(&mut self) -> SpawnTile;
}

/// [`TileSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandSource<R = StdRng> {
    rng: R,
}

impl RandSource<StdRng> {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic source: the same seed spawns the same tiles.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileSource for RandSource<R> {
    fn choose_cell(&mut self, empty: usize) -> usize {
        if empty == 0 {
            return 0;
        }
        self.rng.gen_range(0..empty)
    }

    fn choose_tile(&mut self) -> SpawnTile {
        if self.rng.gen_range(0..FOUR_ODDS) == 0 {
            SpawnTile::Four
        } else {
            SpawnTile::Two
        }
    }
}

/// [`TileSource`] that replays fixed decisions, cycling when exhausted.
///
/// An empty cell script always picks the first empty cell; an empty tile
/// script always spawns a 2.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    cells: Vec<usize>,
    tiles: Vec<SpawnTile>,
    cell_pos: usize,
    tile_pos: usize,
}

impl ScriptedSource {
    pub fn new(cells: Vec<usize>, tiles: Vec<SpawnTile>) -> Self {
        Self {
            cells,
            tiles,
            cell_pos: 0,
            tile_pos: 0,
        }
    }

    /// Always pick the same cell index and tile.
    pub fn always(cell: usize, tile: SpawnTile) -> Self {
        Self::new(vec![cell], vec![tile])
    }

    /// Number of cell picks served so far.
    pub fn cells_served(&self) -> usize {
        self.cell_pos
    }
}

impl TileSource for ScriptedSource {
    fn choose_cell(&mut self, _empty: usize) -> usize {
        let pick = if self.cells.is_empty() {
            0
        } else {
            self.cells[self.cell_pos % self.cells.len()]
        };
        self.cell_pos += 1;
        pick
    }

    fn choose_tile(&mut self) -> SpawnTile {
        let pick = if self.tiles.is_empty() {
            SpawnTile::Two
        } else {
            self.tiles[self.tile_pos % self.tiles.len()]
        };
        self.tile_pos += 1;
        pick
    }
}
