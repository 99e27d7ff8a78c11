//! Grid module - the board, its score, and move resolution
//!
//! The board is an NxN square stored as a flat row-major array.
//! Coordinates are `(row, col)`, both counted from the top-left corner.
//!
//! A move never mutates the board line by line: every line is collapsed into
//! a scratch copy which is committed in one step, so a half-applied move is
//! never observable.

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::error::{check_size, is_valid_tile, GridError};
use crate::line::{collapse_line, merge_value, Collapsed, Line};
use crate::rng::TileSource;
use crate::types::{Direction, Tile, INITIAL_TILES, MAX_BOARD_SIZE};

/// Upper bound on the number of cells of any board.
const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Stack copy of a whole board, used to build the next position.
type Cells = ArrayVec<Tile, MAX_CELLS>;

/// Cell indices of one line, ordered towards the slide target.
type LineIndices = ArrayVec<usize, MAX_BOARD_SIZE>;

/// A tile placed by [`Grid::spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// The game board plus its running score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Row-major cells (row * size + col)
    cells: Vec<Tile>,
    score: u64,
}

impl Grid {
    /// Create a fresh board with two spawned tiles and a zero score.
    pub fn new<S: TileSource + ?Sized>(size: usize, source: &mut S) -> Result<Self, GridError> {
        check_size(size)?;
        Ok(Self::fresh(size, source))
    }

    /// Build from an already validated size.
    pub(crate) fn fresh<S: TileSource + ?Sized>(size: usize, source: &mut S) -> Self {
        let mut grid = Self {
            size,
            cells: vec![0; size * size],
            score: 0,
        };
        for _ in 0..INITIAL_TILES {
            grid.spawn(source);
        }
        grid
    }

    /// Create from hand-written rows without spawning anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[2, 0], [0, 4]], 0).unwrap();
    /// assert_eq!(grid.get(1, 1), Some(4));
    /// assert!(Grid::from_rows(&[[3, 0], [0, 0]], 0).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R], score: u64) -> Result<Self, GridError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    row,
                    len: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells, score })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of every merged tile so far.
    ///
    /// A move gains at most 32 * 2^30, so play alone never reaches
    /// `u64::MAX`; only a starting score passed to [`Grid::from_rows`] can,
    /// and the score then stays pinned there.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Copy the board into nested vectors (handy in tests and logs).
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Slide every line towards `direction`.
    ///
    /// Returns `true` if any line changed; in that case the merge score is
    /// added and exactly one tile is spawned. Returns `false` otherwise and
    /// leaves board and score untouched.
    pub fn slide<S: TileSource + ?Sized>(&mut self, direction: Direction, source: &mut S) -> bool {
        let Some((cells, gained)) = self.collapse_all(direction) else {
            debug!("slide {}: blocked", direction.as_str());
            return false;
        };

        self.cells.copy_from_slice(&cells);
        self.score = self.score.saturating_add(gained);
        debug!(
            "slide {}: +{} (score {})",
            direction.as_str(),
            gained,
            self.score
        );

        self.spawn(source);
        true
    }

    /// Whether sliding towards `direction` would change the board.
    ///
    /// Pure preview: nothing is mutated and nothing is spawned.
    pub fn can_slide(&self, direction: Direction) -> bool {
        (0..self.size).any(|i| self.collapse_at(direction, i).1.changed)
    }

    /// [`Grid::can_slide`] for every direction, in [`Direction::ALL`] order.
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|dir| self.can_slide(dir))
    }

    /// Whether any direction can still change the board.
    ///
    /// True if a cell is empty or two orthogonal neighbours can merge.
    pub fn has_moves(&self) -> bool {
        if self.cells.contains(&0) {
            return true;
        }

        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let value = self.cells[row * n + col];
                if merge_value(value).is_none() {
                    continue;
                }
                if col + 1 < n && self.cells[row * n + col + 1] == value {
                    return true;
                }
                if row + 1 < n && self.cells[(row + 1) * n + col] == value {
                    return true;
                }
            }
        }
        false
    }

    /// Place one 2 or 4 on a random empty cell.
    ///
    /// Does nothing and returns `None` when the board is full.
    pub fn spawn<S: TileSource + ?Sized>(&mut self, source: &mut S) -> Option<Spawned> {
        let empties: ArrayVec<usize, MAX_CELLS> = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(idx, _)| idx)
            .collect();

        if empties.is_empty() {
            trace!("spawn skipped: board full");
            return None;
        }

        let idx = empties[source.choose_cell(empties.len()) % empties.len()];
        let value = source.choose_tile().value();
        self.cells[idx] = value;

        let spawned = Spawned {
            row: idx / self.size,
            col: idx % self.size,
            value,
        };
        trace!("spawned {} at ({}, {})", value, spawned.row, spawned.col);
        Some(spawned)
    }

    /// Indices of line `i` for `direction`, ordered towards the slide target.
    fn line_indices(&self, direction: Direction, i: usize) -> LineIndices {
        let n = self.size;
        (0..n)
            .map(|k| {
                let pos = if direction.is_reversed() { n - 1 - k } else { k };
                if direction.is_horizontal() {
                    i * n + pos
                } else {
                    pos * n + i
                }
            })
            .collect()
    }

    fn collapse_at(&self, direction: Direction, i: usize) -> (LineIndices, Collapsed) {
        let indices = self.line_indices(direction, i);
        let line: Line = indices.iter().map(|&idx| self.cells[idx]).collect();
        (indices, collapse_line(&line))
    }

    /// New cells and gained score, or `None` if nothing would move.
    fn collapse_all(&self, direction: Direction) -> Option<(Cells, u64)> {
        let mut next: Cells = self.cells.iter().copied().collect();
        let mut gained = 0u64;
        let mut moved = false;

        for i in 0..self.size {
            let (indices, collapsed) = self.collapse_at(direction, i);
            if !collapsed.changed {
                continue;
            }
            moved = true;
            gained += collapsed.gained;
            for (&idx, &value) in indices.iter().zip(collapsed.tiles.iter()) {
                next[idx] = value;
            }
        }

        moved.then_some((next, gained))
    }
}
