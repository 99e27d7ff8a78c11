//! Grid tests - merge rule, slides, spawning and terminal detection

use tui_2048::core::{
    collapse_line, Grid, GridError, RandSource, ScriptedSource, SpawnTile,
};
use tui_2048::types::{Direction, Tile, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MAX_TILE};

fn nonzero(grid: &Grid) -> usize {
    grid.cells().iter().filter(|&&v| v != 0).count()
}

fn total(grid: &Grid) -> u64 {
    grid.cells().iter().map(|&v| u64::from(v)).sum()
}

fn is_tile(v: Tile) -> bool {
    v == 0 || ((2..=MAX_TILE).contains(&v) && v.is_power_of_two())
}

#[test]
fn test_collapse_examples() {
    let out = collapse_line(&[2, 2, 2, 2]);
    assert_eq!(out.tiles.as_slice(), &[4, 4, 0, 0]);
    assert_eq!(out.gained, 8);

    let out = collapse_line(&[0, 2, 0, 2]);
    assert_eq!(out.tiles.as_slice(), &[4, 0, 0, 0]);
    assert_eq!(out.gained, 4);

    let out = collapse_line(&[2, 4, 2, 0]);
    assert_eq!(out.tiles.as_slice(), &[2, 4, 2, 0]);
    assert_eq!(out.gained, 0);
    assert!(!out.changed);
}

#[test]
fn test_collapse_single_merge_per_pass() {
    let out = collapse_line(&[2, 2, 2, 0]);
    assert_eq!(out.tiles.as_slice(), &[4, 2, 0, 0]);
    assert_eq!(out.gained, 4);
}

#[test]
fn test_new_grid_defaults() {
    let mut src = RandSource::seeded(1);
    let grid = Grid::new(DEFAULT_BOARD_SIZE, &mut src).unwrap();

    assert_eq!(grid.size(), 4);
    assert_eq!(grid.score(), 0);
    assert_eq!(nonzero(&grid), 2);
    assert!(grid.cells().iter().all(|&v| v == 0 || v == 2 || v == 4));
}

#[test]
fn test_new_grid_invalid_size() {
    let mut src = RandSource::seeded(1);
    assert_eq!(
        Grid::new(1, &mut src).unwrap_err(),
        GridError::InvalidSize { size: 1 }
    );
    assert!(Grid::new(0, &mut src).is_err());
    assert!(Grid::new(MAX_BOARD_SIZE + 1, &mut src).is_err());
}

#[test]
fn test_every_supported_size_builds() {
    let mut src = RandSource::seeded(9);
    for size in 2..=MAX_BOARD_SIZE {
        let grid = Grid::new(size, &mut src).unwrap();
        assert_eq!(grid.cells().len(), size * size);
        assert_eq!(nonzero(&grid), 2);
    }
}

#[test]
fn test_scenario_merge_left() {
    let mut grid = Grid::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0).unwrap();
    let mut src = RandSource::seeded(42);

    assert!(grid.slide(Direction::Left, &mut src));
    assert_eq!(grid.rows().next().unwrap()[0], 4);
    assert_eq!(grid.score(), 4);
    assert_eq!(nonzero(&grid), 2);

    let spawned: Vec<Tile> = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|&(idx, &v)| idx != 0 && v != 0)
        .map(|(_, &v)| v)
        .collect();
    assert_eq!(spawned.len(), 1);
    assert!(spawned[0] == 2 || spawned[0] == 4);
}

#[test]
fn test_scenario_merge_left_scripted() {
    let mut grid = Grid::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0).unwrap();
    let mut src = ScriptedSource::always(0, SpawnTile::Two);

    assert!(grid.slide(Direction::Left, &mut src));
    assert_eq!(
        grid.to_rows(),
        vec![vec![4, 2, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]]
    );
}

#[test]
fn test_right_and_down_slide_to_the_far_side() {
    let rows = [[2, 2, 4, 0], [0, 4, 4, 4], [8, 0, 8, 0], [2, 0, 0, 2]];

    // The scripted source drops every spawn on the first empty cell.
    let mut right = Grid::from_rows(&rows, 0).unwrap();
    assert!(right.slide(Direction::Right, &mut ScriptedSource::default()));
    assert_eq!(
        right.to_rows(),
        vec![
            vec![2, 0, 4, 4],
            vec![0, 0, 4, 8],
            vec![0, 0, 0, 16],
            vec![0, 0, 0, 4],
        ]
    );
    assert_eq!(right.score(), 4 + 8 + 16 + 4);

    let mut down = Grid::from_rows(&rows, 0).unwrap();
    assert!(down.slide(Direction::Down, &mut ScriptedSource::default()));
    assert_eq!(
        down.to_rows(),
        vec![
            vec![2, 0, 0, 0],
            vec![2, 0, 0, 0],
            vec![8, 2, 8, 4],
            vec![2, 4, 8, 2],
        ]
    );
    assert_eq!(down.score(), 8);
}

#[test]
fn test_blocked_move_is_conservative() {
    let mut grid = Grid::from_rows(&[[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]], 12).unwrap();
    let before = grid.clone();
    let mut src = ScriptedSource::default();

    assert!(!grid.slide(Direction::Up, &mut src));
    assert!(!grid.slide(Direction::Left, &mut src));
    assert!(!grid.slide(Direction::Right, &mut src));
    assert_eq!(grid, before);
    assert_eq!(grid.score(), 12);
    assert_eq!(src.cells_served(), 0);

    assert!(grid.slide(Direction::Down, &mut src));
    assert_ne!(grid, before);
}

#[test]
fn test_spawn_forced_two_and_four() {
    for (tile, value) in [(SpawnTile::Two, 2), (SpawnTile::Four, 4)] {
        let mut grid = Grid::from_rows(&[[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]], 0).unwrap();
        let mut src = ScriptedSource::always(2, tile);

        assert!(grid.slide(Direction::Left, &mut src));
        // Post-merge board is [[2,0,0,0],...]; the third empty cell is (0,3).
        assert_eq!(grid.to_rows()[0], vec![2, 0, 0, value]);
        assert_eq!(nonzero(&grid), 2);
        assert_eq!(total(&grid), 2 + u64::from(value));
    }
}

#[test]
fn test_spawn_skips_full_board() {
    let rows = [[2, 4], [4, 2]];
    let mut grid = Grid::from_rows(&rows, 0).unwrap();
    let mut src = ScriptedSource::default();
    assert_eq!(grid.spawn(&mut src), None);
    assert_eq!(grid.to_rows(), vec![vec![2, 4], vec![4, 2]]);
}

#[test]
fn test_terminal_board() {
    let stuck = Grid::from_rows(&[[2, 4, 2], [4, 2, 4], [2, 4, 2]], 0).unwrap();
    assert!(!stuck.has_moves());
    assert_eq!(stuck.legal_moves(), [false; 4]);

    let one_pair = Grid::from_rows(&[[2, 4, 2], [4, 2, 8], [2, 4, 4]], 0).unwrap();
    assert!(one_pair.has_moves());
    assert_eq!(one_pair.legal_moves(), [false, false, true, true]);
}

#[test]
fn test_seeded_games_replay_identically() {
    let play = |seed: u64| {
        let mut src = RandSource::seeded(seed);
        let mut grid = Grid::new(4, &mut src).unwrap();
        for i in 0..200 {
            grid.slide(Direction::ALL[i % 4], &mut src);
        }
        grid
    };
    assert_eq!(play(7), play(7));
}

#[test]
fn test_long_game_keeps_invariants() {
    let mut src = RandSource::seeded(2048);
    let mut grid = Grid::new(4, &mut src).unwrap();
    let mut last_score = 0;

    for i in 0..2_000 {
        let before = total(&grid);
        let moved = grid.slide(Direction::ALL[(i * 7 + i / 3) % 4], &mut src);
        let after = total(&grid);

        assert!(grid.cells().iter().all(|&v| is_tile(v)));
        assert!(grid.score() >= last_score);
        if moved {
            assert!(after == before + 2 || after == before + 4);
        } else {
            assert_eq!(after, before);
        }
        last_score = grid.score();

        if !grid.has_moves() {
            break;
        }
    }
}

#[test]
fn test_from_rows_rejects_tiles_above_the_cap() {
    let err = Grid::from_rows(&[[1 << 31, 1 << 31], [0, 0]], 0).unwrap_err();
    assert_eq!(
        err,
        GridError::InvalidTile {
            row: 0,
            col: 0,
            value: 1 << 31
        }
    );

    assert!(Grid::from_rows(&[[MAX_TILE, 0], [0, 0]], 0).is_ok());
}

#[test]
fn test_merging_up_to_the_cap() {
    let half = MAX_TILE / 2;
    let mut grid = Grid::from_rows(&[[half, half], [0, 0]], 0).unwrap();
    let mut source = ScriptedSource::always(0, SpawnTile::Two);

    assert!(grid.slide(Direction::Left, &mut source));
    assert_eq!(grid.to_rows(), vec![vec![MAX_TILE, 2], vec![0, 0]]);
    assert_eq!(grid.score(), u64::from(MAX_TILE));
}

#[test]
fn test_largest_tiles_do_not_merge() {
    let mut source = ScriptedSource::always(0, SpawnTile::Two);

    // Equal neighbours at the cap are not a move.
    let mut row = Grid::from_rows(&[[MAX_TILE, MAX_TILE], [0, 0]], 7).unwrap();
    assert!(!row.slide(Direction::Left, &mut source));
    assert!(!row.slide(Direction::Right, &mut source));
    assert_eq!(row.to_rows(), vec![vec![MAX_TILE, MAX_TILE], vec![0, 0]]);
    assert_eq!(row.score(), 7);

    let mut full = Grid::from_rows(&[[MAX_TILE, MAX_TILE], [MAX_TILE, MAX_TILE]], 0).unwrap();
    assert!(!full.has_moves());
    assert_eq!(full.legal_moves(), [false; 4]);
    for dir in Direction::ALL {
        assert!(!full.slide(dir, &mut source));
    }
    assert_eq!(total(&full), 4 * u64::from(MAX_TILE));
}

#[test]
fn test_score_counts_past_u32() {
    let start = u64::from(u32::MAX);
    let mut grid = Grid::from_rows(&[[2, 2], [0, 0]], start).unwrap();

    assert!(grid.slide(Direction::Left, &mut ScriptedSource::default()));
    assert_eq!(grid.score(), start + 4);
}
