//! Terminal 2048 runner (default binary).
//!
//! Turn-based loop: draw, block on one key, hand the resulting command to
//! the controller, repeat. Nothing is redrawn between keys except on resize.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use env_logger::{Env, Target};
use log::info;

use tui_2048::core::{Controller, Flow, GameSnapshot, RandSource};
use tui_2048::input::{is_press, map_key};
use tui_2048::term::{BoardView, FrameBuffer, Screen, Viewport};
use tui_2048::types::DEFAULT_BOARD_SIZE;

#[derive(Debug, Parser)]
#[command(name = "tui-2048", version, about = "Slide and merge tiles in the terminal")]
struct Args {
    /// Board side length (2..=8)
    #[arg(long, env = "TUI_2048_SIZE", default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Seed for a reproducible game
    #[arg(long, env = "TUI_2048_SEED")]
    seed: Option<u64>,

    /// Append logs to this file (the terminal is busy drawing the game)
    #[arg(long, env = "TUI_2048_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .init();
    }

    let source = match args.seed {
        Some(seed) => RandSource::seeded(seed),
        None => RandSource::from_entropy(),
    };
    let mut game = Controller::new(args.size, source)?;
    info!("new game: {}x{} board, seed {:?}", args.size, args.size, args.seed);

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, &mut game);

    // Always try to restore terminal state.
    let _ = screen.leave();
    if result.is_ok() {
        info!("quit with score {}", game.score());
    }
    result
}

fn run(screen: &mut Screen, game: &mut Controller) -> Result<()> {
    let view = BoardView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        screen.present(&fb)?;

        match event::read()? {
            Event::Key(key) if is_press(&key) => {
                if game.handle_input(map_key(key)) == Flow::Quit {
                    return Ok(());
                }
            }
            Event::Resize(_, _) => screen.invalidate(),
            _ => {}
        }
    }
}
