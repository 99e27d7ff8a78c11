//! BoardView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a header row (title and score), a blank row, the
//! boxed grid, a blank row, the notice, and a key hint. Everything is
//! centered in the viewport.

use crate::core::{GameSnapshot, Notice};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HINT: &str = "arrows/wasd move  r restart  q quit";
const TOO_SMALL: &str = "Terminal too small";

/// Rows above the grid frame (header + gap).
const HEADER_ROWS: u16 = 2;
/// Rows below the grid frame (gap + notice + hint).
const FOOTER_ROWS: u16 = 3;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_BG: Rgb = Rgb::new(187, 173, 160);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Renderer for the 2048 board.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 7x3 fits a 7-digit tile and roughly squares up on common fonts.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Width and height of the boxed grid for a board of side `size`.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let n = u16::try_from(size).unwrap_or(u16::MAX);
        let w = n.saturating_mul(self.cell_w + 1).saturating_add(1);
        let h = n.saturating_mul(self.cell_h + 1).saturating_add(1);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap.size);
        if viewport.width < frame_w || viewport.height < frame_h.saturating_add(HEADER_ROWS) {
            self.draw_too_small(fb, viewport, frame_w, frame_h.saturating_add(HEADER_ROWS));
            return;
        }

        let layout_h = frame_h + HEADER_ROWS + FOOTER_ROWS;
        let start_x = (viewport.width - frame_w) / 2;
        let start_y = viewport.height.saturating_sub(layout_h) / 2;
        let grid_y = start_y + HEADER_ROWS;

        self.draw_header(fb, snap, start_x, start_y, frame_w);
        self.draw_grid(fb, snap, start_x, grid_y, frame_w, frame_h);

        if snap.terminal {
            self.draw_overlay_text(fb, start_x, grid_y, frame_w, frame_h, " GAME OVER ");
        }

        let text = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG);
        let notice_y = grid_y + frame_h + 1;
        let message = match (snap.notice, snap.terminal) {
            (Notice::None, true) => Notice::GameOver.as_str(),
            (notice, _) => notice.as_str(),
        };
        fb.put_centered(0, notice_y, viewport.width, message, text.bold());

        let hint = CellStyle::new(Rgb::new(140, 140, 140), SCREEN_BG);
        fb.put_centered(0, notice_y + 1, viewport.width, HINT, hint);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16, w: u16) {
        let title = CellStyle::new(Rgb::new(237, 194, 46), SCREEN_BG).bold();
        fb.put_str(x, y, "2048", title);

        let score = format!("SCORE {}", snap.score);
        let len = u16::try_from(score.len()).unwrap_or(w);
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        fb.put_str(x + w.saturating_sub(len), y, &score, label);
    }

    fn draw_grid(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        x: u16,
        y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let grid = CellStyle::new(DARK_TEXT, GRID_BG);
        fb.fill_rect(x, y, frame_w, frame_h, ' ', grid);
        self.draw_border(fb, x, y, frame_w, frame_h, grid);

        for row in 0..snap.size {
            for (col, &value) in snap.row(row).iter().enumerate() {
                self.draw_tile(fb, x, y, row as u16, col as u16, value);
            }
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, row: u16, col: u16, value: Tile) {
        let px = x + 1 + col * (self.cell_w + 1);
        let py = y + 1 + row * (self.cell_h + 1);
        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        if value != 0 {
            let label = value.to_string();
            fb.put_centered(px, py + self.cell_h / 2, self.cell_w, &label, style.bold());
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle::new(LIGHT_TEXT, Rgb::new(0, 0, 0)).bold();
        fb.put_centered(x, y + frame_h / 2, frame_w, text, style);
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport, need_w: u16, need_h: u16) {
        let style = CellStyle::new(Rgb::new(255, 200, 80), SCREEN_BG).bold();
        let mid = viewport.height / 2;
        fb.put_centered(0, mid.saturating_sub(1), viewport.width, TOO_SMALL, style);

        let need = format!("need {}x{}", need_w, need_h);
        fb.put_centered(0, mid, viewport.width, &need, CellStyle::default());
    }
}

/// Classic 2048 palette, keyed by tile value.
fn tile_style(value: Tile) -> CellStyle {
    let (bg, fg) = match value {
        0 => (Rgb::new(205, 193, 180), DARK_TEXT),
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg)
}
