//! GameView: maps a [`Board`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Board;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BOARD_SIZE;

/// Hint printed under the board in the TUI front end.
pub const KEY_HINT: &str = "wasd/arrows: move  q: quit";

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

/// A lightweight terminal view of the 4x4 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for a centred 5-digit tile with padding.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let side = BOARD_SIZE as u16;
        (side * self.cell_w + 2, side * self.cell_h + 2)
    }

    /// Render the board into a new framebuffer.
    pub fn render(&self, board: &Board, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, viewport, &mut fb);
        fb
    }

    /// Render the board into `fb`, resizing it to the viewport.
    pub fn render_into(&self, board: &Board, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        // One extra row below the frame for the key hint.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = board.get(row, col).unwrap_or(0);
                self.draw_tile(fb, start_x + 1, start_y + 1, row as u16, col as u16, value);
            }
        }

        let hint_x = viewport.width.saturating_sub(KEY_HINT.len() as u16) / 2;
        fb.put_str(hint_x, start_y + frame_h, KEY_HINT, CellStyle::default().dim());
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, row: u16, col: u16, value: u32) {
        let x = origin_x + col * self.cell_w;
        let y = origin_y + row * self.cell_h;
        let style = tile_style(value);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        let label = if value == 0 { "·".to_string() } else { value.to_string() };
        let label_w = label.chars().count() as u16;
        let label_x = x + self.cell_w.saturating_sub(label_w) / 2;
        fb.put_str(label_x, y + self.cell_h / 2, &label, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.set(x, y, style.into_cell('┌'));
        fb.set(right, y, style.into_cell('┐'));
        fb.set(x, bottom, style.into_cell('└'));
        fb.set(right, bottom, style.into_cell('┘'));

        fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
        fb.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
        fb.fill_rect(right, y + 1, 1, h - 2, '│', style);
    }
}

/// Colors by tile magnitude; everything past 2048 shares the last entry.
fn tile_style(value: u32) -> CellStyle {
    const PALETTE: [(Rgb, Rgb); 11] = [
        (Rgb::new(119, 110, 101), Rgb::new(238, 228, 218)), // 2
        (Rgb::new(119, 110, 101), Rgb::new(237, 224, 200)), // 4
        (Rgb::new(249, 246, 242), Rgb::new(242, 177, 121)), // 8
        (Rgb::new(249, 246, 242), Rgb::new(245, 149, 99)),  // 16
        (Rgb::new(249, 246, 242), Rgb::new(246, 124, 95)),  // 32
        (Rgb::new(249, 246, 242), Rgb::new(246, 94, 59)),   // 64
        (Rgb::new(249, 246, 242), Rgb::new(237, 207, 114)), // 128
        (Rgb::new(249, 246, 242), Rgb::new(237, 204, 97)),  // 256
        (Rgb::new(249, 246, 242), Rgb::new(237, 200, 80)),  // 512
        (Rgb::new(249, 246, 242), Rgb::new(237, 197, 63)),  // 1024
        (Rgb::new(249, 246, 242), Rgb::new(60, 58, 50)),    // 2048+
    ];

    if value == 0 {
        return CellStyle::new(Rgb::new(90, 90, 100), Rgb::new(30, 30, 40)).dim();
    }
    let rank = value.trailing_zeros().max(1) as usize - 1;
    let (fg, bg) = PALETTE[rank.min(PALETTE.len() - 1)];
    CellStyle::new(fg, bg).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_matches_cell_dimensions() {
        assert_eq!(GameView::default().frame_size(), (30, 14));
        assert_eq!(GameView::new(5, 1).frame_size(), (22, 6));
    }

    #[test]
    fn tile_styles_step_with_magnitude() {
        assert_ne!(tile_style(2), tile_style(4));
        assert_eq!(tile_style(2048), tile_style(1 << 16));
        assert!(tile_style(0).dim);
        assert!(tile_style(8).bold);
    }
}
