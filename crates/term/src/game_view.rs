//! GameView: draws a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O). Board dimensions come from the snapshot, so any configured
//! board size renders.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{FrameBuffer, Style};
use crate::types::{Rgb, ShapeId};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Side panel is skipped when narrower than this
const MIN_PANEL_WIDTH: u16 = 12;

/// Renders the board, the side panel and the game-over overlay
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
    /// Terminal rows per board cell
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Terminal size of the bordered board
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.width.saturating_mul(self.cell_w).saturating_add(2),
            snap.height.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(
            fb,
            origin_x,
            origin_y,
            frame_w,
            frame_h,
            Style::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        let empty = Style::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        for row in 0..snap.height {
            for col in 0..snap.width {
                let (ch, style) = match snap.cell(col, row) {
                    Some(color) => ('█', Style::new(color, PLAYFIELD_BG).bold()),
                    None => ('·', empty),
                };
                fb.fill_rect(
                    cell_origin(origin_x.saturating_add(1), col, self.cell_w),
                    cell_origin(origin_y.saturating_add(1), row, self.cell_h),
                    self.cell_w,
                    self.cell_h,
                    ch,
                    style,
                );
            }
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) >= MIN_PANEL_WIDTH {
            self.draw_side_panel(fb, snap, panel_x, origin_y);
        }

        if snap.game_over {
            let text = "GAME OVER";
            let x = origin_x.saturating_add(frame_w.saturating_sub(text.len() as u16) / 2);
            let y = origin_y.saturating_add(frame_h / 2);
            fb.put_str(x, y, text, Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("SPEED ms", snap.fall_interval_ms),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(x, y, "NEXT", label);
        self.draw_preview(fb, snap.next.shape, snap.next.rotation, x, y.saturating_add(1));
        y = y.saturating_add(self.cell_h.saturating_mul(4)).saturating_add(2);

        let hint = value.dim();
        fb.put_str(x, y, "r restart", hint);
        fb.put_str(x, y.saturating_add(1), "q quit", hint);
    }

    /// Draw a piece in a 4x4-cell box; offsets span columns -2..=1, rows -4..=-1
    fn draw_preview(&self, fb: &mut FrameBuffer, shape: ShapeId, rotation: u8, x: u16, y: u16) {
        let style = Style::new(shape.color(), PANEL_BG).bold();
        for (dx, dy) in get_shape(shape, rotation) {
            let col = (dx + 2).clamp(0, 3) as u16;
            let row = (dy + 4).clamp(0, 3) as u16;
            fb.fill_rect(
                cell_origin(x, col, self.cell_w),
                cell_origin(y, row, self.cell_h),
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }
}

/// Terminal coordinate of cell `index` when cells are `size` wide, clamped at the edge
fn cell_origin(base: u16, index: u16, size: u16) -> u16 {
    base.saturating_add(index.saturating_mul(size))
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x.saturating_add(1)..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y.saturating_add(1)..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}
