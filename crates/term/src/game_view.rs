//! GameView: projects `core::GameEngine` state into a terminal framebuffer.
//!
//! Pure with respect to the engine (read-only queries) and free of I/O, so
//! it can be unit-tested against an in-memory framebuffer.
//!
//! The well is mirrored so its bottom-left corner faces the viewer, a gray
//! slab with a one-tile rim sits under the play area, and settled plus
//! falling blocks come out of the same `cell_value` grid query.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::iso::{
    draw_block, tile_px, PixelCanvas, PALETTE, SLAB_FACE, SLAB_SHADE,
};
use isotris_core::GameEngine;
use isotris_types::{Phase, BOARD_WIDTH, HIDDEN_ROWS, PREVIEW_BOX, VISIBLE_ROWS};

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

/// Pixel position of the preview swatch box (top-left).
const PREVIEW_PX: (i32, i32) = (4, 8);

/// Side of one preview swatch in pixels.
const SWATCH_PX: i32 = 2;

/// Renders the isometric scene and HUD for one engine.
pub struct GameView {
    /// Scratch pixel layer reused across frames.
    canvas: PixelCanvas,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            canvas: PixelCanvas::new(0, 0),
        }
    }
}

impl GameView {
    /// Render the engine state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&mut self, engine: &GameEngine, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        self.canvas.reset(viewport.width, viewport.height * 2);
        let origin = scene_origin(viewport);
        self.draw_slab(origin);
        self.draw_blocks(engine, origin);
        self.draw_preview_box(engine);
        self.canvas.blit(fb);

        draw_hud_text(fb, engine, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, engine: &GameEngine, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(engine, viewport, &mut fb);
        fb
    }

    /// Gray well floor under the play area plus a one-tile rim on the left
    /// and the front. Painted first; blocks overdraw it.
    fn draw_slab(&mut self, origin: (i32, i32)) {
        for vy in 1..=i32::from(VISIBLE_ROWS) {
            for vx in -1..i32::from(BOARD_WIDTH) - 1 {
                let (px, py) = tile_px(origin, vx, vy);
                draw_block(&mut self.canvas, px, py, SLAB_FACE, SLAB_SHADE);
            }
        }
    }

    /// Settled and falling blocks for the visible window, rows back to
    /// front and columns left to right so nearer tiles overdraw.
    fn draw_blocks(&mut self, engine: &GameEngine, origin: (i32, i32)) {
        for vy in 0..i32::from(VISIBLE_ROWS) {
            for vx in 0..i32::from(BOARD_WIDTH) {
                // Mirrored columns; rows offset past the hidden headroom.
                let col = i32::from(BOARD_WIDTH) - 1 - vx;
                let row = i32::from(HIDDEN_ROWS) + vy;
                let value = engine.cell_value(col, row);
                if value == 0 {
                    continue;
                }
                let (face, shade) = PALETTE[value as usize];
                let (px, py) = tile_px(origin, vx, vy);
                draw_block(&mut self.canvas, px, py, face, shade);
            }
        }
    }

    /// 4x4 next-piece box as flat swatches: gray when empty, the piece's
    /// face color otherwise.
    fn draw_preview_box(&mut self, engine: &GameEngine) {
        for row in 0..i32::from(PREVIEW_BOX) {
            for col in 0..i32::from(PREVIEW_BOX) {
                let value = engine.next_piece_cell_value(col, row);
                let color = if value == 0 {
                    SLAB_FACE
                } else {
                    PALETTE[value as usize].0
                };
                fill_swatch(&mut self.canvas, col, row, color);
            }
        }
    }
}

/// Pixel origin of tile (0, 0), placing the scene's bounding box in the
/// middle of the viewport's pixel grid.
fn scene_origin(viewport: Viewport) -> (i32, i32) {
    let mid_x = i32::from(viewport.width) / 2;
    let mid_y = i32::from(viewport.height);
    (mid_x + 10, mid_y - 13)
}

fn fill_swatch(canvas: &mut PixelCanvas, col: i32, row: i32, color: Rgb) {
    let x0 = PREVIEW_PX.0 + col * SWATCH_PX;
    let y0 = PREVIEW_PX.1 + row * SWATCH_PX;
    for dy in 0..SWATCH_PX {
        for dx in 0..SWATCH_PX {
            canvas.set(x0 + dx, y0 + dy, color);
        }
    }
}

fn draw_hud_text(fb: &mut FrameBuffer, engine: &GameEngine, viewport: Viewport) {
    let label = CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: Rgb::new(0, 0, 0),
        bold: true,
    };
    let value = CellStyle {
        bold: false,
        ..label
    };

    fb.put_str(2, 1, "SCORE:", label);
    fb.put_u32(9, 1, engine.score(), value);
    fb.put_str(2, 3, "NEXT:", label);

    let banner = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
    };
    let mid_y = viewport.height / 2;
    match engine.phase() {
        Phase::GameOver => {
            put_centered(fb, mid_y.saturating_sub(1), "GAME OVER", banner);
            put_centered(fb, mid_y + 1, "PRESS SPACE TO PLAY", banner);
        }
        Phase::Ready => {
            put_centered(fb, mid_y, "PRESS SPACE TO PLAY", banner);
        }
        Phase::Playing => {}
    }
}

fn put_centered(fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = fb.width().saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}
