//! Isometric projection onto a half-block pixel grid.
//!
//! Terminal cells are split into two vertical pixels via `▀` (foreground
//! colors the top pixel, background the bottom), doubling the vertical
//! resolution. On that grid a board tile projects to a 4x2-pixel diamond:
//! one column step moves (+2, +1) pixels, one row step moves (-2, +1), so
//! the well's bottom-left corner faces the camera.
//!
//! A block is the diamond lifted two pixels, with the shade color filling
//! the ground-level diamond underneath as the visible side skirt. Tiles are
//! painted back to front; nearer tiles overdraw.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Face and shade colors per cell value, indexed 0..=7 (0 unused).
pub const PALETTE: [(Rgb, Rgb); 8] = [
    (Rgb::new(0, 0, 0), Rgb::new(0, 0, 0)),
    (Rgb::new(255, 0, 0), Rgb::new(110, 0, 0)),
    (Rgb::new(0, 255, 0), Rgb::new(0, 110, 0)),
    (Rgb::new(0, 0, 255), Rgb::new(0, 0, 110)),
    (Rgb::new(255, 255, 0), Rgb::new(110, 110, 0)),
    (Rgb::new(0, 255, 255), Rgb::new(0, 110, 110)),
    (Rgb::new(255, 0, 255), Rgb::new(110, 0, 110)),
    (Rgb::new(55, 155, 255), Rgb::new(10, 50, 110)),
];

/// Face color of the well slab tiles.
pub const SLAB_FACE: Rgb = Rgb::new(128, 128, 128);

/// Shade color of the well slab tiles.
pub const SLAB_SHADE: Rgb = Rgb::new(64, 64, 64);

/// Pixel offsets covered by one tile diamond (4 wide, 2 tall).
const DIAMOND: [(i32, i32); 6] = [(1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (3, 1)];

/// How many pixels a block's top face is lifted above its ground diamond.
const BLOCK_LIFT: i32 = 2;

/// Sparse pixel layer blitted onto a framebuffer as half-block cells.
///
/// Unset pixels leave the underlying framebuffer cell untouched, so text
/// drawn before the blit survives outside the scene and text drawn after
/// it wins the cell.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Option<Rgb>>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![None; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and reset every pixel to unset.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.pixels.clear();
        self.pixels.resize(len, None);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= i32::from(self.width) || y < 0 || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Set a pixel; out-of-range writes are ignored so scene drawing needs
    /// no clipping of its own.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = Some(color);
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).and_then(|i| self.pixels[i])
    }

    /// Compose the pixel layer onto `fb` using `▀` half-blocks.
    ///
    /// Terminal cell (x, y) shows pixels (x, 2y) on top and (x, 2y+1)
    /// below. Cells where both pixels are unset are left as they are.
    pub fn blit(&self, fb: &mut FrameBuffer) {
        for cy in 0..fb.height() {
            for cx in 0..fb.width() {
                let top = self.get(i32::from(cx), i32::from(cy) * 2);
                let bottom = self.get(i32::from(cx), i32::from(cy) * 2 + 1);
                if top.is_none() && bottom.is_none() {
                    continue;
                }
                let style = CellStyle {
                    fg: top.unwrap_or_default(),
                    bg: bottom.unwrap_or_default(),
                    bold: false,
                };
                fb.set(cx, cy, Cell { ch: '▀', style });
            }
        }
    }
}

/// Pixel position of the ground diamond for tile (vx, vy), given the pixel
/// origin of tile (0, 0).
pub fn tile_px(origin: (i32, i32), vx: i32, vy: i32) -> (i32, i32) {
    (origin.0 + 2 * (vx - vy), origin.1 + vx + vy)
}

/// Fill one tile diamond at pixel position (px, py).
pub fn fill_diamond(canvas: &mut PixelCanvas, px: i32, py: i32, color: Rgb) {
    for (dx, dy) in DIAMOND {
        canvas.set(px + dx, py + dy, color);
    }
}

/// Draw a lifted block: shade skirt at ground level, face diamond on top.
pub fn draw_block(canvas: &mut PixelCanvas, px: i32, py: i32, face: Rgb, shade: Rgb) {
    fill_diamond(canvas, px, py, shade);
    fill_diamond(canvas, px, py - 1, shade);
    fill_diamond(canvas, px, py - BLOCK_LIFT, face);
}
