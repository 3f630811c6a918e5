// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window showing the 280x280 drawing surface.
// 2) Filled 10x10 squares for every marked grid cell.
// 3) A crosshair that follows your mouse.
// 4) A tiny 5x7 bitmap font for the HUD (hints, cell count, save status).

use crate::error::Error;
use crate::grid::{CELL_SIZE, GridState};
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the drawing surface.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates, unclamped.
    /// Pass mode keeps reporting while a drag leaves the window, so the
    /// coordinates can go negative or past 279; the grid decides what to
    /// do with those, not the window layer.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| (x.floor() as i32, y.floor() as i32))
    }

    /// Visual: while true, cells fill in under the cursor (you see the digit appear).
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Visual: when pressed, the current drawing is written to disk.
    pub fn save_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software drawing: pixels, rectangles, crosshair, tiny font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill an axis-aligned rectangle, clipped to the framebuffer.
/// Visual: a solid block of color appears with its top-left corner at (x,y).
fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for ry in y..y + h {
        for rx in x..x + w {
            put_pixel(fb, rx, ry, color);
        }
    }
}

/// Paint every marked grid cell as a filled square.
/// Visual: the black 28x28 pixel-art digit you have drawn so far. This only
/// reads the matrix; the renderer never mutates grid state.
pub fn render_grid(fb: &mut FrameBuffer, grid: &GridState, ink: u32) {
    for (row, cells) in grid.rows().iter().enumerate() {
        for (col, &intensity) in cells.iter().enumerate() {
            if intensity == 1.0 {
                let x = col as i32 * CELL_SIZE;
                let y = row as i32 * CELL_SIZE;
                fill_rect(fb, x, y, CELL_SIZE, CELL_SIZE, ink);
            }
        }
    }
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel line on top of the drawing.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a "+" shape (with a tiny gap at the center) follows your mouse,
/// so you can aim at individual cells before clicking.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    // Horizontal line (left part)
    draw_line(fb, cx - size, cy, cx - 2, cy, color);
    // Horizontal line (right part)
    draw_line(fb, cx + 2, cy, cx + size, cy, color);
    // Vertical line (top part)
    draw_line(fb, cx, cy - size, cx, cy - 2, color);
    // Vertical line (bottom part)
    draw_line(fb, cx, cy + 2, cx, cy + size, color);
    // Small center dot to anchor the crosshair visually
    put_pixel(fb, cx, cy, color);
}

/* ---------- 5x7 bitmap font (ASCII subset we need for the HUD) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9 (marked-cell counter)
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters we need: DRAW SAVE MARKED FAILED
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),

        // Punctuation: space, vertical bar, colon
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a dark glyph with a 1-pixel white halo, so the text stays
/// readable whether it sits on the white canvas or on a black cell.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Halo pass: offset by (1,1) in white to improve contrast over ink
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32 + 1, y + ry as i32 + 1, 0x00FFFFFF);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string appears; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
