// Core types shared between the event loop and the software renderer.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// Allocate a buffer filled with a single color.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Repaint every pixel with `color`.
    /// Visual: wipes the whole window before the grid is drawn back on top.
    pub fn clear(&mut self, color: u32) {
        for px in &mut self.pixels {
            *px = color;
        }
    }
}
