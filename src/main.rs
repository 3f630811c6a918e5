// What you SEE now:
// • A white 280x280 canvas split into invisible 10x10 cells.
// • Hold Left Mouse: cells fill in black under the cursor (draw your digit).
// • S saves the drawing as 784 raw f32 values in drawing.bin. ESC quits.
// • The HUD shows key hints, the marked-cell count, and the last save result.

mod draw;
mod error;
mod grid;
mod persist;
mod types;

use draw::{Drawer, draw_crosshair, draw_text_5x7, render_grid};
use error::Error;
use grid::{GridState, SURFACE_SIZE};
use std::path::Path;
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Window + grid setup ---
       Visual: window opens with a blank white canvas. */
    let side = SURFACE_SIZE as usize;
    let mut drawer = Drawer::new("28x28 Digit Sketch", side, side)?;
    let mut grid = GridState::new();
    let out_path = Path::new(persist::DEFAULT_OUTPUT);

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::filled(side, side, 0x00FFFFFF);

    /* --- Save status line ---
       Visual: "SAVED" / "SAVE FAILED" under the hints after pressing S. */
    let mut save_status = String::new();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs: paint while holding left mouse.
           The raw coordinate goes straight to the grid; anything outside the
           280x280 surface (drag past the edge) is dropped there, not here. */
        if drawer.left_mouse_down() {
            if let Some((mx, my)) = drawer.mouse_pos() {
                grid.mark(mx, my); // visual: the cell under the cursor turns black
            }
        }

        /* 2) Save on S: either it fully lands on disk or it didn't happen.
           A failure is reported and the app stays usable, so you can retry. */
        if drawer.save_pressed_once() {
            match persist::save_drawing(&grid, out_path) {
                Ok(()) => {
                    log::info!("drawing saved to {}", out_path.display());
                    save_status = String::from("SAVED");
                }
                Err(e) => {
                    log::error!("{e}");
                    save_status = String::from("SAVE FAILED");
                }
            }
        }

        /* 3) Rebuild the frame from grid state.
           Visual: white canvas, black squares for marked cells. Rendering only
           reads the matrix; all mutation happened in step 1. */
        screen.clear(0x00FFFFFF);
        render_grid(&mut screen, &grid, 0x00000000);

        /* 4) Crosshair + HUD on top */
        if let Some((mx, my)) = drawer.mouse_pos() {
            draw_crosshair(&mut screen, mx, my, 8, 0x00CC3333); // visual: red + at cursor
        }

        let hud = format!("DRAW | S: SAVE | MARKED: {}", grid.marked_count());
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00333333);
        if !save_status.is_empty() {
            draw_text_5x7(&mut screen, 8, 20, &save_status, 0x00333333);
        }

        /* 5) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;
    }

    Ok(())
}
