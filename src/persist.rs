// Writes the grid to disk in the flat format the digit-recognizer side expects:
// 784 little-endian f32 values in row-major order, 3136 bytes total.
// No header, no metadata — byte 0 is row 0 / col 0.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::grid::GridState;

/// Where the drawing goes unless the caller picks another path.
pub const DEFAULT_OUTPUT: &str = "drawing.bin";

/// Serialize the grid to `path`, creating or overwriting the file.
/// The file handle is scoped to this function, so it closes on every exit
/// path; a failed write may leave a truncated file behind.
pub fn save_drawing(grid: &GridState, path: &Path) -> Result<(), Error> {
    let file = File::create(path)
        .map_err(|e| Error::Save(format!("create {}: {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    for row in grid.rows() {
        for &intensity in row {
            out.write_all(&intensity.to_le_bytes())
                .map_err(|e| Error::Save(format!("write {}: {e}", path.display())))?;
        }
    }

    // BufWriter flushes on drop too, but that path swallows the error.
    out.flush()
        .map_err(|e| Error::Save(format!("flush {}: {e}", path.display())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GRID_DIM;
    use std::path::PathBuf;

    // Unique temp file per test so runs don't trample each other.
    fn scratch_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("digit_sketch_{tag}_{}.bin", std::process::id()))
    }

    fn read_floats(path: &Path) -> Vec<f32> {
        let bytes = std::fs::read(path).unwrap();
        bytes
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect()
    }

    #[test]
    fn test_blank_grid_saves_3136_zero_bytes() {
        let path = scratch_path("blank");
        save_drawing(&GridState::new(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 3136);
        assert!(bytes.iter().all(|&b| b == 0));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_saved_floats_are_row_major() {
        let mut grid = GridState::new();
        grid.mark(30, 0);   // row 0, col 3  -> flat index 3
        grid.mark(0, 20);   // row 2, col 0  -> flat index 56
        let path = scratch_path("row_major");
        save_drawing(&grid, &path).unwrap();

        let floats = read_floats(&path);
        assert_eq!(floats.len(), GRID_DIM * GRID_DIM);
        for (i, &v) in floats.iter().enumerate() {
            let expected = if i == 3 || i == 2 * GRID_DIM { 1.0 } else { 0.0 };
            assert_eq!(v, expected, "flat index {i}");
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corner_scenario_round_trips() {
        // First and last floats decode to 1.0, the 782 in between to 0.0.
        let mut grid = GridState::new();
        grid.mark(5, 5);
        grid.mark(275, 275);
        grid.mark(-1, 5);
        let path = scratch_path("corners");
        save_drawing(&grid, &path).unwrap();

        let floats = read_floats(&path);
        assert_eq!(floats.len(), 784);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[783], 1.0);
        assert!(floats[1..783].iter().all(|&v| v == 0.0));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_overwrite_replaces_previous_drawing() {
        let path = scratch_path("overwrite");
        let mut grid = GridState::new();
        grid.mark(0, 0);
        save_drawing(&grid, &path).unwrap();
        save_drawing(&GridState::new(), &path).unwrap();

        let floats = read_floats(&path);
        assert_eq!(floats.len(), 784);
        assert!(floats.iter().all(|&v| v == 0.0));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let path = std::env::temp_dir(); // a directory, not a file
        let err = save_drawing(&GridState::new(), &path).unwrap_err();
        assert!(matches!(err, Error::Save(_)));
    }
}
