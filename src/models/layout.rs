//! Board layout calculations - handles sizing and coordinate transformations.

use crate::domain::{BOARD_SIZE, Square};

/// Maps window pixels to board squares for a board drawn at the window origin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    square_size: u32,
}

impl BoardLayout {
    /// A zero square size is bumped to 1 pixel
    pub fn new(square_size: u32) -> Self {
        Self {
            square_size: square_size.max(1),
        }
    }

    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Get the total size of the board (8 squares)
    pub fn board_size(&self) -> u32 {
        self.square_size * BOARD_SIZE as u32
    }

    /// Convert a pointer position to the square under it (if within board)
    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let col = x as u32 / self.square_size;
        let row = y as u32 / self.square_size;
        Square::new(row as usize, col as usize).ok()
    }

    /// Top-left pixel of a square
    pub fn square_origin(&self, square: Square) -> (f32, f32) {
        let size = self.square_size as f32;
        (square.col() as f32 * size, square.row() as f32 * size)
    }

    /// Center pixel of a square
    pub fn square_center(&self, square: Square) -> (f32, f32) {
        let (x, y) = self.square_origin(square);
        let half = self.square_size as f32 / 2.0;
        (x + half, y + half)
    }

    /// Top-left pixel for a sprite centered under the pointer
    pub fn piece_origin_at_pointer(&self, x: f32, y: f32) -> (f32, f32) {
        let half = self.square_size as f32 / 2.0;
        (x - half, y - half)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(67)
    }
}
