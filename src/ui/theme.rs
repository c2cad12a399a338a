//! Theme constants and colors for the board.

use fen_board::Square;
use gpui::{Rgba, rgb};

pub const GHOST_OPACITY: f32 = 0.4;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xFFA500;
pub const DARK_SQUARE: u32 = 0xFFE4C4;
pub const TARGET_HIGHLIGHT: u32 = 0x6A9955;

pub const WINDOW_BG: u32 = 0x2a2a2a;

/// Get the color for a board square based on its position
pub fn square_color(square: Square) -> Rgba {
    if (square.row() + square.col()) % 2 == 0 {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}
