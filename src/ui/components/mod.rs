mod piece;
mod square;

pub use piece::render_piece;
pub use square::{DragMark, render_square};
