//! Piece rendering component.

use fen_board::Piece;
use gpui::{SharedString, div, img, prelude::*, px};

/// Render a chess piece sprite centered in its container
pub fn render_piece(piece: Piece, piece_size: f32) -> impl IntoElement {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(img(SharedString::from(piece.sprite_name())).size(px(piece_size)))
}
