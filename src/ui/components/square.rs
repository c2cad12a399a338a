//! Square rendering component.

use fen_board::domain::{Piece, Square};
use gpui::{div, prelude::*, px, rgb};

use crate::ui::components::render_piece;
use crate::ui::theme::{GHOST_OPACITY, TARGET_HIGHLIGHT, square_color};

/// How a square takes part in the current drag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMark {
    #[default]
    None,
    /// The dragged piece came from here; drawn faded
    Origin(Piece),
    /// The dragged piece may be dropped here
    Target,
}

/// Render a single board square with optional piece
pub fn render_square(
    square: Square,
    piece: Option<Piece>,
    mark: DragMark,
    square_size: f32,
) -> impl IntoElement {
    let ghost = match mark {
        DragMark::Origin(p) => Some(p),
        _ => None,
    };

    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(square_color(square))
        .when(mark == DragMark::Target, |el| {
            el.border_2().border_color(rgb(TARGET_HIGHLIGHT))
        })
        .flex()
        .items_center()
        .justify_center()
        .when_some(piece, |el, p| el.child(render_piece(p, square_size)))
        .when_some(ghost, |el, p| {
            el.child(
                div()
                    .size_full()
                    .opacity(GHOST_OPACITY)
                    .child(render_piece(p, square_size)),
            )
        })
}
