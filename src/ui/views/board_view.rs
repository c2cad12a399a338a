//! Chess board view - the board with drag-and-drop piece movement.

use std::sync::Arc;

use fen_board::assets::SpriteSet;
use fen_board::domain::Square;
use fen_board::models::Session;
use gpui::{
    Context, Entity, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Subscription,
    Window, div, prelude::*, px, rgb,
};

use crate::ui::components::{DragMark, render_piece, render_square};
use crate::ui::theme::WINDOW_BG;

/// The board view that observes a Session
pub struct BoardView {
    session: Entity<Session>,
    sprites: Arc<SpriteSet>,
    _subscription: Subscription,
}

impl BoardView {
    pub fn new(session: Entity<Session>, sprites: Arc<SpriteSet>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&session, |_, _, cx| cx.notify());
        Self {
            session,
            sprites,
            _subscription,
        }
    }
}

impl Render for BoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session_down = self.session.clone();
        let session_move = self.session.clone();
        let session_up = self.session.clone();

        let session = self.session.read(cx);
        let layout = session.layout();
        let frame = session.frame();
        let targets = session.drop_targets();
        let square_size = layout.square_size() as f32;
        let board_total_size = layout.board_size() as f32;

        // Collect squares for rendering (can't borrow the session in closures).
        // Pieces without a sprite are skipped.
        let sprites = &self.sprites;
        let squares: Vec<_> = Square::all()
            .map(|square| {
                let mark = match frame.dragged {
                    Some(drag) if drag.from == square && sprites.contains(drag.piece) => {
                        DragMark::Origin(drag.piece)
                    }
                    Some(_) if targets.contains(&square) => DragMark::Target,
                    _ => DragMark::None,
                };
                let piece = frame.cell(square).filter(|p| sprites.contains(*p));
                (square, piece, mark)
            })
            .collect();

        // Floating piece follows cursor during drag
        let floating_piece = frame
            .dragged
            .filter(|drag| sprites.contains(drag.piece))
            .map(|drag| {
                let (left, top) = layout.piece_origin_at_pointer(drag.pointer_x, drag.pointer_y);
                div()
                    .absolute()
                    .left(px(left))
                    .top(px(top))
                    .size(px(square_size))
                    .child(render_piece(drag.piece, square_size))
            });

        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .children(squares.chunks(8).map(|rank| {
                div().flex().flex_shrink_0().children(rank.iter().map(
                    |&(square, piece, mark)| render_square(square, piece, mark, square_size),
                ))
            }));

        div()
            .id("board")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(WINDOW_BG))
            .child(board)
            .when_some(floating_piece, |el, fp| el.child(fp))
            // Mouse down: start drag if clicking on a piece
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    session_down.update(cx, |session, cx| {
                        if session.press(ev.position.x.into(), ev.position.y.into()) {
                            cx.notify();
                        }
                    });
                },
            )
            // Mouse move: update drag position
            .on_mouse_move(move |ev: &MouseMoveEvent, _, cx| {
                session_move.update(cx, |session, cx| {
                    if session.is_dragging() {
                        session.pointer_moved(ev.position.x.into(), ev.position.y.into());
                        cx.notify();
                    }
                });
            })
            // Mouse up: commit or cancel the move
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                session_up.update(cx, |session, cx| {
                    if session
                        .release(ev.position.x.into(), ev.position.y.into())
                        .is_some()
                    {
                        cx.notify();
                    }
                });
            })
    }
}
