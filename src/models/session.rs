//! Board session - the board plus the drag-and-drop state driving it.
//!
//! A [`Session`] is owned by whoever runs the frame loop and is handed to the
//! input handlers by `&mut`. It walks a two-state machine:
//!
//! * `Idle --press on a pickable piece--> Dragging`: the piece is lifted off
//!   its square straight away.
//! * `Dragging --release--> Idle`: the piece lands on the target square if the
//!   move has a legal shape, otherwise it goes back to where it came from.

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{
    BOARD_SIZE, Board, Cell, Piece, PieceColor, Square, is_legal_shape, shape_targets,
};
use crate::error::BoardError;
use crate::models::BoardLayout;

/// State for a piece being dragged
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub piece: Piece,
    pub from: Square,
    /// Pointer position relative to window
    pub pointer_x: f32,
    pub pointer_y: f32,
}

/// Why a drop put the piece back on its origin square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelReason {
    /// The move does not match the piece's movement shape
    IllegalMove,
    /// Released outside the board
    OffBoard,
    /// Released over the square it was picked up from
    SameSquare,
}

/// Result of releasing a dragged piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Committed {
        piece: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    Cancelled {
        piece: Piece,
        from: Square,
        reason: CancelReason,
    },
}

impl DropOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, DropOutcome::Committed { .. })
    }
}

/// Pointer state sampled once per frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
}

/// Everything the renderer needs to paint one frame
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Board cells; the cell of a dragged piece's origin is already empty
    pub cells: &'a [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub dragged: Option<DragState>,
    /// Side to move, when turns are enforced
    pub side_to_move: Option<PieceColor>,
}

impl Frame<'_> {
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }
}

pub struct Session {
    board: Board,
    layout: BoardLayout,
    drag: Option<DragState>,
    /// `Some` only when turns are enforced
    turn: Option<PieceColor>,
    button_down: bool,
}

impl Session {
    pub fn new(board: Board, layout: BoardLayout) -> Self {
        Self {
            board,
            layout,
            drag: None,
            turn: None,
            button_down: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, BoardError> {
        let session = Self::new(config.board()?, config.layout());
        Ok(if config.enforce_turns {
            session.with_turns()
        } else {
            session
        })
    }

    /// Only let the side to move pick up pieces, starting with white
    pub fn with_turns(mut self) -> Self {
        self.turn = Some(PieceColor::White);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn side_to_move(&self) -> Option<PieceColor> {
        self.turn
    }

    /// Squares the dragged piece could be dropped on
    pub fn drop_targets(&self) -> Vec<Square> {
        self.drag
            .map(|drag| shape_targets(drag.piece, drag.from))
            .unwrap_or_default()
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            cells: self.board.cells(),
            dragged: self.drag,
            side_to_move: self.turn,
        }
    }

    /// Pointer pressed at a window position. Returns true if a piece was lifted.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        match self.layout.square_at(x, y) {
            Some(square) => self.lift(square, x, y),
            None => false,
        }
    }

    /// Pick up the piece on `square` with the pointer at the square's center
    pub fn press_square(&mut self, square: Square) -> bool {
        let (x, y) = self.layout.square_center(square);
        self.lift(square, x, y)
    }

    /// Pointer released at a window position. Returns `None` when nothing was being dragged.
    pub fn release(&mut self, x: f32, y: f32) -> Option<DropOutcome> {
        let target = self.layout.square_at(x, y);
        self.drop_on(target)
    }

    pub fn release_square(&mut self, square: Square) -> Option<DropOutcome> {
        self.drop_on(Some(square))
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if let Some(drag) = self.drag.as_mut() {
            drag.pointer_x = x;
            drag.pointer_y = y;
        }
    }

    /// Feed one frame of polled pointer state.
    ///
    /// The button is level-triggered; only the press and release edges act.
    pub fn update(&mut self, input: PointerInput) -> Option<DropOutcome> {
        self.pointer_moved(input.x, input.y);
        let outcome = match (self.button_down, input.pressed) {
            (false, true) => {
                self.press(input.x, input.y);
                None
            }
            (true, false) => self.release(input.x, input.y),
            _ => None,
        };
        self.button_down = input.pressed;
        outcome
    }

    fn lift(&mut self, square: Square, x: f32, y: f32) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let Some(piece) = self.board.get(square) else {
            return false;
        };
        if self.turn.is_some_and(|side| side != piece.color) {
            debug!(%piece, %square, "not this side's turn");
            return false;
        }

        self.board.take(square);
        self.drag = Some(DragState {
            piece,
            from: square,
            pointer_x: x,
            pointer_y: y,
        });
        debug!(%piece, %square, "picked up");
        true
    }

    fn drop_on(&mut self, target: Option<Square>) -> Option<DropOutcome> {
        let DragState { piece, from, .. } = self.drag.take()?;

        let reason = match target {
            None => CancelReason::OffBoard,
            Some(to) if to == from => CancelReason::SameSquare,
            Some(to) if !is_legal_shape(piece, from, to) => CancelReason::IllegalMove,
            Some(to) => {
                let captured = self.board.set(to, Some(piece));
                self.turn = self.turn.map(PieceColor::opposite);
                match captured {
                    Some(victim) => info!(%piece, %from, %to, %victim, "move committed"),
                    None => info!(%piece, %from, %to, "move committed"),
                }
                return Some(DropOutcome::Committed {
                    piece,
                    from,
                    to,
                    captured,
                });
            }
        };

        self.board.set(from, Some(piece));
        debug!(%piece, %from, ?reason, "drop cancelled");
        Some(DropOutcome::Cancelled {
            piece,
            from,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PieceKind;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    fn session() -> Session {
        Session::new(Board::starting(), BoardLayout::new(60))
    }

    #[test]
    fn test_press_empty_square_stays_idle() {
        let mut session = session();
        assert!(!session.press_square(sq(4, 4)));
        assert!(!session.is_dragging());
        assert_eq!(session.release_square(sq(3, 4)), None);
    }

    #[test]
    fn test_press_lifts_piece() {
        let mut session = session();
        assert!(session.press_square(sq(6, 4)));

        let drag = session.drag().copied().unwrap();
        assert_eq!(drag.piece, Piece::new(PieceKind::Pawn, PieceColor::White));
        assert_eq!(drag.from, sq(6, 4));
        assert_eq!((drag.pointer_x, drag.pointer_y), (270.0, 390.0));
        assert_eq!(session.board().get(sq(6, 4)), None);
        assert_eq!(session.frame().cell(sq(6, 4)), None);
    }

    #[test]
    fn test_second_press_while_dragging_is_ignored() {
        let mut session = session();
        assert!(session.press_square(sq(6, 4)));
        assert!(!session.press_square(sq(6, 3)));
        assert_eq!(session.drag().unwrap().from, sq(6, 4));
    }

    #[test]
    fn test_commit() {
        let mut session = session();
        session.press_square(sq(7, 6));
        let outcome = session.release_square(sq(5, 5)).unwrap();

        assert_eq!(
            outcome,
            DropOutcome::Committed {
                piece: Piece::new(PieceKind::Knight, PieceColor::White),
                from: sq(7, 6),
                to: sq(5, 5),
                captured: None,
            }
        );
        assert!(!session.is_dragging());
        assert_eq!(session.board().get(sq(7, 6)), None);
        assert!(session.board().get(sq(5, 5)).is_some());
    }

    #[test]
    fn test_illegal_drop_restores_piece() {
        let mut session = session();
        let before = session.board().clone();
        session.press_square(sq(7, 6));
        let outcome = session.release_square(sq(5, 6)).unwrap();

        assert!(matches!(
            outcome,
            DropOutcome::Cancelled {
                reason: CancelReason::IllegalMove,
                ..
            }
        ));
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_drop_off_board_restores_piece() {
        let mut session = session();
        let before = session.board().clone();
        assert!(session.press(250.0, 370.0));
        let outcome = session.release(900.0, 10.0).unwrap();

        assert!(matches!(
            outcome,
            DropOutcome::Cancelled {
                reason: CancelReason::OffBoard,
                ..
            }
        ));
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_drop_on_origin_is_cancel() {
        let mut session = session();
        session.press_square(sq(7, 4));
        let outcome = session.release_square(sq(7, 4)).unwrap();
        assert!(matches!(
            outcome,
            DropOutcome::Cancelled {
                reason: CancelReason::SameSquare,
                ..
            }
        ));
        assert_eq!(session.board(), &Board::starting());
    }

    #[test]
    fn test_capture_overwrites_own_piece() {
        let mut session = session();
        session.press_square(sq(7, 0));
        let outcome = session.release_square(sq(6, 0)).unwrap();
        assert!(matches!(
            outcome,
            DropOutcome::Committed {
                captured: Some(Piece {
                    kind: PieceKind::Pawn,
                    color: PieceColor::White
                }),
                ..
            }
        ));
        assert_eq!(session.board().pieces().count(), 31);
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = session().with_turns();
        assert_eq!(session.side_to_move(), Some(PieceColor::White));
        assert!(!session.press_square(sq(1, 4)));

        session.press_square(sq(6, 4));
        assert!(session.release_square(sq(4, 4)).unwrap().is_committed());
        assert_eq!(session.side_to_move(), Some(PieceColor::Black));
        assert!(!session.press_square(sq(4, 4)));

        // a cancelled drop does not pass the turn
        session.press_square(sq(1, 4));
        assert!(!session.release_square(sq(4, 3)).unwrap().is_committed());
        assert_eq!(session.side_to_move(), Some(PieceColor::Black));
    }

    #[test]
    fn test_no_turns_by_default() {
        let mut session = session();
        assert_eq!(session.side_to_move(), None);
        session.press_square(sq(1, 4));
        assert!(session.release_square(sq(3, 4)).unwrap().is_committed());
    }

    #[test]
    fn test_update_acts_on_edges() {
        let mut session = session();
        let down = |x, y| PointerInput { x, y, pressed: true };
        let up = |x, y| PointerInput { x, y, pressed: false };

        assert_eq!(session.update(up(270.0, 390.0)), None);
        assert_eq!(session.update(down(270.0, 390.0)), None);
        assert!(session.is_dragging());

        // holding the button just moves the piece along
        assert_eq!(session.update(down(270.0, 300.0)), None);
        let drag = session.drag().copied().unwrap();
        assert_eq!((drag.pointer_x, drag.pointer_y), (270.0, 300.0));
        assert_eq!(session.frame().dragged, Some(drag));

        let outcome = session.update(up(270.0, 250.0)).unwrap();
        assert!(outcome.is_committed());
        assert_eq!(
            session.board().get(sq(4, 4)),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(session.update(up(270.0, 250.0)), None);
    }

    #[test]
    fn test_drop_targets() {
        let mut session = session();
        assert!(session.drop_targets().is_empty());
        session.press_square(sq(6, 4));
        assert_eq!(session.drop_targets(), vec![sq(4, 4), sq(5, 4)]);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            enforce_turns: true,
            ..Config::default()
        };
        let session = Session::from_config(&config).unwrap();
        assert_eq!(session.side_to_move(), Some(PieceColor::White));
        assert_eq!(session.layout().square_size(), 67);

        let config = Config {
            position: "8/8".into(),
            ..Config::default()
        };
        assert!(Session::from_config(&config).is_err());
    }
}
