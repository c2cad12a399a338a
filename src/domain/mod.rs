pub mod board;
pub mod chess;
pub mod rules;

pub use board::{Board, Cell, STARTING_POSITION};
pub use chess::{
    BOARD_SIZE, Piece, PieceColor, PieceKind, Square, piece_to_shakmaty, shakmaty_to_piece,
};
pub use rules::{is_legal_shape, shape_targets};
