//! Move-shape validation.
//!
//! A move is shape-legal when its row/column vector matches the movement
//! pattern of the piece kind. Occupancy is never consulted: sliding pieces may
//! jump over others, any piece may land on its own side, and there is no
//! notion of check.

use crate::domain::chess::{Piece, PieceColor, PieceKind, Square};

/// Check whether moving `piece` from `from` to `to` matches its movement shape
pub fn is_legal_shape(piece: Piece, from: Square, to: Square) -> bool {
    let dr = to.row() as i32 - from.row() as i32;
    let dc = to.col() as i32 - from.col() as i32;

    match piece.kind {
        PieceKind::Pawn => pawn_shape(piece.color, from, to, dr, dc),
        PieceKind::Knight => knight_shape(dr, dc),
        PieceKind::Bishop => bishop_shape(dr, dc),
        PieceKind::Rook => rook_shape(dr, dc),
        PieceKind::Queen => rook_shape(dr, dc) || bishop_shape(dr, dc),
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
    }
}

/// Every square `piece` could reach from `from` by shape alone
pub fn shape_targets(piece: Piece, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| to != from && is_legal_shape(piece, from, to))
        .collect()
}

// Pawns only move straight ahead: one row, or two from the home row.
fn pawn_shape(color: PieceColor, from: Square, to: Square, dr: i32, dc: i32) -> bool {
    if dc != 0 {
        return false;
    }
    let (step, home_row, double_row) = match color {
        PieceColor::White => (-1, 6, 4),
        PieceColor::Black => (1, 1, 3),
    };
    dr == step || (from.row() == home_row && to.row() == double_row)
}

fn knight_shape(dr: i32, dc: i32) -> bool {
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

fn bishop_shape(dr: i32, dc: i32) -> bool {
    dr.abs() == dc.abs()
}

fn rook_shape(dr: i32, dc: i32) -> bool {
    (dr == 0) != (dc == 0)
}
