//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;

use shakmaty::{Color as SColor, File, Rank, Role};

use crate::error::BoardError;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Parse a FEN piece letter (`PNBRQK` white, `pnbrqk` black)
    pub fn from_char(ch: char) -> Option<Piece> {
        shakmaty::Piece::from_char(ch).map(shakmaty_to_piece)
    }

    /// FEN letter for this piece
    pub fn to_char(self) -> char {
        piece_to_shakmaty(self).char()
    }

    /// File name of the sprite for this piece, e.g. `white-knight.png`
    pub fn sprite_name(self) -> String {
        format!("{}-{}.png", self.color.name(), self.kind.name())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color.name(), self.kind.name())
    }
}

/// A square on the board. Row 0 is rank 8 (top of the screen), column 0 is file a.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Bounds-checked constructor
    pub fn new(row: usize, col: usize) -> Result<Square, BoardError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(BoardError::InvalidSquare { row, col })
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// All 64 squares, row by row from the top-left corner
    pub fn all() -> impl Iterator<Item = Square> {
        (0..(BOARD_SIZE * BOARD_SIZE) as u8).map(|idx| Square {
            row: idx / BOARD_SIZE as u8,
            col: idx % BOARD_SIZE as u8,
        })
    }

    /// Convert to a shakmaty square (row 0 = rank 8, row 7 = rank 1)
    pub fn to_shakmaty(self) -> shakmaty::Square {
        let file = File::new(self.col as u32);
        let rank = Rank::new(7 - self.row as u32);
        shakmaty::Square::from_coords(file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_shakmaty())
    }
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    let color = match piece.color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    };
    Piece { kind, color }
}

/// Convert our domain Piece to a shakmaty piece
pub fn piece_to_shakmaty(piece: Piece) -> shakmaty::Piece {
    let role = match piece.kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    };
    let color = match piece.color {
        PieceColor::White => SColor::White,
        PieceColor::Black => SColor::Black,
    };
    shakmaty::Piece { color, role }
}
