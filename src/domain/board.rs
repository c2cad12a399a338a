//! The 8x8 grid of cells and the FEN board-field parser.

use std::fmt;
use std::str::FromStr;

use crate::domain::chess::{BOARD_SIZE, Piece, PieceColor, PieceKind, Square};
use crate::domain::rules::is_legal_shape;
use crate::error::{BoardError, PositionError};

/// Board field of the standard starting position
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A single board cell: empty or holding one piece
pub type Cell = Option<Piece>;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard 32-piece starting layout
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, PieceColor::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::White));
            board.cells[7][col] = Some(Piece::new(kind, PieceColor::White));
        }
        board
    }

    /// Parse the board field of a FEN string.
    ///
    /// Digits 1-8 skip that many empty columns, piece letters fill one column.
    /// Each of the 8 ranks must cover exactly 8 columns. Any fields after the
    /// first whitespace (side to move, castling rights, ...) are ignored.
    pub fn parse(position: &str) -> Result<Self, BoardError> {
        let field = position
            .split_whitespace()
            .next()
            .ok_or(PositionError::Empty)?;

        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(PositionError::RankCount(ranks.len()).into());
        }

        let mut board = Self::empty();
        for (row, rank_str) in ranks.into_iter().enumerate() {
            let rank = BOARD_SIZE - row;
            let mut col = 0;
            for ch in rank_str.chars() {
                col += match ch {
                    '1'..='8' => ch as usize - '0' as usize,
                    _ => {
                        let piece = Piece::from_char(ch)
                            .ok_or(PositionError::UnknownChar { rank, ch })?;
                        if col < BOARD_SIZE {
                            board.cells[row][col] = Some(piece);
                        }
                        1
                    }
                };
                if col > BOARD_SIZE {
                    return Err(PositionError::LongRank { rank }.into());
                }
            }
            if col < BOARD_SIZE {
                return Err(PositionError::ShortRank { rank, columns: col }.into());
            }
        }
        Ok(board)
    }

    /// Bounds-checked read by raw coordinates
    pub fn occupant(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Square::new(row, col).map(|sq| self.get(sq))
    }

    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    /// Overwrite a cell, returning what was there before
    pub fn set(&mut self, square: Square, cell: Cell) -> Cell {
        std::mem::replace(&mut self.cells[square.row()][square.col()], cell)
    }

    /// Empty a cell, returning what was there before
    pub fn take(&mut self, square: Square) -> Cell {
        self.set(square, None)
    }

    /// Move whatever occupies `from` onto `to`, overwriting the destination.
    ///
    /// No legality check is made here. Returns the previous occupant of `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Cell {
        let moving = self.take(from);
        self.set(to, moving)
    }

    /// Like [`Board::move_piece`], but only if the piece on `from` may make
    /// that move by shape.
    pub fn apply_checked(&mut self, from: Square, to: Square) -> Result<Cell, BoardError> {
        let piece = self.get(from).ok_or(BoardError::EmptySquare(from))?;
        if !is_legal_shape(piece, from, to) {
            return Err(BoardError::IllegalMove { piece, from, to });
        }
        Ok(self.move_piece(from, to))
    }

    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Occupied squares, row by row from the top
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Serialize back to a FEN board field
    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.cells.iter().enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }
            let mut empty = 0;
            for cell in rank {
                match cell {
                    None => empty += 1,
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{Chess, Position};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_parse_starting_position() {
        let board = Board::parse(STARTING_POSITION).unwrap();
        assert_eq!(board, Board::starting());
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.occupant(0, 4).unwrap(),
            Some(Piece::new(PieceKind::King, PieceColor::Black))
        );
        assert_eq!(
            board.occupant(7, 3).unwrap(),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
        for col in 0..8 {
            for row in 2..6 {
                assert_eq!(board.occupant(row, col).unwrap(), None);
            }
        }
    }

    #[test]
    fn test_starting_position_matches_shakmaty() {
        let board = Board::starting();
        let reference = Chess::default();
        for square in Square::all() {
            let expected = reference
                .board()
                .piece_at(square.to_shakmaty())
                .map(crate::domain::shakmaty_to_piece);
            assert_eq!(board.get(square), expected, "mismatch on {square}");
        }
    }

    #[test]
    fn test_parse_ignores_trailing_fen_fields() {
        let board =
            Board::parse("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
        assert_eq!(
            board.get(sq(4, 4)),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(board.get(sq(6, 4)), None);
    }

    #[test]
    fn test_parse_rejects_short_rank() {
        let err = Board::parse("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap_err();
        assert_eq!(
            err,
            BoardError::MalformedPosition(PositionError::ShortRank { rank: 7, columns: 7 })
        );
    }

    #[test]
    fn test_parse_rejects_long_rank() {
        let err = Board::parse("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR").unwrap_err();
        assert_eq!(
            err,
            BoardError::MalformedPosition(PositionError::UnknownChar { rank: 6, ch: '9' })
        );

        let err = Board::parse("rnbqkbnrp/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap_err();
        assert_eq!(
            err,
            BoardError::MalformedPosition(PositionError::LongRank { rank: 8 })
        );

        let err = Board::parse("8/8/8/54/8/8/8/8").unwrap_err();
        assert_eq!(
            err,
            BoardError::MalformedPosition(PositionError::LongRank { rank: 5 })
        );

        // adjacent digits are fine as long as they sum to 8
        assert!(Board::parse("8/8/8/53/8/8/8/8").is_ok());
    }

    #[test]
    fn test_parse_rejects_unknown_char() {
        let err = Board::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQXBNR").unwrap_err();
        assert_eq!(
            err,
            BoardError::MalformedPosition(PositionError::UnknownChar { rank: 1, ch: 'X' })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_rank_count() {
        assert_eq!(
            Board::parse("8/8/8/8/8/8/8").unwrap_err(),
            BoardError::MalformedPosition(PositionError::RankCount(7))
        );
        assert_eq!(
            Board::parse("   ").unwrap_err(),
            BoardError::MalformedPosition(PositionError::Empty)
        );
    }

    #[test]
    fn test_every_rank_covers_eight_columns() {
        let positions = [
            STARTING_POSITION,
            "8/8/8/8/8/8/8/8",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        ];
        for position in positions {
            let board = Board::parse(position).unwrap();
            assert_eq!(board.to_fen(), position);
        }
    }

    #[test]
    fn test_occupant_out_of_range() {
        let board = Board::starting();
        assert_eq!(
            board.occupant(8, 0),
            Err(BoardError::InvalidSquare { row: 8, col: 0 })
        );
        assert_eq!(
            board.occupant(3, 99),
            Err(BoardError::InvalidSquare { row: 3, col: 99 })
        );
    }

    #[test]
    fn test_move_piece() {
        let mut board = Board::starting();
        let pawn = board.get(sq(6, 4));

        let captured = board.move_piece(sq(6, 4), sq(4, 4));
        assert_eq!(captured, None);
        assert_eq!(board.get(sq(4, 4)), pawn);
        assert_eq!(board.get(sq(6, 4)), None);

        // same move again leaves the source empty and clears the destination
        board.move_piece(sq(6, 4), sq(4, 4));
        assert_eq!(board.get(sq(6, 4)), None);
    }

    #[test]
    fn test_move_piece_overwrites_own_side() {
        let mut board = Board::starting();
        let captured = board.move_piece(sq(7, 0), sq(6, 0));
        assert_eq!(
            captured,
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(
            board.get(sq(6, 0)),
            Some(Piece::new(PieceKind::Rook, PieceColor::White))
        );
    }

    #[test]
    fn test_apply_checked() {
        let mut board = Board::starting();
        assert_eq!(board.apply_checked(sq(7, 6), sq(5, 5)), Ok(None));
        assert!(matches!(
            board.apply_checked(sq(7, 0), sq(5, 1)),
            Err(BoardError::IllegalMove { .. })
        ));
        assert_eq!(
            board.apply_checked(sq(4, 4), sq(3, 4)),
            Err(BoardError::EmptySquare(sq(4, 4)))
        );
    }

    #[test]
    fn test_from_str() {
        let board: Board = "8/8/8/3k4/8/8/8/4K3".parse().unwrap();
        assert_eq!(board.pieces().count(), 2);
        assert_eq!(board.to_string(), "8/8/8/3k4/8/8/8/4K3");
    }
}
