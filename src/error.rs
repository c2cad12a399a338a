//! Error types for the board core.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("malformed position: {0}")]
    MalformedPosition(#[from] PositionError),

    #[error("square ({row}, {col}) is off the board")]
    InvalidSquare { row: usize, col: usize },

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("{piece} cannot move from {from} to {to}")]
    IllegalMove {
        piece: Piece,
        from: Square,
        to: Square,
    },
}

/// Why a position string was rejected. Ranks are numbered as in FEN (8 at the top).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("position string is empty")]
    Empty,

    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} covers only {columns} columns")]
    ShortRank { rank: usize, columns: usize },

    #[error("rank {rank} runs past the h-file")]
    LongRank { rank: usize },

    #[error("rank {rank} contains unrecognized character {ch:?}")]
    UnknownChar { rank: usize, ch: char },
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset root {} is not a directory", .0.display())]
    MissingRoot(PathBuf),
}
