//! Chessboard core: FEN board parsing, move-shape validation and the
//! drag-and-drop session that ties them to pointer input.

pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Board, Piece, PieceColor, PieceKind, Square};
pub use error::{AssetError, BoardError, PositionError};
pub use models::{DropOutcome, Session};
