//! Piece sprite lookup.
//!
//! Sprites live in one directory as `<color>-<kind>.png`. A missing directory
//! is an error; a missing sprite only means that piece is not drawn.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{Piece, PieceColor, PieceKind};
use crate::error::AssetError;

#[derive(Debug, Clone)]
pub struct SpriteSet {
    root: PathBuf,
    paths: HashMap<Piece, PathBuf>,
}

impl SpriteSet {
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AssetError::MissingRoot(root));
        }

        let mut paths = HashMap::new();
        for piece in all_pieces() {
            let path = root.join(piece.sprite_name());
            if path.is_file() {
                paths.insert(piece, path);
            } else {
                warn!(%piece, path = %path.display(), "sprite not found, piece will not be drawn");
            }
        }
        debug!(root = %root.display(), found = paths.len(), "loaded sprites");

        Ok(Self { root, paths })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, piece: Piece) -> Option<&Path> {
        self.paths.get(&piece).map(PathBuf::as_path)
    }

    pub fn contains(&self, piece: Piece) -> bool {
        self.paths.contains_key(&piece)
    }

    /// Pieces that have no sprite
    pub fn missing(&self) -> impl Iterator<Item = Piece> + '_ {
        all_pieces().filter(|piece| !self.contains(*piece))
    }
}

fn all_pieces() -> impl Iterator<Item = Piece> {
    PieceColor::ALL
        .into_iter()
        .flat_map(|color| PieceKind::ALL.into_iter().map(move |kind| Piece::new(kind, color)))
}
