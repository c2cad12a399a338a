//! Filesystem-based asset source serving piece sprites from the configured directory.

use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Asset source rooted at the sprite directory
pub struct FileAssets {
    base_path: PathBuf,
}

impl FileAssets {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        match fs::read(self.base_path.join(path)) {
            Ok(data) => Ok(Some(Cow::Owned(data))),
            Err(err) => {
                tracing::warn!(path, %err, "failed to read asset");
                Ok(None)
            }
        }
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let dir_path = self.base_path.join(path);
        let mut results = Vec::new();

        if let Ok(entries) = fs::read_dir(&dir_path) {
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    results.push(SharedString::from(name.to_string()));
                }
            }
        }
        Ok(results)
    }
}
