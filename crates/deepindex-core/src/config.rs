//! Persistence of the last selected folder.
//!
//! The file holds the raw folder path and nothing else. Read and write
//! failures never interrupt the user; they are logged and an empty folder is
//! used instead.

use crate::error::DeepIndexError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory name under the per-user config directory.
pub const APP_DIR_NAME: &str = "DeepIndexPDF";
pub const CONFIG_FILE_NAME: &str = "config.txt";

/// Environment variable that overrides the directory holding `config.txt`.
pub const CONFIG_DIR_ENV: &str = "DEEPINDEX_CONFIG_DIR";

/// Where the last selected folder is kept.
///
/// A store without a path is disabled: it loads nothing and saves nothing,
/// so a system without a per-user config directory still works.
#[derive(Debug, Clone)]
pub struct FolderStore {
    path: Option<PathBuf>,
}

impl FolderStore {
    /// Store backed by `<dir>/config.txt`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        FolderStore {
            path: Some(dir.as_ref().join(CONFIG_FILE_NAME)),
        }
    }

    /// Store in the per-user application data directory, e.g.
    /// `%APPDATA%\DeepIndexPDF\config.txt` on Windows.
    pub fn user_default() -> Self {
        Self::from_base(dirs::config_dir())
    }

    /// Store that remembers nothing.
    pub fn disabled() -> Self {
        FolderStore { path: None }
    }

    fn from_base(base: Option<PathBuf>) -> Self {
        match base {
            Some(base) => Self::in_dir(base.join(APP_DIR_NAME)),
            None => {
                warn!("no per-user config directory; the selected folder will not be remembered");
                Self::disabled()
            }
        }
    }

    /// `override_dir` when given, otherwise [`FolderStore::user_default`].
    pub fn resolve(override_dir: Option<&Path>) -> Self {
        match override_dir {
            Some(dir) => Self::in_dir(dir),
            None => Self::user_default(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Last saved folder, or an empty string when nothing was saved yet.
    pub fn load(&self) -> String {
        let Some(path) = &self.path else {
            return String::new();
        };
        if !path.exists() {
            debug!("no saved folder at {}", path.display());
            return String::new();
        }
        match fs::read_to_string(path) {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                warn!("failed to load saved folder from {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    /// Save `folder`, logging instead of failing.
    pub fn save(&self, folder: &str) {
        if let Err(e) = self.try_save(folder) {
            warn!("failed to save folder {}: {}", folder, e);
        }
    }

    pub fn try_save(&self, folder: &str) -> Result<(), DeepIndexError> {
        let path = self.path.as_ref().ok_or_else(|| {
            DeepIndexError::InvalidInput("no per-user config directory on this system".into())
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, folder)?;
        debug!("saved folder {} to {}", folder, path.display());
        Ok(())
    }
}
