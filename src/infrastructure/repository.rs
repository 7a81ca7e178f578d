//! File system repository for the config store and token cache

use crate::error::{Result, SheetcastError};
use crate::infrastructure::ProfileStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for config-store operations
pub trait ConfigRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load the profile store from .sheetcast/config.toml
    fn load_store(&self) -> Result<ProfileStore>;

    /// Save the profile store to .sheetcast/config.toml
    fn save_store(&self, store: &ProfileStore) -> Result<()>;

    /// Check if the .sheetcast directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .sheetcast directory
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ConfigRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the config root: SHEETCAST_ROOT first, then walk up from the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SHEETCAST_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_store_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(SheetcastError::Config(format!(
                    "SHEETCAST_ROOT is set to '{}' but no .sheetcast directory found. \
                    Run 'sheetcast init' in that directory or unset SHEETCAST_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the config root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_store_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(SheetcastError::NotInitialized(start.to_path_buf()));
                }
            }
        }
    }

    /// Path of the cached-token file inside the store directory
    pub fn token_cache_path(&self) -> PathBuf {
        self.root.join(".sheetcast").join("token_access.conf")
    }

    fn has_store_dir(path: &Path) -> bool {
        path.join(".sheetcast").is_dir()
    }
}

impl ConfigRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_store(&self) -> Result<ProfileStore> {
        ProfileStore::load_from_dir(&self.root)
    }

    fn save_store(&self, store: &ProfileStore) -> Result<()> {
        store.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_store_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let store_dir = self.root.join(".sheetcast");

        if store_dir.exists() {
            return Err(SheetcastError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&store_dir)?;
        Ok(())
    }
}
