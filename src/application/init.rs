//! Initialize config store use case

use crate::error::Result;
use crate::infrastructure::{ConfigRepository, FileSystemRepository, ProfileStore, BOOTSTRAP_PROFILE};
use std::fs;
use std::path::Path;

/// Initialize a new config store at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Create .sheetcast directory
    repo.initialize()?;

    // Seed one blank profile flagged as default
    let store = ProfileStore::bootstrap();
    repo.save_store(&store)?;

    println!("Initialized sheetcast config store at {}", path.display());
    println!(
        "Fill in the bootstrap profile, e.g.: sheetcast profile set {} corp-id <value>",
        BOOTSTRAP_PROFILE
    );

    Ok(())
}
