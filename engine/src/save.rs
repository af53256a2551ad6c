use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// File extension of save games.
pub const SAVE_EXTENSION: &str = "sav";

/// Tracks the save game directory.
///
/// Reading and writing actual save games isn't supported yet, this only
/// knows whether there's anything to continue from.
#[derive(Clone, Debug, Default)]
pub struct SaveSystem {
    dir: Option<PathBuf>,
}

impl SaveSystem {
    /// Use `dir` for save files, creating it if needed.
    pub fn initialize(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create save directory {dir:?}")
            })?;
            log::info!("Created save directory {dir:?}");
        }
        self.dir = Some(dir.to_owned());
        log::info!("Save system initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.dir.is_some()
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn has_save_files(&self) -> bool {
        self.save_file_count() > 0
    }

    /// Number of save files in the save directory.
    ///
    /// Errors are logged and count as no saves.
    pub fn save_file_count(&self) -> usize {
        let Some(dir) = &self.dir else {
            return 0;
        };
        match count_saves(dir) {
            Ok(n) => n,
            Err(e) => {
                log::error!("Error counting save files: {e:#}");
                0
            }
        }
    }
}

fn count_saves(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut n = 0;
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Can't read save directory {dir:?}"))?
    {
        let path = entry?.path();
        if path.is_file()
            && path.extension().is_some_and(|e| e == SAVE_EXTENSION)
        {
            n += 1;
        }
    }
    Ok(n)
}
