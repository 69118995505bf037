use crate::api::QuotzApi;
use crate::cache::FlushMode;
use crate::config::QuotzConfig;
use crate::error::{QuotzError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// A ready-to-use persistence layer bound to a storage directory.
pub struct QuotzContext {
    pub api: QuotzApi<FileStore>,
    pub config: QuotzConfig,
    pub root: PathBuf,
}

/// The per-user data directory for quote storage.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "quotz")
        .ok_or_else(|| QuotzError::Store("Could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Open the persistence layer in the default per-user location.
pub fn open_default() -> Result<QuotzContext> {
    open_at(default_data_dir()?)
}

/// Open the persistence layer rooted at `root`, honoring its config.json.
pub fn open_at(root: impl AsRef<Path>) -> Result<QuotzContext> {
    let root = root.as_ref().to_path_buf();
    let config = QuotzConfig::load(&root)?;

    let store = FileStore::new(&root).with_data_file(&config.data_file);
    let mode = if config.eager_writes {
        FlushMode::Eager
    } else {
        FlushMode::Deferred
    };

    Ok(QuotzContext {
        api: QuotzApi::with_mode(store, mode),
        config,
        root,
    })
}
