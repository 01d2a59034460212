use std::path::{Path, PathBuf};

use markforge_project::{self as project, FileNode};
use markforge_settings::{CacheState, SessionCache, SessionCacheStore};
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::dialog::{DialogProvider, DialogRequest};
use crate::error::BackendError;

/// The flat call surface a UI uses for every backend operation.
/// 提供給 UI 的單一後端呼叫介面。
///
/// Holds only the injected dialog provider and its configuration. Each call resolves
/// paths, touches the filesystem, and releases everything before returning, so the
/// same instance can serve the UI for the whole session.
#[derive(Debug)]
pub struct Backend<D> {
    dialogs: D,
    config: BackendConfig,
}

impl<D: DialogProvider> Backend<D> {
    pub fn new(dialogs: D, config: BackendConfig) -> Self {
        Self { dialogs, config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String, BackendError> {
        surface("read_file", project::read_file(path))
    }

    pub fn list_dir(&self, dir_path: impl AsRef<Path>) -> Result<Vec<FileNode>, BackendError> {
        surface("list_dir", project::list_dir(dir_path))
    }

    /// Populates one level of children under a directory node.
    pub fn expand_dir(&self, node: &FileNode) -> Result<FileNode, BackendError> {
        surface("expand_dir", project::expand(node))
    }

    pub fn home_dir(&self) -> Result<PathBuf, BackendError> {
        surface(
            "home_dir",
            self.config
                .cache_paths()
                .map(|paths| paths.home_dir().to_path_buf()),
        )
    }

    pub fn cache_path(&self) -> Result<PathBuf, BackendError> {
        surface(
            "cache_path",
            self.config.cache_paths().map(|paths| paths.cache_file()),
        )
    }

    /// Loads the session record; a missing cache file yields defaults.
    ///
    /// A corrupt file is reported with [`ErrorKind::DecodeError`](crate::ErrorKind)
    /// and left untouched so the UI can offer [`reset_cache`](Self::reset_cache).
    pub fn load_cache(&self) -> Result<SessionCache, BackendError> {
        surface("load_cache", self.store().and_then(|store| store.load()))
    }

    /// Like [`load_cache`](Self::load_cache) but tells a first run apart from a stored record.
    pub fn load_cache_state(&self) -> Result<CacheState, BackendError> {
        surface(
            "load_cache_state",
            self.store().and_then(|store| store.load_state()),
        )
    }

    /// Persists `cache` as the complete session record.
    pub fn save_cache(&self, cache: &SessionCache) -> Result<(), BackendError> {
        let store = surface("save_cache", self.store())?;
        let result = match self.config.history_limit {
            Some(limit) if cache.history.len() > limit => {
                let mut trimmed = cache.clone();
                trimmed.truncate_history(limit);
                debug!(limit, dropped = cache.history.len() - limit, "trimmed history");
                store.save(&trimmed)
            }
            _ => store.save(cache),
        };
        surface("save_cache", result)
    }

    /// Overwrites the cache with defaults and returns them.
    pub fn reset_cache(&self) -> Result<SessionCache, BackendError> {
        surface("reset_cache", self.store().and_then(|store| store.reset()))
    }

    /// Asks the user for a Markdown file; `Ok(None)` when the picker was cancelled.
    pub fn open_file_dialog(&self) -> Result<Option<PathBuf>, BackendError> {
        let request = DialogRequest::open_markdown_file();
        surface(
            "open_file_dialog",
            self.dialogs.pick_file(&request).map(non_empty),
        )
    }

    /// Asks the user for a folder; `Ok(None)` when the picker was cancelled.
    pub fn open_folder_dialog(&self) -> Result<Option<PathBuf>, BackendError> {
        let request = DialogRequest::open_folder();
        surface(
            "open_folder_dialog",
            self.dialogs.pick_folder(&request).map(non_empty),
        )
    }

    fn store(&self) -> Result<SessionCacheStore, markforge_settings::CacheError> {
        self.config
            .cache_paths()
            .map(|paths| SessionCacheStore::from_paths(&paths))
    }
}

// Some pickers report cancellation as an empty path.
fn non_empty(selection: Option<PathBuf>) -> Option<PathBuf> {
    selection.filter(|path| !path.as_os_str().is_empty())
}

fn surface<T, E: Into<BackendError>>(
    operation: &'static str,
    result: Result<T, E>,
) -> Result<T, BackendError> {
    result.map_err(Into::into).inspect_err(|err| {
        warn!(operation, kind = ?err.kind(), error = %err, "backend operation failed");
    })
}
