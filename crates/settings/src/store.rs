use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::cache::SessionCache;
use crate::error::CacheError;
use crate::paths::CachePaths;
use crate::util::write_atomic;

/// Outcome of a load, telling apart a first run from a stored record.
/// 載入結果：區分首次啟動（無檔案）與已保存的紀錄。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheState {
    /// No cache file exists yet; the record holds defaults.
    Absent(SessionCache),
    /// The record was decoded from the cache file.
    Stored(SessionCache),
}

impl CacheState {
    pub fn is_stored(&self) -> bool {
        matches!(self, CacheState::Stored(_))
    }

    pub fn into_cache(self) -> SessionCache {
        match self {
            CacheState::Absent(cache) | CacheState::Stored(cache) => cache,
        }
    }
}

/// Reads and writes the session cache file.
/// 讀寫工作階段快取檔案。
///
/// The store holds only the file location. Every call goes to disk and no record is
/// retained between calls. There is no locking: two processes saving at once are
/// last-writer-wins for the whole record, which is fine for one UI session per user.
#[derive(Debug, Clone)]
pub struct SessionCacheStore {
    path: PathBuf,
}

impl SessionCacheStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Binds the store to `<home>/.markforge/cache.json`.
    pub fn from_paths(paths: &CachePaths) -> Self {
        Self::new(paths.cache_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record, returning defaults when the file does not exist.
    /// 載入紀錄；檔案不存在時回傳預設值。
    ///
    /// Only a missing file falls back to defaults. Any other read failure and any
    /// malformed content are returned as errors so user data is never discarded.
    pub fn load(&self) -> Result<SessionCache, CacheError> {
        self.load_state().map(CacheState::into_cache)
    }

    /// Like [`load`](Self::load) but reports whether the record came from disk.
    pub fn load_state(&self) -> Result<CacheState, CacheError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "session cache absent, using defaults");
                return Ok(CacheState::Absent(SessionCache::default()));
            }
            Err(source) => {
                return Err(CacheError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let cache = serde_json::from_str(&contents).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "session cache is corrupt");
            CacheError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(path = %self.path.display(), "loaded session cache");
        Ok(CacheState::Stored(cache))
    }

    /// Replaces the cache file with `cache`, creating parent directories as needed.
    /// 以完整紀錄覆寫快取檔案，必要時建立上層目錄。
    pub fn save(&self, cache: &SessionCache) -> Result<(), CacheError> {
        let payload =
            serde_json::to_vec_pretty(cache).map_err(|source| CacheError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        write_atomic(&self.path, &payload)?;
        info!(
            path = %self.path.display(),
            history = cache.history.len(),
            "saved session cache"
        );
        Ok(())
    }

    /// Overwrites the cache with defaults and returns them.
    pub fn reset(&self) -> Result<SessionCache, CacheError> {
        let defaults = SessionCache::default();
        self.save(&defaults)?;
        info!(path = %self.path.display(), "reset session cache");
        Ok(defaults)
    }
}
