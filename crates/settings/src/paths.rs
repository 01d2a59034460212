use std::path::{Path, PathBuf};

use crate::error::CacheError;

/// Directory created under the home directory for MarkForge state.
pub const CACHE_DIR_NAME: &str = ".markforge";
/// Session cache file name inside [`CACHE_DIR_NAME`].
pub const CACHE_FILE_NAME: &str = "cache.json";

/// Resolves the current user's home directory from the host OS.
/// 取得目前使用者的家目錄。
pub fn home_dir() -> Result<PathBuf, CacheError> {
    dirs::home_dir().ok_or(CacheError::NoHomeDir)
}

/// Returns `~/.markforge/cache.json` for the current user.
pub fn cache_file_path() -> Result<PathBuf, CacheError> {
    CachePaths::from_env().map(|paths| paths.cache_file())
}

/// Locations derived from a single home directory.
/// 由家目錄推導出的快取路徑。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePaths {
    home: PathBuf,
}

impl CachePaths {
    /// Uses the home directory reported by the host OS.
    pub fn from_env() -> Result<Self, CacheError> {
        home_dir().map(Self::with_home)
    }

    /// Pins an explicit home directory instead of asking the OS.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home_dir(&self) -> &Path {
        &self.home
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.home.join(CACHE_DIR_NAME)
    }

    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir().join(CACHE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_file_lives_under_markforge_dir() {
        let paths = CachePaths::with_home("/home/ada");
        assert_eq!(paths.home_dir(), Path::new("/home/ada"));
        assert_eq!(paths.cache_dir(), PathBuf::from("/home/ada/.markforge"));
        assert_eq!(
            paths.cache_file(),
            PathBuf::from("/home/ada/.markforge/cache.json")
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        if let (Ok(first), Ok(second)) = (cache_file_path(), cache_file_path()) {
            assert_eq!(first, second);
            assert!(first.ends_with(".markforge/cache.json"));
        }
    }
}
