use std::path::PathBuf;

use markforge_settings::{CacheError, CachePaths};

/// Host-supplied settings for a [`Backend`](crate::Backend).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    /// Used instead of the OS home directory when set.
    pub home_override: Option<PathBuf>,
    /// Newest history entries kept on save; `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl BackendConfig {
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_override = Some(home.into());
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Resolves cache locations; the OS is asked on every call when no override is set.
    pub fn cache_paths(&self) -> Result<CachePaths, CacheError> {
        match &self.home_override {
            Some(home) => Ok(CachePaths::with_home(home.clone())),
            None => CachePaths::from_env(),
        }
    }
}
