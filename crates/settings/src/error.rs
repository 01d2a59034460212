use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving, reading, or writing the session cache.
/// 解析、讀取或寫入工作階段快取時的錯誤。
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("unable to determine the current user's home directory")]
    NoHomeDir,
    #[error("failed to read session cache {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse session cache {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize session cache {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to prepare directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write session cache {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CacheError {
    /// Kind of the underlying OS error, if this error wraps one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            CacheError::Read { source, .. }
            | CacheError::CreateDir { source, .. }
            | CacheError::Write { source, .. } => Some(source.kind()),
            CacheError::NoHomeDir | CacheError::Parse { .. } | CacheError::Serialize { .. } => {
                None
            }
        }
    }
}
