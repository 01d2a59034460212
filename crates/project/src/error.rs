use std::io;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use thiserror::Error;

/// Errors raised while listing directories or reading files.
/// 列出目錄或讀取檔案時可能發生的錯誤。
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{path} does not exist")]
    NotFound { path: PathBuf },
    #[error("permission denied for {path}")]
    PermissionDenied { path: PathBuf },
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },
    #[error("{path} is not valid UTF-8 text: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classifies an OS error by kind, keeping the path that triggered it.
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path },
            io::ErrorKind::NotADirectory => FsError::NotADirectory { path },
            _ => FsError::Io { path, source },
        }
    }

    /// Path the failing operation was invoked with.
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound { path }
            | FsError::PermissionDenied { path }
            | FsError::NotADirectory { path }
            | FsError::Decode { path, .. }
            | FsError::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_maps_common_kinds() {
        let err = FsError::from_io("a", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, FsError::NotFound { .. }));

        let err = FsError::from_io("b", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, FsError::PermissionDenied { .. }));
        assert_eq!(err.path(), Path::new("b"));

        let err = FsError::from_io("c", io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(err, FsError::Io { .. }));
    }
}
