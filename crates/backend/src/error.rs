use std::io;

use markforge_project::FsError;
use markforge_settings::CacheError;
use serde::Serialize;
use thiserror::Error;

use crate::dialog::DialogError;

/// Stable failure categories a UI can branch on.
/// UI 可據以分支處理的錯誤類別。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    NotADirectory,
    DecodeError,
    NoHomeDir,
    DiskFull,
    DialogError,
    Io,
}

/// Every failure a backend operation can surface to the UI.
///
/// The component error is kept intact; [`BackendError::kind`] gives the category.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Fs(#[from] FsError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

impl BackendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BackendError::Fs(err) => match err {
                FsError::NotFound { .. } => ErrorKind::NotFound,
                FsError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
                FsError::NotADirectory { .. } => ErrorKind::NotADirectory,
                FsError::Decode { .. } => ErrorKind::DecodeError,
                FsError::Io { source, .. } => kind_of_io(source.kind()),
            },
            BackendError::Cache(err) => match err {
                CacheError::NoHomeDir => ErrorKind::NoHomeDir,
                CacheError::Parse { .. } => ErrorKind::DecodeError,
                CacheError::Serialize { .. } => ErrorKind::Io,
                CacheError::Read { .. }
                | CacheError::CreateDir { .. }
                | CacheError::Write { .. } => err.io_kind().map_or(ErrorKind::Io, kind_of_io),
            },
            BackendError::Dialog(_) => ErrorKind::DialogError,
        }
    }

    /// Shape handed to a UI notification.
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

fn kind_of_io(kind: io::ErrorKind) -> ErrorKind {
    match kind {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
        io::ErrorKind::NotADirectory => ErrorKind::NotADirectory,
        io::ErrorKind::StorageFull => ErrorKind::DiskFull,
        _ => ErrorKind::Io,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
}
