//! UI-facing facade for the MarkForge editor backend.
//! MarkForge 編輯器後端對 UI 的呼叫介面。
//!
//! A host builds one [`Backend`] with its dialog provider and calls it for every
//! file, directory, and session-cache operation. The backend assumes a single
//! active UI session per user: concurrent saves from two sessions are not
//! coordinated and the last write wins.

mod backend;
mod config;
mod error;

pub mod dialog;

pub use backend::Backend;
pub use config::BackendConfig;
#[cfg(feature = "native-dialogs")]
pub use dialog::RfdDialogs;
pub use dialog::{DialogError, DialogFilter, DialogProvider, DialogRequest, NoDialogs};
pub use error::{BackendError, ErrorKind, ErrorPayload};

pub use markforge_project::{retain_markdown, sort_for_display, FileNode};
pub use markforge_settings::{CacheState, HistoryItem, HistoryKind, NavigationHistory, SessionCache};
