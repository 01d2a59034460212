use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::history::NavigationHistory;

pub const DEFAULT_ROOT_PATH: &str = ".";
pub const DEFAULT_SIDEBAR_WIDTH: u32 = 300;

/// Session state persisted between editor runs.
/// 跨次啟動保存的工作階段狀態。
///
/// [`Default`] is the first-run record used when no cache file exists. Keys missing
/// from a stored file decode to the zero value of their type (`""`, `0`, `[]`), so a
/// loaded record is exactly what the file holds. The UI replaces the whole record on
/// each save; nothing merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCache {
    #[serde(default)]
    pub root_path: String,
    #[serde(default)]
    pub sidebar_width: u32,
    #[serde(default)]
    pub current_file: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<HistoryItem>,
}

impl Default for SessionCache {
    fn default() -> Self {
        Self {
            root_path: DEFAULT_ROOT_PATH.to_string(),
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            current_file: String::new(),
            history: Vec::new(),
        }
    }
}

impl SessionCache {
    /// Returns `true` when a file is recorded as currently open.
    pub fn has_current_file(&self) -> bool {
        !self.current_file.is_empty()
    }

    /// Records a navigation event; visiting a file also makes it the current file.
    /// 紀錄一次瀏覽；若為檔案則同時設為目前檔案。
    pub fn visit(&mut self, path: impl Into<String>, kind: HistoryKind, capacity: Option<usize>) {
        let path = path.into();
        if kind == HistoryKind::File {
            self.current_file = path.clone();
        }
        self.edit_history(|history| {
            history.set_capacity(capacity);
            history.record(path, kind);
        });
    }

    /// Removes the entry for `path`, returning `true` if it was present.
    pub fn forget(&mut self, path: &str) -> bool {
        self.edit_history(|history| history.remove(path))
    }

    pub fn clear_history(&mut self) {
        self.edit_history(NavigationHistory::clear);
    }

    /// Drops the oldest history entries so at most `limit` remain.
    pub fn truncate_history(&mut self, limit: usize) {
        self.edit_history(|history| history.set_capacity(Some(limit)));
    }

    /// 最近一次瀏覽的項目。 / Most recently visited entry.
    pub fn last_visited(&self) -> Option<&HistoryItem> {
        self.history.last()
    }

    fn edit_history<R>(&mut self, edit: impl FnOnce(&mut NavigationHistory) -> R) -> R {
        let mut history = NavigationHistory::from_items(std::mem::take(&mut self.history), None);
        let result = edit(&mut history);
        self.history = history.into_items();
        result
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<HistoryItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<HistoryItem>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One navigation event in the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: HistoryKind,
}

impl HistoryItem {
    pub fn new(path: impl Into<String>, kind: HistoryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self::new(path, HistoryKind::File)
    }

    pub fn folder(path: impl Into<String>) -> Self {
        Self::new(path, HistoryKind::Folder)
    }
}

/// Whether a history entry points at a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    File,
    Folder,
}

impl HistoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryKind::File => "file",
            HistoryKind::Folder => "folder",
        }
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
