use std::cmp::Ordering;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MARKDOWN_EXTENSION: &str = "md";

/// One filesystem entry as shown in the sidebar tree.
/// 側邊欄樹狀結構中的單一檔案系統項目。
///
/// `children` stays empty until the node is expanded by a separate listing call;
/// nodes are never built recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileNode>,
}

impl FileNode {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
            children: Vec::new(),
        }
    }

    /// Returns `true` for non-directory entries with an `.md` extension (any case).
    /// 副檔名為 `.md` 的檔案回傳 `true`。
    pub fn is_markdown(&self) -> bool {
        !self.is_dir
            && self
                .path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION))
    }
}

/// Orders nodes the way the sidebar shows them: directories first, then by name.
/// 依側邊欄顯示順序排序：資料夾優先，其次依名稱。
pub fn sort_for_display(nodes: &mut [FileNode]) {
    nodes.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });
}

/// Keeps directories and Markdown files, dropping everything else.
pub fn retain_markdown(nodes: Vec<FileNode>) -> Vec<FileNode> {
    nodes
        .into_iter()
        .filter(|node| node.is_dir || node.is_markdown())
        .collect()
}
