use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::FsError;
use crate::node::FileNode;

/// Lists the immediate children of `dir_path`.
/// 列出目錄的直接子項目（不遞迴）。
///
/// Entries come back in the order the OS enumerates them. Symbolic links are
/// classified by the link's own file type and are never followed, so a link to a
/// directory is reported with `is_dir == false`. Hidden entries are included.
pub fn list_dir(dir_path: impl AsRef<Path>) -> Result<Vec<FileNode>, FsError> {
    let dir_path = dir_path.as_ref();
    let metadata = fs::metadata(dir_path).map_err(|err| FsError::from_io(dir_path, err))?;
    if !metadata.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir_path.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir_path).map_err(|err| FsError::from_io(dir_path, err))?;
    let mut nodes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| FsError::from_io(dir_path, err))?;
        let file_type = entry
            .file_type()
            .map_err(|err| FsError::from_io(entry.path(), err))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        nodes.push(FileNode::new(name, entry.path(), file_type.is_dir()));
    }

    debug!(path = %dir_path.display(), entries = nodes.len(), "listed directory");
    Ok(nodes)
}

/// Returns a copy of `node` with its direct children populated.
/// 展開節點：僅填入下一層子項目。
///
/// Grandchildren are left empty; expanding deeper takes another call per level.
pub fn expand(node: &FileNode) -> Result<FileNode, FsError> {
    if !node.is_dir {
        return Err(FsError::NotADirectory {
            path: node.path.clone(),
        });
    }
    let mut expanded = node.clone();
    expanded.children = list_dir(&node.path)?;
    Ok(expanded)
}
