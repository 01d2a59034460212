use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CacheError;

/// Creates missing parent directories, then writes through a uniquely named temporary
/// file in the same directory and renames it over `path`. Each call gets its own
/// temporary file, so overlapping saves never share a half-written one.
/// 先建立上層目錄，再以獨立的臨時檔案搭配 rename 寫入。
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> Result<(), CacheError> {
    let dir = match path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|source| CacheError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            parent
        }
        None => Path::new("."),
    };
    let write_err = |source| CacheError::Write {
        path: path.to_path_buf(),
        source,
    };
    // Dropping the handle on an error path removes the temporary file.
    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(data).map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
