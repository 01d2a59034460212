use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::FsError;

/// Reads the whole file as UTF-8 text.
/// 以 UTF-8 讀取整個檔案內容。
///
/// Content is returned byte-for-byte: a BOM or CRLF line endings are kept as-is.
/// Invalid UTF-8 is reported as [`FsError::Decode`] instead of being replaced.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, FsError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| FsError::from_io(path, err))?;
    let text = String::from_utf8(bytes).map_err(|err| FsError::Decode {
        path: path.to_path_buf(),
        source: err.utf8_error(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read file");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn keeps_bom_and_line_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crlf.md");
        let content = "\u{feff}# Title\r\nbody\r\n";
        fs::write(&path, content).unwrap();
        assert_eq!(read_file(&path).unwrap(), content);
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x00]).unwrap();
        let err = read_file(&path).unwrap_err();
        match err {
            FsError::Decode { source, .. } => assert_eq!(source.valid_up_to(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
