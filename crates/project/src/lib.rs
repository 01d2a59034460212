//! Directory listing and file reading primitives for the MarkForge sidebar.
//! MarkForge 側邊欄的目錄列舉與檔案讀取模組。

mod error;

pub mod lister;
pub mod node;
pub mod reader;

pub use error::FsError;
pub use lister::{expand, list_dir};
pub use node::{retain_markdown, sort_for_display, FileNode};
pub use reader::read_file;
