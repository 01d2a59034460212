//! Session cache persistence for MarkForge: paths, record schema, navigation history.
//! MarkForge 工作階段快取：路徑、資料結構與瀏覽紀錄。

mod error;
mod util;

pub mod cache;
pub mod history;
pub mod paths;
pub mod store;

pub use cache::{HistoryItem, HistoryKind, SessionCache, DEFAULT_ROOT_PATH, DEFAULT_SIDEBAR_WIDTH};
pub use error::CacheError;
pub use history::NavigationHistory;
pub use paths::{cache_file_path, home_dir, CachePaths, CACHE_DIR_NAME, CACHE_FILE_NAME};
pub use store::{CacheState, SessionCacheStore};
