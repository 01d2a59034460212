//! Seam between the backend and the host's native file/folder pickers.

use std::path::PathBuf;

use thiserror::Error;

pub const OPEN_FILE_TITLE: &str = "Open Markdown File";
pub const OPEN_FOLDER_TITLE: &str = "Open Folder";

/// A named file-type filter such as `Markdown Files: *.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFilter {
    pub name: String,
    pub pattern: String,
}

impl DialogFilter {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Extension form of the pattern (`*.md` → `md`); `None` for the catch-all `*`.
    pub fn extension(&self) -> Option<&str> {
        self.pattern.strip_prefix("*.")
    }

}

/// What the backend asks the picker to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub filters: Vec<DialogFilter>,
}

impl DialogRequest {
    /// Markdown picker with the fixed `*.md` and `*` filters.
    pub fn open_markdown_file() -> Self {
        Self {
            title: OPEN_FILE_TITLE.to_string(),
            filters: vec![
                DialogFilter::new("Markdown Files", "*.md"),
                DialogFilter::new("All Files", "*"),
            ],
        }
    }

    pub fn open_folder() -> Self {
        Self {
            title: OPEN_FOLDER_TITLE.to_string(),
            filters: Vec::new(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialogError {
    #[error("native dialogs are unavailable: {0}")]
    Unavailable(String),
    #[error("dialog failed: {0}")]
    Failed(String),
}

/// Shows native pickers on behalf of the backend.
///
/// `Ok(None)` means the user cancelled; errors are reserved for the dialog layer
/// itself failing.
pub trait DialogProvider {
    fn pick_file(&self, request: &DialogRequest) -> Result<Option<PathBuf>, DialogError>;
    fn pick_folder(&self, request: &DialogRequest) -> Result<Option<PathBuf>, DialogError>;
}

impl<P: DialogProvider + ?Sized> DialogProvider for Box<P> {
    fn pick_file(&self, request: &DialogRequest) -> Result<Option<PathBuf>, DialogError> {
        (**self).pick_file(request)
    }

    fn pick_folder(&self, request: &DialogRequest) -> Result<Option<PathBuf>, DialogError> {
        (**self).pick_folder(request)
    }
}

/// Provider for headless hosts: every request fails as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDialogs;

impl DialogProvider for NoDialogs {
    fn pick_file(&self, _request: &DialogRequest) -> Result<Option<PathBuf>, DialogError> {
        Err(DialogError::Unavailable("no dialog provider configured".into()))
    }

    fn pick_folder(&self, _request: &DialogRequest) -> Result<Option<PathBuf>, DialogError> {
        Err(DialogError::Unavailable("no dialog provider configured".into()))
    }
}

#[cfg(feature = "native-dialogs")]
const CATCH_ALL_EXTENSION: &str = "*";

/// Native pickers through `rfd`. Blocks the calling thread until the user answers.
#[cfg(feature = "native-dialogs")]
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdDialogs;

#[cfg(feature = "native-dialogs")]
impl RfdDialogs {
    // rfd only takes extension lists and turns each one into `*.<ext>`, so the
    // catch-all is passed as the `*` extension. Native pickers then show it as `*.*`,
    // which hides files that have no extension at all.
    fn build(request: &DialogRequest) -> rfd::FileDialog {
        request.filters.iter().fold(
            rfd::FileDialog::new().set_title(request.title.as_str()),
            |dialog, filter| {
                let extension = filter.extension().unwrap_or(CATCH_ALL_EXTENSION);
                dialog.add_filter(filter.name.as_str(), &[extension])
            },
        )
    }
}

#[cfg(feature = "native-dialogs")]
impl DialogProvider for RfdDialogs {
    fn pick_file(&self, request: &DialogRequest) -> Result<Option<PathBuf>, DialogError> {
        Ok(Self::build(request).pick_file())
    }

    fn pick_folder(&self, request: &DialogRequest) -> Result<Option<PathBuf>, DialogError> {
        Ok(Self::build(request).pick_folder())
    }
}
