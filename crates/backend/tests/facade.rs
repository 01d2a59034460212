use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use markforge_backend::{
    Backend, BackendConfig, DialogError, DialogProvider, DialogRequest, ErrorKind, HistoryItem,
    HistoryKind, SessionCache,
};
use tempfile::tempdir;

/// Scripted picker that records every request it receives.
struct StubDialogs {
    answer: Result<Option<PathBuf>, DialogError>,
    requests: Mutex<Vec<DialogRequest>>,
}

impl StubDialogs {
    fn answering(answer: Result<Option<PathBuf>, DialogError>) -> Self {
        Self {
            answer,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<DialogRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl DialogProvider for StubDialogs {
    fn pick_file(&self, request: &DialogRequest) -> Result<Option<PathBuf>, DialogError> {
        self.requests.lock().unwrap().push(request.clone());
        self.answer.clone()
    }

    fn pick_folder(&self, request: &DialogRequest) -> Result<Option<PathBuf>, DialogError> {
        self.requests.lock().unwrap().push(request.clone());
        self.answer.clone()
    }
}

fn backend_in(home: &std::path::Path, dialogs: StubDialogs) -> Backend<StubDialogs> {
    Backend::new(dialogs, BackendConfig::default().with_home(home))
}

#[test]
fn first_run_loads_defaults() {
    let home = tempdir().unwrap();
    let backend = backend_in(home.path(), StubDialogs::answering(Ok(None)));
    let cache = backend.load_cache().unwrap();
    assert_eq!(cache, SessionCache::default());

    let state = backend.load_cache_state().unwrap();
    assert!(!state.is_stored());
    backend.save_cache(&state.into_cache()).unwrap();
    assert!(backend.load_cache_state().unwrap().is_stored());
}

#[test]
fn session_round_trips_through_facade() {
    let home = tempdir().unwrap();
    let backend = backend_in(home.path(), StubDialogs::answering(Ok(None)));
    let cache = SessionCache {
        root_path: "/proj".into(),
        sidebar_width: 250,
        current_file: "/proj/readme.md".into(),
        history: vec![
            HistoryItem::new("/proj", HistoryKind::Folder),
            HistoryItem::new("/proj/readme.md", HistoryKind::File),
        ],
    };

    backend.save_cache(&cache).unwrap();
    assert!(home.path().join(".markforge/cache.json").is_file());
    assert_eq!(backend.load_cache().unwrap(), cache);
}

#[test]
fn corrupt_cache_surfaces_decode_error_until_reset() {
    let home = tempdir().unwrap();
    let backend = backend_in(home.path(), StubDialogs::answering(Ok(None)));
    let cache_path = backend.cache_path().unwrap();
    fs::create_dir_all(cache_path.parent().unwrap()).unwrap();
    fs::write(&cache_path, "]]").unwrap();

    let err = backend.load_cache().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeError);

    assert_eq!(backend.reset_cache().unwrap(), SessionCache::default());
    assert_eq!(backend.load_cache().unwrap(), SessionCache::default());
}

#[test]
fn history_limit_keeps_newest_entries_on_save() {
    let home = tempdir().unwrap();
    let backend = Backend::new(
        StubDialogs::answering(Ok(None)),
        BackendConfig::default()
            .with_home(home.path())
            .with_history_limit(2),
    );
    let mut cache = SessionCache::default();
    for name in ["a", "b", "c"] {
        cache.visit(format!("/notes/{name}.md"), HistoryKind::File, None);
    }

    backend.save_cache(&cache).unwrap();
    let loaded = backend.load_cache().unwrap();
    let paths: Vec<_> = loaded.history.iter().map(|item| item.path.as_str()).collect();
    assert_eq!(paths, vec!["/notes/b.md", "/notes/c.md"]);
    assert_eq!(loaded.current_file, "/notes/c.md");
}

#[test]
fn filesystem_errors_keep_their_kind() {
    let home = tempdir().unwrap();
    let backend = backend_in(home.path(), StubDialogs::answering(Ok(None)));
    let file = home.path().join("note.md");
    fs::write(&file, "# note").unwrap();

    assert_eq!(backend.read_file(&file).unwrap(), "# note");
    assert_eq!(
        backend.list_dir(home.path().join("missing")).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        backend.list_dir(&file).unwrap_err().kind(),
        ErrorKind::NotADirectory
    );

    let binary = home.path().join("image.png");
    fs::write(&binary, [0x89, 0x50, 0x4e, 0x47, 0xff, 0xff]).unwrap();
    assert_eq!(
        backend.read_file(&binary).unwrap_err().kind(),
        ErrorKind::DecodeError
    );
}

#[test]
fn expand_dir_lists_children_of_node() {
    let home = tempdir().unwrap();
    fs::create_dir_all(home.path().join("docs")).unwrap();
    fs::write(home.path().join("docs/a.md"), "a").unwrap();
    let backend = backend_in(home.path(), StubDialogs::answering(Ok(None)));

    let roots = backend.list_dir(home.path()).unwrap();
    let docs = roots.iter().find(|node| node.name == "docs").unwrap();
    let expanded = backend.expand_dir(docs).unwrap();
    assert_eq!(expanded.children.len(), 1);
    assert_eq!(expanded.children[0].name, "a.md");
}

#[test]
fn file_dialog_uses_markdown_filters_and_returns_selection() {
    let home = tempdir().unwrap();
    let chosen = PathBuf::from("/proj/readme.md");
    let backend = backend_in(
        home.path(),
        StubDialogs::answering(Ok(Some(chosen.clone()))),
    );

    assert_eq!(backend.open_file_dialog().unwrap(), Some(chosen));
    let requests = backend.dialogs().requests();
    assert_eq!(requests.len(), 1);
    let patterns: Vec<_> = requests[0]
        .filters
        .iter()
        .map(|filter| filter.pattern.as_str())
        .collect();
    assert_eq!(patterns, vec!["*.md", "*"]);
}

#[test]
fn folder_dialog_has_no_filters() {
    let home = tempdir().unwrap();
    let backend = backend_in(
        home.path(),
        StubDialogs::answering(Ok(Some(PathBuf::from("/proj")))),
    );

    assert_eq!(
        backend.open_folder_dialog().unwrap(),
        Some(PathBuf::from("/proj"))
    );
    assert!(backend.dialogs().requests()[0].filters.is_empty());
}

#[test]
fn cancelled_dialog_is_not_an_error() {
    let home = tempdir().unwrap();
    let backend = backend_in(home.path(), StubDialogs::answering(Ok(None)));
    assert_eq!(backend.open_folder_dialog().unwrap(), None);

    let backend = backend_in(
        home.path(),
        StubDialogs::answering(Ok(Some(PathBuf::new()))),
    );
    assert_eq!(backend.open_file_dialog().unwrap(), None);
}

#[test]
fn dialog_failure_is_dialog_error() {
    let home = tempdir().unwrap();
    let backend = backend_in(
        home.path(),
        StubDialogs::answering(Err(DialogError::Failed("no display".into()))),
    );
    let err = backend.open_folder_dialog().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DialogError);
}
