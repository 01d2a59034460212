use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use markforge_backend::{
    Backend, BackendConfig, BackendError, DialogProvider, ErrorKind, FileNode, HistoryKind,
    SessionCache,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MARKFORGE_LOG";

#[derive(Parser)]
#[command(
    name = "markforge-cli",
    about = "Inspect and drive the MarkForge editor backend",
    author,
    version
)]
struct Cli {
    /// 覆寫家目錄（快取位於其下的 .markforge/）。 / Home directory override; the cache lives under its .markforge/.
    #[arg(long, global = true, value_name = "PATH", env = "MARKFORGE_HOME")]
    home: Option<PathBuf>,
    /// 儲存時保留的最新瀏覽紀錄數量。 / Newest history entries kept when saving.
    #[arg(long, global = true, value_name = "N", env = "MARKFORGE_HISTORY_LIMIT")]
    history_limit: Option<usize>,
    /// 顯示除錯訊息。 / Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    /// 以 JSON 輸出錯誤。 / Report failures on stderr as `{"kind", "message"}` JSON.
    #[arg(long, global = true)]
    json_errors: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 輸出檔案內容。 / Print a file's text content.
    Read { path: PathBuf },
    /// 列出目錄的直接子項目。 / List the immediate children of a directory.
    List(ListArgs),
    /// 顯示家目錄。 / Print the resolved home directory.
    Home,
    /// 管理工作階段快取。 / Inspect or edit the session cache.
    #[command(subcommand)]
    Cache(CacheCommand),
    /// 管理瀏覽紀錄。 / Inspect or edit the navigation history.
    #[command(subcommand)]
    History(HistoryCommand),
    /// 開啟 Markdown 檔案選擇器。 / Show the Markdown file picker and print the choice.
    OpenFile,
    /// 開啟資料夾選擇器。 / Show the folder picker and print the choice.
    OpenFolder,
}

#[derive(Args)]
struct ListArgs {
    path: PathBuf,
    /// 以 JSON 輸出。 / Emit the nodes as JSON.
    #[arg(long)]
    json: bool,
    /// 僅保留資料夾與 Markdown 檔案。 / Keep only folders and Markdown files.
    #[arg(long)]
    markdown: bool,
    /// 資料夾優先並依名稱排序。 / Folders first, then by name.
    #[arg(long)]
    sorted: bool,
}

#[derive(Subcommand)]
enum CacheCommand {
    /// 顯示快取檔案路徑。 / Print the cache file location.
    Path,
    /// 輸出目前的快取紀錄。 / Print the stored record as JSON.
    Show,
    /// 以預設值覆寫快取。 / Overwrite the cache with defaults.
    Reset,
    /// 更新快取欄位。 / Update selected fields and save the record.
    Set(CacheSetArgs),
}

#[derive(Args)]
struct CacheSetArgs {
    #[arg(long, value_name = "PATH")]
    root: Option<String>,
    #[arg(long, value_name = "PIXELS")]
    sidebar_width: Option<u32>,
    #[arg(long, value_name = "PATH")]
    current_file: Option<String>,
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// 列出瀏覽紀錄（舊到新）。 / List entries, oldest first.
    List,
    /// 顯示最近一次瀏覽。 / Print the most recent entry.
    Last,
    /// 紀錄一次瀏覽。 / Record a visit to a file or folder.
    Visit {
        path: String,
        #[arg(long, value_enum, default_value_t = KindChoice::File)]
        kind: KindChoice,
    },
    /// 移除指定路徑。 / Remove the entry for a path.
    Remove { path: String },
    /// 清空紀錄。 / Remove every entry.
    Clear,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    File,
    #[value(alias = "dir")]
    Folder,
}

impl From<KindChoice> for HistoryKind {
    fn from(choice: KindChoice) -> Self {
        match choice {
            KindChoice::File => HistoryKind::File,
            KindChoice::Folder => HistoryKind::Folder,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json_errors = cli.json_errors;
    if let Err(err) = run(cli) {
        report_error(&err, json_errors);
        std::process::exit(1);
    }
}

fn report_error(err: &anyhow::Error, json_errors: bool) {
    if json_errors {
        if let Some(payload) = err.downcast_ref::<BackendError>().map(BackendError::payload) {
            if let Ok(json) = serde_json::to_string(&payload) {
                eprintln!("{json}");
                return;
            }
        }
    }
    eprintln!("Error: {err:#}");
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        home,
        history_limit,
        verbose,
        command,
        ..
    } = cli;
    init_logging(verbose);

    let config = BackendConfig {
        home_override: home,
        history_limit,
    };
    let backend = Backend::new(dialog_provider(), config);
    debug!(config = ?backend.config(), "backend ready");

    match command {
        Commands::Read { path } => execute_read(&backend, &path),
        Commands::List(args) => execute_list(&backend, args),
        Commands::Home => {
            println!("{}", backend.home_dir()?.display());
            Ok(())
        }
        Commands::Cache(subcommand) => execute_cache_command(&backend, subcommand),
        Commands::History(subcommand) => execute_history_command(&backend, subcommand),
        Commands::OpenFile => print_selection(backend.open_file_dialog()?),
        Commands::OpenFolder => print_selection(backend.open_folder_dialog()?),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(feature = "native-dialogs")]
fn dialog_provider() -> Box<dyn DialogProvider> {
    Box::new(markforge_backend::RfdDialogs)
}

#[cfg(not(feature = "native-dialogs"))]
fn dialog_provider() -> Box<dyn DialogProvider> {
    Box::new(markforge_backend::NoDialogs)
}

type CliBackend = Backend<Box<dyn DialogProvider>>;

fn execute_read(backend: &CliBackend, path: &Path) -> Result<()> {
    let text = backend.read_file(path)?;
    print!("{text}");
    Ok(())
}

fn execute_list(backend: &CliBackend, args: ListArgs) -> Result<()> {
    let mut nodes = backend.list_dir(&args.path)?;
    if args.markdown {
        nodes = markforge_backend::retain_markdown(nodes);
    }
    if args.sorted {
        markforge_backend::sort_for_display(&mut nodes);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&nodes).context("failed to encode listing")?;
        println!("{json}");
    } else {
        for node in &nodes {
            println!("{}", describe_node(node));
        }
    }
    Ok(())
}

fn describe_node(node: &FileNode) -> String {
    if node.is_dir {
        format!("{}/", node.name)
    } else {
        node.name.clone()
    }
}

fn execute_cache_command(backend: &CliBackend, command: CacheCommand) -> Result<()> {
    match command {
        CacheCommand::Path => {
            println!("{}", backend.cache_path()?.display());
        }
        CacheCommand::Show => {
            let state = backend.load_cache_state().map_err(with_reset_hint)?;
            if !state.is_stored() {
                eprintln!("No session cache stored yet; showing defaults.");
            }
            let cache = state.into_cache();
            let json = serde_json::to_string_pretty(&cache).context("failed to encode cache")?;
            println!("{json}");
        }
        CacheCommand::Reset => {
            backend.reset_cache()?;
            println!("Reset session cache at {}", backend.cache_path()?.display());
        }
        CacheCommand::Set(args) => {
            let mut cache = load_cache(backend)?;
            if let Some(root) = args.root {
                cache.root_path = root;
            }
            if let Some(width) = args.sidebar_width {
                cache.sidebar_width = width;
            }
            if let Some(current) = args.current_file {
                cache.current_file = current;
            }
            backend.save_cache(&cache)?;
            println!("Saved session cache to {}", backend.cache_path()?.display());
        }
    }
    Ok(())
}

fn execute_history_command(backend: &CliBackend, command: HistoryCommand) -> Result<()> {
    let mut cache = load_cache(backend)?;
    match command {
        HistoryCommand::List => {
            if cache.history.is_empty() {
                println!("No history recorded.");
            }
            for item in &cache.history {
                println!("{}\t{}", item.kind, item.path);
            }
            return Ok(());
        }
        HistoryCommand::Last => {
            match cache.last_visited() {
                Some(item) => println!("{}\t{}", item.kind, item.path),
                None => println!("No history recorded."),
            }
            return Ok(());
        }
        HistoryCommand::Visit { path, kind } => {
            cache.visit(path.clone(), kind.into(), backend.config().history_limit);
            println!("Recorded {} '{path}'", HistoryKind::from(kind));
        }
        HistoryCommand::Remove { path } => {
            if !cache.forget(&path) {
                return Err(anyhow!("'{path}' is not in the history"));
            }
            println!("Removed '{path}'");
        }
        HistoryCommand::Clear => {
            cache.clear_history();
            println!("Cleared history");
        }
    }
    backend.save_cache(&cache)?;
    Ok(())
}

fn load_cache(backend: &CliBackend) -> Result<SessionCache> {
    backend.load_cache().map_err(with_reset_hint)
}

fn with_reset_hint(err: BackendError) -> anyhow::Error {
    if err.kind() == ErrorKind::DecodeError {
        anyhow::Error::new(err)
            .context("session cache is unreadable; run `markforge-cli cache reset`")
    } else {
        err.into()
    }
}

fn print_selection(selection: Option<PathBuf>) -> Result<()> {
    match selection {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("No selection."),
    }
    Ok(())
}
