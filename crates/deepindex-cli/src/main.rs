mod commands;
mod output;

use clap::{Parser, Subcommand};
use deepindex_core::config::{FolderStore, CONFIG_DIR_ENV};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "deepindex",
    version,
    about = "Search the PDF files of a folder for a keyword"
)]
struct Cli {
    /// Directory holding config.txt (the remembered folder)
    #[arg(long, global = true, env = CONFIG_DIR_ENV, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every PDF in a folder (not its subfolders) for a keyword
    Search {
        /// Folder to search (default: the last selected folder)
        folder: Option<PathBuf>,

        /// Keyword to look for, case-insensitive
        #[arg(short, long)]
        keyword: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Save the results as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Text extraction backend: auto, pdftotext or lopdf
        #[arg(short, long, default_value = "auto")]
        backend: String,

        /// Open result number N in the PDF viewer
        #[arg(long, value_name = "N")]
        open: Option<usize>,
    },
    /// Open a PDF in the viewer, optionally at a page and searching a keyword
    Open {
        /// Path to the PDF file
        file: PathBuf,

        /// Page to show
        #[arg(short, long)]
        page: Option<usize>,

        /// Keyword to search for in the viewer
        #[arg(short, long, default_value = "")]
        keyword: String,
    },
    /// Show the remembered folder, or select a new one
    Folder {
        /// Folder to remember
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = FolderStore::resolve(cli.config_dir.as_deref());
    let result = match cli.command {
        Commands::Search {
            folder,
            keyword,
            output,
            csv,
            backend,
            open,
        } => commands::search::run(
            store,
            commands::search::SearchRequest {
                folder,
                keyword,
                output_format: output,
                csv,
                backend,
                open,
            },
        ),
        Commands::Open {
            file,
            page,
            keyword,
        } => commands::open::run(&file, page, &keyword),
        Commands::Folder { path } => commands::folder::run(store, path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so table and JSON output on stdout stay clean. Colors
/// only when stderr is a terminal.
fn init_tracing(verbose: bool) {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
