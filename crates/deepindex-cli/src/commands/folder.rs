use deepindex_core::config::FolderStore;
use deepindex_core::error::DeepIndexError;
use deepindex_core::session::SearchSession;
use std::path::PathBuf;

pub fn run(store: FolderStore, path: Option<PathBuf>) -> Result<(), DeepIndexError> {
    let mut session = SearchSession::load(store);

    match path {
        Some(path) => {
            session.select_folder(&path)?;
            println!("{}", session.folder().display());
        }
        None => {
            if session.folder().as_os_str().is_empty() {
                eprintln!("No folder selected yet. Run `deepindex folder <PATH>` to choose one.");
            } else {
                println!("{}", session.folder().display());
            }
        }
    }

    Ok(())
}
