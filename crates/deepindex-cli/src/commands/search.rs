use deepindex_core::config::FolderStore;
use deepindex_core::error::DeepIndexError;
use deepindex_core::extraction::Backend;
use deepindex_core::session::SearchSession;
use deepindex_core::viewer;
use std::path::PathBuf;

use crate::output;

pub struct SearchRequest {
    pub folder: Option<PathBuf>,
    pub keyword: String,
    pub output_format: String,
    pub csv: Option<PathBuf>,
    pub backend: String,
    pub open: Option<usize>,
}

pub fn run(store: FolderStore, request: SearchRequest) -> Result<(), DeepIndexError> {
    let backend: Backend = request.backend.parse()?;
    let mut session = SearchSession::load(store);

    // An explicit folder counts as selecting it.
    if let Some(folder) = &request.folder {
        session.select_folder(folder)?;
    }

    let extractor = backend.build();
    let hits = session.search(&request.keyword, extractor.as_ref())?;

    if hits.is_empty() {
        eprintln!("No matching results found.");
        return Ok(());
    }

    match request.output_format.as_str() {
        "json" => output::json::print(hits)?,
        _ => output::table::print(hits),
    }

    if let Some(path) = &request.csv {
        let saved = session.export_csv(path)?;
        eprintln!("Results saved to: {}", saved.display());
    }

    if let Some(n) = request.open {
        // Results are numbered from 1.
        let index = n.checked_sub(1).ok_or(DeepIndexError::HitOutOfRange {
            index: 0,
            len: session.hits().len(),
        })?;
        let opener = viewer::current_opener();
        session.open_hit(index, opener.as_ref())?;
    }

    Ok(())
}
