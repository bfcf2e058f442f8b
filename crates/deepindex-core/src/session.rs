use crate::config::FolderStore;
use crate::error::DeepIndexError;
use crate::export;
use crate::extraction::PdfExtractor;
use crate::model::SearchHit;
use crate::scan;
use crate::viewer::PageOpener;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// State owned by the front end between user actions: the selected folder,
/// the keyword of the last search and its results.
pub struct SearchSession {
    store: FolderStore,
    folder: PathBuf,
    keyword: String,
    hits: Vec<SearchHit>,
}

impl SearchSession {
    /// Start a session with the folder saved by a previous run, if any.
    pub fn load(store: FolderStore) -> Self {
        let folder = PathBuf::from(store.load());
        if !folder.as_os_str().is_empty() {
            info!("restored last folder {}", folder.display());
        }
        SearchSession {
            store,
            folder,
            keyword: String::new(),
            hits: Vec::new(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    /// Make `folder` the current folder and remember it for the next run.
    ///
    /// A folder that cannot be listed is rejected and the current and saved
    /// folders stay as they were.
    pub fn select_folder(&mut self, folder: &Path) -> Result<(), DeepIndexError> {
        fs::read_dir(folder).map_err(|source| DeepIndexError::DirectoryAccess {
            path: folder.to_path_buf(),
            source,
        })?;
        self.folder = folder.to_path_buf();
        // config.txt is text; a lossy copy would point at another folder.
        match folder.to_str() {
            Some(text) => self.store.save(text),
            None => warn!("folder {} is not valid UTF-8 and will not be remembered", folder.display()),
        }
        Ok(())
    }

    /// Search the current folder, replacing the previous results.
    ///
    /// On error the previous results are kept.
    pub fn search(
        &mut self,
        keyword: &str,
        extractor: &dyn PdfExtractor,
    ) -> Result<&[SearchHit], DeepIndexError> {
        let keyword = keyword.trim();
        if self.folder.as_os_str().is_empty() || keyword.is_empty() {
            return Err(DeepIndexError::InvalidInput(
                "choose a folder and enter a keyword".into(),
            ));
        }

        let hits = scan::scan(&self.folder, keyword, extractor)?;
        self.keyword = keyword.to_string();
        self.hits = hits;
        Ok(&self.hits)
    }

    /// Export the current results as CSV.
    pub fn export_csv(&self, path: &Path) -> Result<PathBuf, DeepIndexError> {
        export::export_csv(&self.hits, path)?;
        info!("exported {} result(s) to {}", self.hits.len(), path.display());
        Ok(path.to_path_buf())
    }

    /// Open result `index` (0-based) at its page, searching for the session keyword.
    pub fn open_hit(&self, index: usize, opener: &dyn PageOpener) -> Result<(), DeepIndexError> {
        let hit = self.hits.get(index).ok_or(DeepIndexError::HitOutOfRange {
            index: index + 1,
            len: self.hits.len(),
        })?;
        info!("opening {} page {} with {}", hit.path.display(), hit.page, opener.name());
        opener.open_at(&hit.path, hit.page, &self.keyword)
    }
}
