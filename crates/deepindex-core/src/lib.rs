pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod scan;
pub mod session;
pub mod viewer;

use error::DeepIndexError;
use extraction::PdfExtractor;
use model::SearchHit;
use std::path::Path;

/// Main API entry point: search the PDFs directly inside `folder` for
/// `keyword`, case-insensitively.
///
/// Unreadable PDFs are reported as error-flagged hits in the result rather
/// than as an error; the call fails only when the folder cannot be listed.
pub fn search_folder(
    folder: &Path,
    keyword: &str,
    extractor: &dyn PdfExtractor,
) -> Result<Vec<SearchHit>, DeepIndexError> {
    scan::scan(folder, keyword, extractor)
}
