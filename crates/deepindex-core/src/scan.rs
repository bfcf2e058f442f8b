use crate::error::DeepIndexError;
use crate::extraction::{PageText, PdfExtractor};
use crate::model::SearchHit;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Scan every PDF directly inside `folder` for `keyword`.
///
/// Matching is case-insensitive and line-based: a page is considered only if
/// its whole text contains the keyword, and then each line containing the
/// keyword becomes one hit. A keyword that only matches across a line break
/// therefore produces no hits for that page.
///
/// Files that cannot be read or extracted show up as a single error-flagged
/// hit and do not stop the scan. Only a folder that cannot be listed is an
/// error. Files are visited in file name order.
pub fn scan(
    folder: &Path,
    keyword: &str,
    extractor: &dyn PdfExtractor,
) -> Result<Vec<SearchHit>, DeepIndexError> {
    let files = list_pdf_files(folder)?;
    info!(
        "scanning {} PDF file(s) in {} with {}",
        files.len(),
        folder.display(),
        extractor.backend_name()
    );

    let needle = keyword.to_lowercase();
    let mut hits = Vec::new();
    let mut failures = 0;

    for path in files {
        let file_name = file_name_of(&path);
        match read_pages(&path, extractor) {
            Ok(pages) => {
                let before = hits.len();
                for page in &pages {
                    for line in matching_lines(&page.text, &needle) {
                        hits.push(SearchHit::matched(
                            &file_name,
                            page.page_number,
                            line,
                            path.clone(),
                        ));
                    }
                }
                debug!(
                    "{}: {} page(s), {} hit(s)",
                    file_name,
                    pages.len(),
                    hits.len() - before
                );
            }
            Err(e) => {
                warn!("{}: {}", path.display(), e);
                failures += 1;
                hits.push(SearchHit::failed(&file_name, e.to_string(), path));
            }
        }
    }

    info!("scan finished: {} hit(s), {} unreadable file(s)", hits.len(), failures);
    Ok(hits)
}

/// Regular files in `folder` whose name ends in `.pdf`, any case, sorted by name.
pub fn list_pdf_files(folder: &Path) -> Result<Vec<PathBuf>, DeepIndexError> {
    let entries = fs::read_dir(folder).map_err(|source| DeepIndexError::DirectoryAccess {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DeepIndexError::DirectoryAccess {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if is_pdf_name(&entry.file_name().to_string_lossy()) && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The document bytes live only for the duration of this call.
fn read_pages(path: &Path, extractor: &dyn PdfExtractor) -> Result<Vec<PageText>, DeepIndexError> {
    let bytes = fs::read(path)?;
    extractor.extract_pages(&bytes)
}

/// Lines of `page_text` that contain `needle`, which must already be lowercase.
///
/// Returns nothing unless the page as a whole contains the needle.
pub fn matching_lines<'a>(page_text: &'a str, needle: &str) -> Vec<&'a str> {
    if !page_text.to_lowercase().contains(needle) {
        return Vec::new();
    }

    page_text
        .split('\n')
        .filter(|line| line.to_lowercase().contains(needle))
        .collect()
}
