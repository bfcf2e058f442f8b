use crate::error::DeepIndexError;
use crate::model::SearchHit;
use std::io::Write;
use std::path::Path;

/// Header row of the exported CSV. Labels match the result table.
pub const CSV_HEADER: [&str; 4] = ["File", "Halaman", "Cuplikan", "Path"];

/// The four displayed columns of a hit, in header order.
///
/// An error-flagged hit shows `Error` as its page and the error message as
/// its snippet.
pub fn display_row(hit: &SearchHit) -> [String; 4] {
    [
        hit.file_name.clone(),
        hit.page.to_string(),
        hit.snippet.clone(),
        hit.path.display().to_string(),
    ]
}

/// Write `hits` as CSV to `path`, replacing any existing file.
pub fn export_csv(hits: &[SearchHit], path: &Path) -> Result<(), DeepIndexError> {
    let file = std::fs::File::create(path).map_err(|e| DeepIndexError::Export {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    write_csv(hits, file).map_err(|e| DeepIndexError::Export {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write `hits` as CSV to any writer.
pub fn write_csv<W: Write>(hits: &[SearchHit], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for hit in hits {
        writer.write_record(display_row(hit))?;
    }
    writer.flush()?;
    Ok(())
}
