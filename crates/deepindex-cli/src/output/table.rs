use deepindex_core::export::{display_row, CSV_HEADER};
use deepindex_core::model::SearchHit;

pub fn print(hits: &[SearchHit]) {
    print!("{}", format_hits(hits));
}

/// Render hits as a numbered table of file, page and snippet.
///
/// The path column is left out; it is still part of the CSV export.
pub fn format_hits(hits: &[SearchHit]) -> String {
    let rows: Vec<[String; 4]> = hits.iter().map(display_row).collect();

    let num_width = hits.len().to_string().len().max(1);
    let file_width = rows
        .iter()
        .map(|r| r[0].chars().count())
        .chain(std::iter::once(CSV_HEADER[0].len()))
        .max()
        .unwrap_or(4);
    let page_width = rows
        .iter()
        .map(|r| r[1].chars().count())
        .chain(std::iter::once(CSV_HEADER[1].len()))
        .max()
        .unwrap_or(7);

    let mut out = String::new();
    out.push_str(&format!(
        "{:>nw$}  {:<fw$}  {:<pw$}  {}\n",
        "#",
        CSV_HEADER[0],
        CSV_HEADER[1],
        CSV_HEADER[2],
        nw = num_width,
        fw = file_width,
        pw = page_width
    ));
    out.push_str(&format!(
        "{}\n",
        "-".repeat(num_width + file_width + page_width + 6 + CSV_HEADER[2].len())
    ));

    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>nw$}  {:<fw$}  {:<pw$}  {}\n",
            i + 1,
            row[0],
            row[1],
            row[2],
            nw = num_width,
            fw = file_width,
            pw = page_width
        ));
    }

    out.push_str(&format!("\n{} result(s)\n", rows.len()));
    out
}
