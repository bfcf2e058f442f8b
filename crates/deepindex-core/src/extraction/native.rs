use crate::error::DeepIndexError;
use crate::extraction::{PageText, PdfExtractor};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId};
use tracing::debug;

/// In-process PDF extraction backend built on `lopdf`.
///
/// Needs no external tools, at the cost of weaker text layout than
/// pdftotext for complex pages.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, DeepIndexError> {
        let mut doc = Document::load_mem(pdf_bytes)
            .map_err(|e| DeepIndexError::Extraction(format!("cannot open document: {e}")))?;

        // get_pages is keyed by page number, so iteration is already in page order.
        let mut pages = Vec::new();
        for (page_num, page_id) in doc.get_pages() {
            split_page_lines(&mut doc, page_id);
            let text = doc.extract_text(&[page_num]).map_err(|e| {
                DeepIndexError::Extraction(format!("cannot read page {page_num}: {e}"))
            })?;
            pages.push(PageText {
                page_number: page_num as usize,
                text,
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

/// Rewrite the page content so each text line sits in its own text object.
///
/// `Document::extract_text` only breaks lines at `ET`, which glues every
/// line of a text object together. When the content cannot be rewritten the
/// page is left as is.
fn split_page_lines(doc: &mut Document, page_id: ObjectId) {
    let rewritten = doc
        .get_page_content(page_id)
        .and_then(|data| Content::decode(&data))
        .and_then(|content| split_text_objects(content.operations).encode());

    match rewritten {
        Ok(data) => {
            if let Err(e) = doc.change_page_content(page_id, data) {
                debug!("cannot replace content of page {:?}: {}", page_id, e);
            }
        }
        Err(e) => debug!("cannot split lines of page {:?}: {}", page_id, e),
    }
}

/// Close and reopen the text object wherever the operators move to a new
/// line. `'` and `"` are turned into `Tj`, the only show operators besides
/// `TJ` that extraction reads.
fn split_text_objects(operations: Vec<Operation>) -> Content {
    let mut out = Vec::with_capacity(operations.len());
    let mut last_y: Option<f32> = None;

    for op in operations {
        match op.operator.as_str() {
            "BT" => {
                last_y = None;
                out.push(op);
            }
            "Td" | "TD" => {
                let dy = op.operands.get(1).and_then(|o| o.as_float().ok()).unwrap_or(0.0);
                if dy != 0.0 {
                    push_line_break(&mut out);
                }
                out.push(op);
            }
            "T*" => {
                push_line_break(&mut out);
                out.push(op);
            }
            "Tm" => {
                let y = op.operands.get(5).and_then(|o| o.as_float().ok());
                if last_y.is_some() && y != last_y {
                    push_line_break(&mut out);
                }
                last_y = y;
                out.push(op);
            }
            "'" => {
                push_line_break(&mut out);
                out.push(show_text(op.operands.into_iter().next()));
            }
            "\"" => {
                push_line_break(&mut out);
                out.push(show_text(op.operands.into_iter().nth(2)));
            }
            _ => out.push(op),
        }
    }

    Content { operations: out }
}

fn push_line_break(out: &mut Vec<Operation>) {
    out.push(Operation::new("ET", vec![]));
    out.push(Operation::new("BT", vec![]));
}

fn show_text(text: Option<Object>) -> Operation {
    Operation::new("Tj", text.into_iter().collect())
}
