pub mod native;
pub mod pdftotext;

use crate::error::DeepIndexError;
use std::fmt;
use std::str::FromStr;

/// Plain text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageText {
    /// 1-based page number.
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageText per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, DeepIndexError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// pdftotext when installed, lopdf otherwise.
    #[default]
    Auto,
    Pdftotext,
    Lopdf,
}

impl Backend {
    pub fn build(self) -> Box<dyn PdfExtractor> {
        match self {
            Backend::Pdftotext => Box::new(pdftotext::PdftotextExtractor::new()),
            Backend::Lopdf => Box::new(native::LopdfExtractor::new()),
            Backend::Auto => {
                if pdftotext::PdftotextExtractor::is_available() {
                    Box::new(pdftotext::PdftotextExtractor::new())
                } else {
                    tracing::debug!("pdftotext not available, using lopdf");
                    Box::new(native::LopdfExtractor::new())
                }
            }
        }
    }
}

impl FromStr for Backend {
    type Err = DeepIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "pdftotext" => Ok(Backend::Pdftotext),
            "lopdf" => Ok(Backend::Lopdf),
            other => Err(DeepIndexError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Auto => write!(f, "auto"),
            Backend::Pdftotext => write!(f, "pdftotext"),
            Backend::Lopdf => write!(f, "lopdf"),
        }
    }
}
