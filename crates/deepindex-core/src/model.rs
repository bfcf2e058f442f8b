use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Page column of a hit: a 1-based page number, or the marker for a file
/// that could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitPage {
    Number(usize),
    Error,
}

impl HitPage {
    pub fn number(&self) -> Option<usize> {
        match self {
            HitPage::Number(n) => Some(*n),
            HitPage::Error => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, HitPage::Error)
    }
}

impl fmt::Display for HitPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitPage::Number(n) => write!(f, "{n}"),
            HitPage::Error => write!(f, "Error"),
        }
    }
}

/// One keyword occurrence, or a stand-in for a file that failed to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// File name without the folder.
    pub file_name: String,
    pub page: HitPage,
    /// Trimmed line containing the keyword, or the error message for an
    /// error-flagged hit.
    pub snippet: String,
    /// Full path of the source file.
    pub path: PathBuf,
}

impl SearchHit {
    pub fn matched(file_name: &str, page_number: usize, line: &str, path: PathBuf) -> Self {
        SearchHit {
            file_name: file_name.to_string(),
            page: HitPage::Number(page_number),
            snippet: line.trim().to_string(),
            path,
        }
    }

    pub fn failed(file_name: &str, message: String, path: PathBuf) -> Self {
        SearchHit {
            file_name: file_name.to_string(),
            page: HitPage::Error,
            snippet: message,
            path,
        }
    }

    pub fn is_error(&self) -> bool {
        self.page.is_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_display() {
        assert_eq!(HitPage::Number(3).to_string(), "3");
        assert_eq!(HitPage::Error.to_string(), "Error");
    }

    #[test]
    fn test_matched_hit_trims_line() {
        let hit = SearchHit::matched("a.pdf", 2, "   foo keyword bar \r", PathBuf::from("/x/a.pdf"));
        assert_eq!(hit.snippet, "foo keyword bar");
        assert_eq!(hit.page.number(), Some(2));
        assert!(!hit.is_error());
    }
}
