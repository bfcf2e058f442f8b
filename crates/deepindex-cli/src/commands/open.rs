use deepindex_core::error::DeepIndexError;
use deepindex_core::model::HitPage;
use deepindex_core::viewer;
use std::path::Path;

pub fn run(file: &Path, page: Option<usize>, keyword: &str) -> Result<(), DeepIndexError> {
    if !file.is_file() {
        return Err(DeepIndexError::ViewerLaunch(format!(
            "{} does not exist",
            file.display()
        )));
    }

    let page = match page {
        Some(n) if n >= 1 => HitPage::Number(n),
        Some(_) => {
            return Err(DeepIndexError::InvalidInput(
                "page numbers start at 1".into(),
            ))
        }
        None => HitPage::Number(1),
    };

    let opener = viewer::current_opener();
    opener.open_at(file, page, keyword)
}
