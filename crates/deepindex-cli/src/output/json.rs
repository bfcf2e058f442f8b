use deepindex_core::error::DeepIndexError;
use deepindex_core::model::SearchHit;

pub fn print(hits: &[SearchHit]) -> Result<(), DeepIndexError> {
    let json = serde_json::to_string_pretty(hits)?;
    println!("{json}");
    Ok(())
}
