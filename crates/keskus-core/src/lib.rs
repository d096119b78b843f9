pub mod cache;
pub mod client;
pub mod decode;
pub mod error;
pub mod export;
pub mod model;
pub mod store;
pub mod summary;
pub mod symbols;

use decode::DecodedExtraction;
use error::KeskusError;
use store::ExtractionStore;
use summary::outcome::Summary;

/// Main API entry point: decode a raw extraction response and derive the
/// full summary view from it.
///
/// Equivalent to `decode_extraction` + `ExtractionStore::replace_all` +
/// `summary::summarize`, for callers that do not need to keep the store
/// around for cell edits.
pub fn summarize_extraction(raw_json: &str) -> Result<(Summary, DecodedExtraction), KeskusError> {
    let decoded = decode::decode_extraction(raw_json)?;
    let mut store = ExtractionStore::new();
    store.replace_all(decoded.pages.clone());
    let summary = summary::summarize(&store);
    Ok((summary, decoded))
}
