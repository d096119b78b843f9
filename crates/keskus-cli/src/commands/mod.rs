pub mod cache;
pub mod export;
pub mod extract;
pub mod summary;
pub mod symbols;

use keskus_core::cache::SessionCache;
use keskus_core::error::KeskusError;
use std::path::PathBuf;

pub fn session_cache() -> Result<SessionCache, KeskusError> {
    SessionCache::default_dir()
        .map(SessionCache::new)
        .ok_or(KeskusError::NoCacheDir)
}

/// Load the raw extraction JSON from an explicit file, falling back to
/// the session cache.
pub fn load_raw_extraction(input_file: Option<PathBuf>) -> Result<String, KeskusError> {
    match input_file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => session_cache()?
            .load_extraction()?
            .ok_or(KeskusError::NoCachedExtraction),
    }
}
