//! Local cache of the last upload and its extraction result.
//!
//! Two independent string-keyed entries in a cache directory: the PDF as
//! a `data:application/pdf;base64,…` URL and the raw extraction response
//! JSON. Read once at startup to rehydrate, overwritten on each upload,
//! no schema versioning.

use crate::error::KeskusError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const PDF_ENTRY: &str = "uploaded.pdfurl";
const EXTRACTION_ENTRY: &str = "extraction.json";
const DATA_URL_PREFIX: &str = "data:application/pdf;base64,";

pub struct SessionCache {
    dir: PathBuf,
}

impl SessionCache {
    pub fn new(dir: impl Into<PathBuf>) -> SessionCache {
        SessionCache { dir: dir.into() }
    }

    /// `$KESKUS_CACHE_DIR`, falling back to `~/.keskus`.
    pub fn default_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os("KESKUS_CACHE_DIR") {
            return Some(PathBuf::from(dir));
        }
        std::env::var_os("HOME").map(|home| Path::new(&home).join(".keskus"))
    }

    pub fn store_pdf(&self, pdf_bytes: &[u8]) -> Result<(), KeskusError> {
        fs::create_dir_all(&self.dir)?;
        let url = format!("{DATA_URL_PREFIX}{}", STANDARD.encode(pdf_bytes));
        let path = self.dir.join(PDF_ENTRY);
        fs::write(&path, url)?;
        debug!(path = %path.display(), "cached uploaded PDF");
        Ok(())
    }

    pub fn load_pdf(&self) -> Result<Option<Vec<u8>>, KeskusError> {
        let path = self.dir.join(PDF_ENTRY);
        let url = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let encoded = url
            .trim_end()
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or_else(|| KeskusError::CacheCorrupt {
                path: path.clone(),
                reason: "missing data URL prefix".into(),
            })?;
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| KeskusError::CacheCorrupt {
                path,
                reason: e.to_string(),
            })?;
        Ok(Some(bytes))
    }

    pub fn store_extraction(&self, raw_json: &str) -> Result<(), KeskusError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(EXTRACTION_ENTRY);
        fs::write(&path, raw_json)?;
        debug!(path = %path.display(), "cached extraction response");
        Ok(())
    }

    pub fn load_extraction(&self) -> Result<Option<String>, KeskusError> {
        match fs::read_to_string(self.dir.join(EXTRACTION_ENTRY)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove both entries. Missing entries are not an error.
    pub fn clear(&self) -> Result<(), KeskusError> {
        for entry in [PDF_ENTRY, EXTRACTION_ENTRY] {
            match fs::remove_file(self.dir.join(entry)) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
