use keskus_core::client::{ExtractClient, DEFAULT_BASE_URL};
use keskus_core::decode::decode_extraction;
use keskus_core::error::KeskusError;
use std::path::PathBuf;

pub fn run(
    pdf_file: PathBuf,
    base_url: Option<String>,
    out: Option<PathBuf>,
) -> Result<(), KeskusError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let file_name = pdf_file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.pdf");

    let client = ExtractClient::new(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
    let raw = client.extract(pdf_bytes.clone(), file_name)?;

    // Decode before caching so a garbage response is rejected up front
    let decoded = decode_extraction(&raw)?;

    let cache = super::session_cache()?;
    cache.store_pdf(&pdf_bytes)?;
    cache.store_extraction(&raw)?;

    if let Some(path) = &out {
        std::fs::write(path, &raw)?;
    }

    let row_count: usize = decoded
        .pages
        .values()
        .map(|rows| rows.iter().filter(|r| !r.is_empty()).count())
        .sum();
    println!(
        "Extracted {} page(s), {} device row(s)",
        decoded.pages.len(),
        row_count
    );
    if let Some(path) = &out {
        println!("Raw response written to {}", path.display());
    }

    if !decoded.warnings.is_empty() {
        eprintln!("{} warning(s) during decode:", decoded.warnings.len());
        for w in &decoded.warnings {
            match w.page_number {
                Some(p) => eprintln!("  page {}: {}", p, w.message),
                None => eprintln!("  {}", w.message),
            }
        }
    }

    Ok(())
}
