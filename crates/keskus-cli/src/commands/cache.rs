use keskus_core::decode::decode_extraction;
use keskus_core::error::KeskusError;

pub fn show() -> Result<(), KeskusError> {
    let cache = super::session_cache()?;

    match cache.load_pdf()? {
        Some(bytes) => println!("Cached PDF: {} KiB", bytes.len().div_ceil(1024)),
        None => println!("Cached PDF: none"),
    }

    match cache.load_extraction()? {
        Some(raw) => {
            let decoded = decode_extraction(&raw)?;
            let rows: usize = decoded
                .pages
                .values()
                .map(|r| r.iter().filter(|d| !d.is_empty()).count())
                .sum();
            println!(
                "Cached extraction: {} page(s), {} device row(s)",
                decoded.pages.len(),
                rows
            );
        }
        None => println!("Cached extraction: none"),
    }

    Ok(())
}

pub fn clear() -> Result<(), KeskusError> {
    super::session_cache()?.clear()?;
    println!("Cache cleared");
    Ok(())
}
