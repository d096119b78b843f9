use keskus_core::error::KeskusError;
use keskus_core::symbols::SYMBOLS;

pub fn list() -> Result<(), KeskusError> {
    println!("Known panel symbols:\n");
    let max_id = SYMBOLS.iter().map(|s| s.id.len()).max().unwrap_or(12);
    for symbol in SYMBOLS {
        println!("  {:<width$}  {}", symbol.id, symbol.name, width = max_id);
        println!(
            "  {:<width$}  api: {}",
            "",
            symbol.api_id,
            width = max_id
        );
        println!();
    }
    Ok(())
}
