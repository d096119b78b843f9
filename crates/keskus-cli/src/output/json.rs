use keskus_core::error::KeskusError;
use keskus_core::summary::outcome::Summary;

pub fn print(summary: &Summary) -> Result<(), KeskusError> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{json}");
    Ok(())
}
