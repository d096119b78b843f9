use keskus_core::error::KeskusError;
use keskus_core::export::{build_export, default_export_filename, write_xlsx};
use keskus_core::model::DisplayOptions;
use std::path::PathBuf;

pub fn run(
    input_file: Option<PathBuf>,
    out: Option<PathBuf>,
    show_cable: bool,
    split_suoja: bool,
) -> Result<(), KeskusError> {
    let raw = super::load_raw_extraction(input_file)?;
    let (summary, _) = keskus_core::summarize_extraction(&raw)?;

    let opts = DisplayOptions {
        show_cable,
        separate_input_output: split_suoja,
    };
    let sheet = build_export(&summary, &opts);
    let bytes = write_xlsx(&sheet)?;

    let path = out.unwrap_or_else(|| PathBuf::from(default_export_filename()));
    std::fs::write(&path, bytes)?;

    println!(
        "Exported {} device(s) in {} group(s) to {}",
        summary.total_count,
        summary.unique_types,
        path.display()
    );
    Ok(())
}
