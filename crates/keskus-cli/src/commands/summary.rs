use keskus_core::error::KeskusError;
use keskus_core::model::DisplayOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: Option<PathBuf>,
    output_format: &str,
    show_cable: bool,
    split_suoja: bool,
) -> Result<(), KeskusError> {
    let raw = super::load_raw_extraction(input_file)?;
    let (summary, decoded) = keskus_core::summarize_extraction(&raw)?;

    let opts = DisplayOptions {
        show_cable,
        separate_input_output: split_suoja,
    };

    match output_format {
        "json" => output::json::print(&summary)?,
        _ => output::table::print(&summary, &opts),
    }

    if !decoded.warnings.is_empty() {
        eprintln!("{} decode warning(s); see `keskus extract` output", decoded.warnings.len());
    }

    Ok(())
}
