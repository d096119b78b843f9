use crate::error::KeskusError;
use crate::export::{Cell, ExportSheet};
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;

/// Serialize a projected sheet to xlsx bytes.
pub fn write_xlsx(sheet: &ExportSheet) -> Result<Vec<u8>, KeskusError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet.name)?;

    for (r, row) in sheet.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Empty => {}
                Cell::Text(s) => {
                    worksheet.write_string(r as u32, c as u16, s.as_str())?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(r as u32, c as u16, *n)?;
                }
            }
        }
    }

    for (c, width) in sheet.column_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *width)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Download filename: `device-summary-<ISO-date>.xlsx`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("device-summary-{}.xlsx", date.format("%Y-%m-%d"))
}

/// `export_filename` for today's local date.
pub fn default_export_filename() -> String {
    export_filename(chrono::Local::now().date_naive())
}
