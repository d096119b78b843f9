//! Export projection: the column-labeled tabular form consumed by the
//! spreadsheet sink.
//!
//! Columns are ordered `(header, accessor)` pairs built once per export
//! call from the two display flags, so a block can never mix column sets
//! and there is no positional column bookkeeping anywhere.

pub mod xlsx;

use crate::model::{DeviceRow, DisplayOptions};
use crate::summary::outcome::{AggregatedItem, Summary};
use crate::summary::protection::split_suoja;

pub use xlsx::{default_export_filename, export_filename, write_xlsx};

/// One spreadsheet cell. Counts and page numbers stay numeric so the
/// sink writes real numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(s: impl Into<String>) -> Cell {
        Cell::Text(s.into())
    }
}

/// The projected sheet: rows of typed cells plus column widths.
#[derive(Debug, Clone)]
pub struct ExportSheet {
    pub name: &'static str,
    pub rows: Vec<Vec<Cell>>,
    pub column_widths: Vec<f64>,
}

struct Column<T> {
    header: &'static str,
    width: f64,
    value: Box<dyn Fn(&T) -> Cell>,
}

fn summary_columns(opts: &DisplayOptions) -> Vec<Column<AggregatedItem>> {
    let mut columns: Vec<Column<AggregatedItem>> = vec![Column {
        header: "Type",
        width: 25.0,
        value: Box::new(|item| Cell::text(item.icons.join(" + "))),
    }];

    if opts.separate_input_output {
        columns.push(Column {
            header: "Suoja Input",
            width: 12.0,
            value: Box::new(|item| Cell::text(split_suoja(&item.suoja, true).input)),
        });
        columns.push(Column {
            header: "Suoja Output",
            width: 12.0,
            value: Box::new(|item| {
                Cell::text(split_suoja(&item.suoja, true).output.unwrap_or_default())
            }),
        });
    } else {
        columns.push(Column {
            header: "Suoja",
            width: 12.0,
            value: Box::new(|item| Cell::text(item.suoja.clone())),
        });
    }

    if opts.show_cable {
        columns.push(Column {
            header: "Cable Types",
            width: 20.0,
            value: Box::new(|item| {
                let mut text = item.kaapeli_types.join(", ");
                if item.has_cable_mismatch {
                    text.push_str(" ⚠ MISMATCH");
                }
                Cell::text(text)
            }),
        });
    }

    columns.push(Column {
        header: "Quantity",
        width: 10.0,
        value: Box::new(|item| Cell::Number(item.count as f64)),
    });

    columns
}

fn device_columns(opts: &DisplayOptions) -> Vec<Column<DeviceRow>> {
    let mut columns: Vec<Column<DeviceRow>> = vec![
        Column {
            header: "Page",
            width: 8.0,
            value: Box::new(|d| Cell::Number(d.page_number as f64)),
        },
        Column {
            header: "Type",
            width: 25.0,
            value: Box::new(|d| Cell::text(d.icons.join(" + "))),
        },
        Column {
            header: "NRo",
            width: 10.0,
            value: Box::new(|d| Cell::text(d.nro.clone())),
        },
        Column {
            header: "Kuvateksti",
            width: 30.0,
            value: Box::new(|d| Cell::text(d.kuvateksti.clone())),
        },
    ];

    if opts.separate_input_output {
        columns.push(Column {
            header: "Suoja Input",
            width: 12.0,
            value: Box::new(|d| Cell::text(split_suoja(&d.suoja, true).input)),
        });
        columns.push(Column {
            header: "Suoja Output",
            width: 12.0,
            value: Box::new(|d| {
                Cell::text(split_suoja(&d.suoja, true).output.unwrap_or_default())
            }),
        });
    } else {
        columns.push(Column {
            header: "Suoja",
            width: 12.0,
            value: Box::new(|d| Cell::text(d.suoja.clone())),
        });
    }

    if opts.show_cable {
        columns.push(Column {
            header: "Kaapeli",
            width: 20.0,
            value: Box::new(|d| Cell::text(d.kaapeli.clone())),
        });
    }

    columns
}

fn header_row<T>(columns: &[Column<T>]) -> Vec<Cell> {
    columns.iter().map(|c| Cell::text(c.header)).collect()
}

fn value_row<T>(columns: &[Column<T>], item: &T) -> Vec<Cell> {
    columns.iter().map(|c| (c.value)(item)).collect()
}

/// Project a summary into the three-block export sheet: device summary,
/// protection breakdown, and the full raw device list.
pub fn build_export(summary: &Summary, opts: &DisplayOptions) -> ExportSheet {
    let summary_cols = summary_columns(opts);
    let device_cols = device_columns(opts);

    let mut rows: Vec<Vec<Cell>> = Vec::new();

    // Block 1: aggregated device summary
    rows.push(vec![Cell::text("DEVICE SUMMARY")]);
    rows.push(header_row(&summary_cols));
    for item in &summary.items {
        rows.push(value_row(&summary_cols, item));
    }

    // Total row: label in the column before Quantity, value under Quantity
    let mut total_row = vec![Cell::Empty; summary_cols.len()];
    total_row[summary_cols.len() - 2] = Cell::text("TOTAL:");
    total_row[summary_cols.len() - 1] = Cell::Number(summary.total_count as f64);
    rows.push(total_row);

    rows.push(Vec::new());

    // Block 2: protection breakdown
    rows.push(vec![Cell::text("BY PROTECTION VALUE")]);
    rows.push(vec![
        Cell::text("Suoja"),
        Cell::text("Count"),
        Cell::text("Percentage"),
    ]);
    for entry in &summary.by_protection {
        rows.push(vec![
            Cell::text(entry.suoja.clone()),
            Cell::Number(entry.count as f64),
            Cell::text(format!("{}%", entry.percentage)),
        ]);
    }

    rows.push(Vec::new());
    rows.push(Vec::new());

    // Block 3: all extracted devices
    rows.push(vec![Cell::text("ALL EXTRACTED DEVICES")]);
    rows.push(header_row(&device_cols));
    for device in &summary.devices {
        rows.push(value_row(&device_cols, device));
    }

    // The device block has the widest column set; size columns off it
    let column_widths = device_cols.iter().map(|c| c.width).collect();

    ExportSheet {
        name: "Summary Report",
        rows,
        column_widths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowData;
    use crate::store::ExtractionStore;
    use crate::summary::engine::summarize;
    use std::collections::BTreeMap;

    fn sample_summary() -> Summary {
        let mut pages = BTreeMap::new();
        pages.insert(
            0,
            vec![
                RowData {
                    icons: vec!["JOHDONSUOJA_1".into()],
                    nro: "F1".into(),
                    kuvateksti: "Valaistus".into(),
                    suoja: "16A/20A".into(),
                    kaapeli: "MMJ 3x1.5S".into(),
                },
                RowData {
                    icons: vec!["JOHDONSUOJA_1".into()],
                    nro: "F2".into(),
                    kuvateksti: "Pistorasiat".into(),
                    suoja: "16A/20A".into(),
                    kaapeli: "MMJ 3x2.5S".into(),
                },
            ],
        );
        summarize(&ExtractionStore::from_pages(pages))
    }

    fn headers_of(row: &[Cell]) -> Vec<&str> {
        row.iter()
            .map(|c| match c {
                Cell::Text(s) => s.as_str(),
                _ => "",
            })
            .collect()
    }

    #[test]
    fn test_default_columns() {
        let sheet = build_export(&sample_summary(), &DisplayOptions::default());
        assert_eq!(headers_of(&sheet.rows[1]), vec!["Type", "Suoja", "Quantity"]);
    }

    #[test]
    fn test_split_and_cable_columns() {
        let opts = DisplayOptions {
            show_cable: true,
            separate_input_output: true,
        };
        let sheet = build_export(&sample_summary(), &opts);
        assert_eq!(
            headers_of(&sheet.rows[1]),
            vec!["Type", "Suoja Input", "Suoja Output", "Cable Types", "Quantity"]
        );

        // The one aggregated group: split suoja, mismatch-marked cables
        let item_row = &sheet.rows[2];
        assert_eq!(item_row[1], Cell::Text("16A".into()));
        assert_eq!(item_row[2], Cell::Text("20A".into()));
        assert_eq!(
            item_row[3],
            Cell::Text("MMJ 3x1.5S, MMJ 3x2.5S ⚠ MISMATCH".into())
        );
        assert_eq!(item_row[4], Cell::Number(2.0));
    }

    #[test]
    fn test_total_row_lands_before_quantity() {
        let sheet = build_export(&sample_summary(), &DisplayOptions::default());
        // rows: title, header, 1 item, total
        let total_row = &sheet.rows[3];
        assert_eq!(total_row[1], Cell::Text("TOTAL:".into()));
        assert_eq!(total_row[2], Cell::Number(2.0));
    }

    #[test]
    fn test_protection_block_renders_percentage() {
        let sheet = build_export(&sample_summary(), &DisplayOptions::default());
        let idx = sheet
            .rows
            .iter()
            .position(|r| r.first() == Some(&Cell::Text("BY PROTECTION VALUE".into())))
            .unwrap();
        assert_eq!(
            headers_of(&sheet.rows[idx + 1]),
            vec!["Suoja", "Count", "Percentage"]
        );
        assert_eq!(sheet.rows[idx + 2][0], Cell::Text("16A/20A".into()));
        assert_eq!(sheet.rows[idx + 2][1], Cell::Number(2.0));
        assert_eq!(sheet.rows[idx + 2][2], Cell::Text("100.0%".into()));
    }

    #[test]
    fn test_device_block_headers_follow_flags() {
        let opts = DisplayOptions {
            show_cable: true,
            separate_input_output: false,
        };
        let sheet = build_export(&sample_summary(), &opts);
        let idx = sheet
            .rows
            .iter()
            .position(|r| r.first() == Some(&Cell::Text("ALL EXTRACTED DEVICES".into())))
            .unwrap();
        assert_eq!(
            headers_of(&sheet.rows[idx + 1]),
            vec!["Page", "Type", "NRo", "Kuvateksti", "Suoja", "Kaapeli"]
        );
        let first_device = &sheet.rows[idx + 2];
        assert_eq!(first_device[0], Cell::Number(1.0));
        assert_eq!(first_device[2], Cell::Text("F1".into()));
        assert_eq!(first_device[5], Cell::Text("MMJ 3x1.5S".into()));
    }

    #[test]
    fn test_empty_summary_still_projects_all_blocks() {
        let summary = summarize(&ExtractionStore::new());
        let sheet = build_export(&summary, &DisplayOptions::default());
        let titles: Vec<&str> = sheet
            .rows
            .iter()
            .filter_map(|r| match r.first() {
                Some(Cell::Text(s)) if s.chars().all(|c| c.is_uppercase() || c.is_whitespace()) => {
                    Some(s.as_str())
                }
                _ => None,
            })
            .collect();
        assert!(titles.contains(&"DEVICE SUMMARY"));
        assert!(titles.contains(&"BY PROTECTION VALUE"));
        assert!(titles.contains(&"ALL EXTRACTED DEVICES"));
    }
}
